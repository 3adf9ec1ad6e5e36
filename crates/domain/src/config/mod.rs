//! Configuration module for Ferrous Recon
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: UDP resolver service (default server, queue, timeouts)
//! - `fallback`: DNS-over-HTTPS JSON fallback resolver
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod fallback;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use fallback::FallbackConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
