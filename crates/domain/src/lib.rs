//! Ferrous Recon Domain Layer
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod wildcard;

pub use config::{
    CliOverrides, Config, ConfigError, FallbackConfig, LogFormat, LoggingConfig, ResolverConfig,
};
pub use dns_record::{first_address, Answer, RecordType};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use wildcard::WildcardResult;
