use ferrous_recon_domain::{Config, LogFormat};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level. Output goes to stderr so
/// stdout carries only lookup results.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.with_ansi(true).init(),
    }

    debug!("Logging initialized at level: {}", config.logging.level);
}
