use anyhow::Context;
use ferrous_recon_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides).context("loading configuration")?;
    config.validate().context("validating configuration")?;

    Ok(config)
}

/// Logged separately because the subscriber only exists after the config is read.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path
            .map(str::to_string)
            .or_else(Config::get_config_path)
            .as_deref()
            .unwrap_or("default"),
        default_server = %config.resolver.default_server,
        queue_capacity = config.resolver.queue_capacity,
        query_timeout = config.resolver.query_timeout,
        "Configuration loaded"
    );
}
