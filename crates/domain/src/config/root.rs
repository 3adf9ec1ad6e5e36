use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::fallback::FallbackConfig;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-recon.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-recon/config.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for Ferrous Recon
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// UDP resolver service configuration
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// DNS-over-HTTPS JSON fallback configuration
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-recon.toml in current directory
    /// 3. /etc/ferrous-recon/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.resolver.default_server = server;
        }
        if let Some(capacity) = overrides.queue_capacity {
            self.resolver.queue_capacity = capacity;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.resolver.query_timeout = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.default_server.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No default DNS server configured".to_string(),
            ));
        }

        if self.resolver.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Resolver queue capacity must be greater than 0".to_string(),
            ));
        }

        if self.resolver.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }

        if self.fallback.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Fallback resolver URL cannot be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub queue_capacity: Option<usize>,
    pub query_timeout: Option<u64>,
    pub log_level: Option<String>,
}
