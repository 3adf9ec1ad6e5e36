use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackConfig {
    /// JSON resolve endpoint (Google-style `?name=&type=` API).
    #[serde(default = "default_url")]
    pub url: String,

    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl FallbackConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_url() -> String {
    "https://dns.google.com/resolve".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
