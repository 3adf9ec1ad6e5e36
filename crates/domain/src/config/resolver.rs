use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Server used when a caller does not name one (wildcard probes, CLI).
    #[serde(default = "default_server")]
    pub default_server: String,

    /// Capacity of the pending-request queue; enqueue waits when full.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Per-exchange transport timeout in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// UDP payload size advertised in the EDNS0 OPT record.
    #[serde(default = "default_edns_payload")]
    pub edns_payload: u16,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_server: default_server(),
            queue_capacity: default_queue_capacity(),
            query_timeout: default_query_timeout(),
            edns_payload: default_edns_payload(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_queue_capacity() -> usize {
    50
}

fn default_query_timeout() -> u64 {
    5
}

fn default_edns_payload() -> u16 {
    4096
}
