use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported DNS type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Query to {server} timed out")]
    QueryTimeout { server: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("{server} answered with {rcode}")]
    ResponseCode { server: String, rcode: String },

    /// Every failed or empty resolution collapses into this for callers.
    #[error("The query was unsuccessful")]
    QueryUnsuccessful,

    #[error("PTR record not found")]
    PtrNotFound,

    #[error("Failed to reach the DNS-over-HTTPS JSON service: {0}")]
    FallbackUnavailable(String),

    #[error("{0}")]
    FallbackAuthority(String),

    #[error("Querying {record_type} record returned status: {status}")]
    FallbackStatus { record_type: String, status: i32 },

    #[error("Resolver service is not running")]
    ResolverNotRunning,

    #[error("Resolver service already started")]
    ResolverAlreadyStarted,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn transport(server: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Transport {
            server: server.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::QueryTimeout { .. })
    }

    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Self::ResponseCode { .. } | Self::InvalidDnsResponse(_))
    }
}
