use serde::Serialize;

/// Outcome of probing a domain for catch-all DNS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WildcardResult {
    pub has_wildcard: bool,
    /// Address every probe resolved to; empty unless `has_wildcard`.
    pub ip: String,
}

impl WildcardResult {
    pub fn detected(ip: impl Into<String>) -> Self {
        Self {
            has_wildcard: true,
            ip: ip.into(),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}
