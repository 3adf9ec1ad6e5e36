use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRequest {
    pub name: Arc<str>,
    /// `host:port` of the name server; a bare host implies port 53.
    pub server: Arc<str>,
    pub record_type: RecordType,
}

impl DnsRequest {
    pub fn new(
        name: impl Into<Arc<str>>,
        server: impl Into<Arc<str>>,
        record_type: RecordType,
    ) -> Self {
        Self {
            name: name.into(),
            server: server.into(),
            record_type,
        }
    }
}
