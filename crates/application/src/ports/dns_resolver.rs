use async_trait::async_trait;
use ferrous_recon_domain::{Answer, DomainError, RecordType};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolve `name` for `record_type` against `server` (`host:port`).
    ///
    /// Implementations that have no notion of a target server may ignore it.
    async fn resolve(
        &self,
        name: &str,
        server: &str,
        record_type: RecordType,
    ) -> Result<Vec<Answer>, DomainError>;
}
