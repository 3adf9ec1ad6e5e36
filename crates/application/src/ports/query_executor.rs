use async_trait::async_trait;
use ferrous_recon_domain::{Answer, DnsRequest, DomainError};

/// Performs a single query exchange for one request.
///
/// `Ok` may hold an empty list (name exists but nothing of the requested
/// type was decoded). `Err` carries the transport or protocol diagnostic.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, request: &DnsRequest) -> Result<Vec<Answer>, DomainError>;
}
