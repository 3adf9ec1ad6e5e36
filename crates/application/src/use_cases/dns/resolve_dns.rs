use crate::ports::DnsResolver;
use ferrous_recon_domain::{Answer, DomainError, RecordType};
use std::sync::Arc;
use tracing::debug;

pub struct ResolveDnsUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDnsUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve `name` against `server` for the record type mnemonic `qtype`.
    ///
    /// An unknown mnemonic is rejected before anything is enqueued.
    pub async fn execute(
        &self,
        name: &str,
        server: &str,
        qtype: &str,
    ) -> Result<Vec<Answer>, DomainError> {
        let record_type: RecordType = qtype.parse()?;

        debug!(name, server, record_type = %record_type, "Resolving");

        self.resolver.resolve(name, server, record_type).await
    }
}
