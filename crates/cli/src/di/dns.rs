use ferrous_recon_domain::Config;
use ferrous_recon_infrastructure::dns::transport::UdpTransport;
use ferrous_recon_infrastructure::dns::{JsonDnsResolver, ResolverService, UdpQueryExecutor};
use ferrous_recon_infrastructure::http::ReqwestPageFetcher;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<ResolverService>,
    pub fallback: Arc<JsonDnsResolver>,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let transport = Arc::new(UdpTransport::new());
        let executor = Arc::new(UdpQueryExecutor::new(transport, &config.resolver));

        let resolver = Arc::new(ResolverService::new(&config.resolver, executor));
        resolver.start().await?;

        let fetcher = Arc::new(ReqwestPageFetcher::new(&config.fallback));
        let fallback = Arc::new(JsonDnsResolver::new(fetcher, &config.fallback));

        info!(
            queue_capacity = resolver.queue_capacity(),
            fallback_url = %config.fallback.url,
            "DNS services initialized"
        );

        Ok(Self { resolver, fallback })
    }

    pub async fn shutdown(&self) {
        self.resolver.stop().await;
    }
}
