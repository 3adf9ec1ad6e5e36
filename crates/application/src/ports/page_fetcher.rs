use async_trait::async_trait;
use ferrous_recon_domain::DomainError;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return the response body. An empty body means failure.
    async fn fetch(&self, url: &str) -> Result<String, DomainError>;
}
