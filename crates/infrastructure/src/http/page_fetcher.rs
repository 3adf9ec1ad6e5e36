//! Plain HTTP GET with browser-like headers.

use async_trait::async_trait;
use ferrous_recon_application::ports::PageFetcher;
use ferrous_recon_domain::{DomainError, FallbackConfig};
use tracing::debug;

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.8";

pub struct ReqwestPageFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestPageFetcher {
    pub fn new(config: &FallbackConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            user_agent: config.user_agent.clone(),
        }
    }

    async fn get(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .send()
            .await?
            .text()
            .await
    }
}

#[async_trait]
impl PageFetcher for ReqwestPageFetcher {
    /// An empty body signals failure; transport errors are logged, not returned.
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        match self.get(url).await {
            Ok(body) => {
                debug!(url, bytes = body.len(), "Fetched page");
                Ok(body)
            }
            Err(e) => {
                debug!(url, error = %e, "Page fetch failed");
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_yields_empty_body() {
        let config = FallbackConfig {
            timeout: 1,
            ..FallbackConfig::default()
        };
        let fetcher = ReqwestPageFetcher::new(&config);

        let body = fetcher.fetch("http://127.0.0.1:1/resolve").await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_url_yields_empty_body() {
        let fetcher = ReqwestPageFetcher::new(&FallbackConfig::default());
        assert_eq!(fetcher.fetch("not a url").await.unwrap(), "");
    }
}
