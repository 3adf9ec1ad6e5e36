//! DNS-over-HTTPS JSON resolver (`dns.google.com/resolve` wire shape).
//!
//! Bypasses the UDP queue entirely: one HTTP GET per lookup through the
//! `PageFetcher` port.

use async_trait::async_trait;
use ferrous_recon_application::ports::{DnsResolver, PageFetcher};
use ferrous_recon_domain::{Answer, DomainError, FallbackConfig, RecordType};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

const SOA_TYPE: u16 = 6;

#[derive(Debug, Deserialize)]
struct JsonResolveResponse {
    #[serde(rename = "Status", default)]
    status: i32,

    #[serde(rename = "Answer", default)]
    answer: Vec<Answer>,

    #[serde(rename = "Authority", default)]
    authority: Vec<Answer>,
}

pub struct JsonDnsResolver {
    fetcher: Arc<dyn PageFetcher>,
    url: String,
}

impl JsonDnsResolver {
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: &FallbackConfig) -> Self {
        Self {
            fetcher,
            url: config.url.clone(),
        }
    }

    fn query_url(&self, name: &str, record_type: RecordType) -> Result<String, DomainError> {
        // Do not send our location information with the query
        reqwest::Url::parse_with_params(
            &self.url,
            &[
                ("name", name),
                ("type", record_type.as_str()),
                ("edns_client_subnet", "0.0.0.0/0"),
            ],
        )
        .map(String::from)
        .map_err(|e| {
            DomainError::ConfigError(format!("Invalid fallback URL '{}': {}", self.url, e))
        })
    }
}

#[async_trait]
impl DnsResolver for JsonDnsResolver {
    /// `server` is ignored; the configured service picks its own upstreams.
    async fn resolve(
        &self,
        name: &str,
        _server: &str,
        record_type: RecordType,
    ) -> Result<Vec<Answer>, DomainError> {
        let url = self.query_url(name, record_type)?;

        let page = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|e| DomainError::FallbackUnavailable(e.to_string()))?;
        if page.is_empty() {
            return Err(DomainError::FallbackUnavailable(self.url.clone()));
        }

        let response: JsonResolveResponse = serde_json::from_str(&page)
            .map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))?;

        if let Some(authority) = response.authority.first() {
            if authority.record_type == SOA_TYPE {
                return Err(DomainError::FallbackAuthority(authority.data.clone()));
            }
            return Err(DomainError::FallbackStatus {
                record_type: record_type.to_string(),
                status: response.status,
            });
        }

        if response.status != 0 {
            return Err(DomainError::FallbackStatus {
                record_type: record_type.to_string(),
                status: response.status,
            });
        }

        debug!(
            name,
            record_type = %record_type,
            answers = response.answer.len(),
            "JSON DNS lookup complete"
        );

        Ok(response.answer)
    }
}
