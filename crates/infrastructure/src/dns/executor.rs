use super::forwarding::{decode_answers, MessageBuilder, ResponseParser};
use super::transport::{resolve_server_addr, DnsTransport};
use async_trait::async_trait;
use ferrous_recon_application::ports::QueryExecutor;
use ferrous_recon_domain::{Answer, DnsRequest, DomainError, ResolverConfig};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Performs one wire exchange per request over a shared transport.
pub struct UdpQueryExecutor {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
    edns_payload: u16,
}

impl UdpQueryExecutor {
    pub fn new(transport: Arc<dyn DnsTransport>, config: &ResolverConfig) -> Self {
        Self {
            transport,
            timeout: config.timeout(),
            edns_payload: config.edns_payload,
        }
    }
}

#[async_trait]
impl QueryExecutor for UdpQueryExecutor {
    async fn execute(&self, request: &DnsRequest) -> Result<Vec<Answer>, DomainError> {
        let server = resolve_server_addr(&request.server).await?;

        let (id, query) = MessageBuilder::build_query_with_id(
            &request.name,
            &request.record_type,
            self.edns_payload,
        )?;

        let started = Instant::now();
        let response = self
            .transport
            .exchange(server, &query, self.timeout)
            .await?;
        let rtt_ms = u32::try_from(started.elapsed().as_millis()).unwrap_or(u32::MAX);

        let parsed = ResponseParser::parse(&response.bytes)?;

        if !parsed.is_success() {
            return Err(DomainError::ResponseCode {
                server: server.to_string(),
                rcode: ResponseParser::rcode_to_status(parsed.rcode).to_string(),
            });
        }

        let answers = decode_answers(
            &request.name,
            request.record_type,
            &parsed.answers,
            rtt_ms,
        );

        debug!(
            id,
            name = %request.name,
            record_type = %request.record_type,
            server = %server,
            protocol = response.protocol_used,
            rtt_ms,
            answers = answers.len(),
            truncated = parsed.truncated,
            "DNS exchange complete"
        );

        Ok(answers)
    }
}
