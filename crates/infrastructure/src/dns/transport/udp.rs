//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Each exchange binds its own
//! ephemeral socket, so one transport instance can be shared by any number
//! of concurrent queries without their responses interleaving.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_recon_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::transport(server.to_string(), format!("failed to bind UDP socket: {}", e))
        })?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| DomainError::QueryTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| DomainError::transport(server.to_string(), e))?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| DomainError::QueryTimeout {
                        server: server.to_string(),
                    })?
                    .map_err(|e| DomainError::transport(server.to_string(), e))?;

            if from_addr.ip() != server.ip() {
                warn!(
                    expected = %server,
                    received_from = %from_addr,
                    "UDP response from unexpected source, ignoring"
                );
                continue;
            }

            let response = &recv_buf[..bytes_received];
            if let Err(e) = validate_response_id(message_bytes, response, server) {
                warn!(server = %server, error = %e, "Discarding UDP datagram");
                continue;
            }

            debug!(
                server = %server,
                bytes_received = bytes_received,
                "UDP response received"
            );

            recv_buf.truncate(bytes_received);
            return Ok(TransportResponse {
                bytes: recv_buf,
                protocol_used: "UDP",
            });
        }
    }
}

pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "DNS message from {} too short to carry an id",
            server
        )));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if query_id != response_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "DNS id mismatch from {}: sent {:#06x}, got {:#06x}",
            server, query_id, response_id
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
