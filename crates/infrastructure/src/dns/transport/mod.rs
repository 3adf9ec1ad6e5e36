pub mod udp;

use async_trait::async_trait;
use ferrous_recon_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One shared handle serves every in-flight query, so implementations must
/// tolerate concurrent `exchange` calls.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

/// Resolves `host:port` (or a bare host, which implies port 53) to a socket address.
pub async fn resolve_server_addr(server: &str) -> Result<SocketAddr, DomainError> {
    let server = server.trim();
    if server.is_empty() {
        return Err(DomainError::transport(server, "empty server address"));
    }

    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = server.parse::<std::net::IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }

    let target = if has_port(server) {
        server.to_string()
    } else {
        format!("{}:{}", server, DEFAULT_DNS_PORT)
    };

    let mut addrs = tokio::net::lookup_host(target.as_str())
        .await
        .map_err(|e| DomainError::transport(server, e))?;

    addrs
        .next()
        .ok_or_else(|| DomainError::transport(server, "server name resolved to no address"))
}

fn has_port(server: &str) -> bool {
    server
        .rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok())
}
