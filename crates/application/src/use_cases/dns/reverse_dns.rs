use crate::ports::DnsResolver;
use ferrous_recon_domain::{DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

const IPV4_REVERSE_ZONE: &str = "in-addr.arpa";
const IPV6_REVERSE_ZONE: &str = "ip6.arpa";

pub struct ReverseDnsUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ReverseDnsUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// PTR lookup for `ip`, returning the host name without its trailing dot.
    pub async fn execute(&self, ip: &str, server: &str) -> Result<String, DomainError> {
        let reverse_domain = reverse_name(ip)?;

        debug!(ip, reverse_domain = %reverse_domain, "Performing PTR lookup");

        let answers = self
            .resolver
            .resolve(&reverse_domain, server, RecordType::PTR)
            .await?;

        let hostname = answers
            .first()
            .filter(|answer| answer.record_type == RecordType::PTR.to_u16())
            .map(|answer| {
                answer
                    .data
                    .strip_suffix('.')
                    .unwrap_or(&answer.data)
                    .to_string()
            })
            .unwrap_or_default();

        if hostname.is_empty() {
            return Err(DomainError::PtrNotFound);
        }

        debug!(ip, hostname = %hostname, "PTR lookup successful");
        Ok(hostname)
    }
}

/// Reverse-mapping name for an address: `1.2.3.4` becomes
/// `4.3.2.1.in-addr.arpa`, IPv6 addresses use the nibble form under `ip6.arpa`.
pub fn reverse_name(ip: &str) -> Result<String, DomainError> {
    let addr: IpAddr = ip
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

    Ok(match addr {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.{}",
                octets[3], octets[2], octets[1], octets[0], IPV4_REVERSE_ZONE
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(32);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.{}", nibbles.join("."), IPV6_REVERSE_ZONE)
        }
    })
}
