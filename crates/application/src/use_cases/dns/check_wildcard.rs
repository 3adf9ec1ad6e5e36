use crate::ports::DnsResolver;
use ferrous_recon_domain::{first_address, DomainError, RecordType, WildcardResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Labels no real zone should contain. All three resolving to one address
/// means the zone answers every name.
pub const WILDCARD_PROBE_LABELS: [&str; 3] = [
    "81very92unlikely03name",
    "45another34random99name",
    "95plausibly27nonexistent61label",
];

pub struct CheckWildcardUseCase {
    resolver: Arc<dyn DnsResolver>,
    server: Arc<str>,
}

impl CheckWildcardUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, server: impl Into<Arc<str>>) -> Self {
        Self {
            resolver,
            server: server.into(),
        }
    }

    pub async fn execute(&self, domain: &str) -> Result<WildcardResult, DomainError> {
        let domain = domain.trim().trim_end_matches('.');
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "empty domain for wildcard check".to_string(),
            ));
        }

        let [first, second, third] = WILDCARD_PROBE_LABELS.map(|label| format!("{label}.{domain}"));

        let (a, b, c) = tokio::join!(
            self.probe(&first),
            self.probe(&second),
            self.probe(&third)
        );

        let result = evaluate_probes(&[a, b, c]);
        info!(
            domain,
            has_wildcard = result.has_wildcard,
            ip = %result.ip,
            "Wildcard check complete"
        );
        Ok(result)
    }

    /// First address a probe name resolves to, or an empty string.
    async fn probe(&self, name: &str) -> String {
        match self.resolver.resolve(name, &self.server, RecordType::A).await {
            Ok(answers) => first_address(&answers).unwrap_or_default().to_string(),
            Err(e) => {
                debug!(name, error = %e, "Wildcard probe did not resolve");
                String::new()
            }
        }
    }
}

/// `{true, ip}` only when every probe produced the same non-empty address.
pub fn evaluate_probes(ips: &[String]) -> WildcardResult {
    match ips.first() {
        Some(ip) if !ip.is_empty() && ips.iter().all(|other| other == ip) => {
            WildcardResult::detected(ip.clone())
        }
        _ => WildcardResult::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ips(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_all_equal_is_wildcard() {
        let result = evaluate_probes(&ips(&["1.2.3.4", "1.2.3.4", "1.2.3.4"]));
        assert_eq!(result, WildcardResult::detected("1.2.3.4"));
    }

    #[test]
    fn test_one_differs() {
        let result = evaluate_probes(&ips(&["1.2.3.4", "5.6.7.8", "1.2.3.4"]));
        assert_eq!(result, WildcardResult::none());
    }

    #[test]
    fn test_any_empty() {
        assert_eq!(
            evaluate_probes(&ips(&["1.2.3.4", "1.2.3.4", ""])),
            WildcardResult::none()
        );
        assert_eq!(evaluate_probes(&ips(&["", "", ""])), WildcardResult::none());
    }

    #[test]
    fn test_no_probes() {
        assert_eq!(evaluate_probes(&[]), WildcardResult::none());
    }

    #[test]
    fn test_probe_labels_are_distinct() {
        let [a, b, c] = WILDCARD_PROBE_LABELS;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
