use super::DnsServices;
use ferrous_recon_application::use_cases::{
    CheckWildcardUseCase, ResolveDnsUseCase, ReverseDnsUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub resolve: Arc<ResolveDnsUseCase>,
    pub reverse: Arc<ReverseDnsUseCase>,
    pub check_wildcard: Arc<CheckWildcardUseCase>,
    pub resolve_fallback: Arc<ResolveDnsUseCase>,
}

impl UseCases {
    pub fn new(dns: &DnsServices) -> Self {
        Self {
            resolve: Arc::new(ResolveDnsUseCase::new(dns.resolver.clone())),
            reverse: Arc::new(ReverseDnsUseCase::new(dns.resolver.clone())),
            check_wildcard: Arc::new(CheckWildcardUseCase::new(
                dns.resolver.clone(),
                dns.resolver.default_server(),
            )),
            resolve_fallback: Arc::new(ResolveDnsUseCase::new(dns.fallback.clone())),
        }
    }
}
