mod check_wildcard;
mod resolve_dns;
mod reverse_dns;

pub use check_wildcard::{evaluate_probes, CheckWildcardUseCase, WILDCARD_PROBE_LABELS};
pub use resolve_dns::ResolveDnsUseCase;
pub use reverse_dns::{reverse_name, ReverseDnsUseCase};
