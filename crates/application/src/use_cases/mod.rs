pub mod dns;

// Re-export use cases
pub use dns::{
    evaluate_probes, reverse_name, CheckWildcardUseCase, ResolveDnsUseCase, ReverseDnsUseCase,
    WILDCARD_PROBE_LABELS,
};
