//! Span definitions per operation.

/// Span around one trust score calculation.
#[macro_export]
macro_rules! scoring_span {
    ($claim_count:expr, $registry_version:expr) => {
        tracing::info_span!(
            "tillit.scoring",
            claim_count = $claim_count,
            registry_version = %$registry_version
        )
    };
}

/// Span around the pairwise contradiction scan.
#[macro_export]
macro_rules! contradiction_scan_span {
    ($claim_count:expr, $parallel:expr) => {
        tracing::debug_span!(
            "tillit.contradiction_scan",
            claim_count = $claim_count,
            parallel = $parallel
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "tillit.scoring";
    pub const CONTRADICTION_SCAN: &str = "tillit.contradiction_scan";
}
