/// Tillit engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight assigned to any source the authority registry does not know.
pub const UNKNOWN_SOURCE_WEIGHT: f64 = 0.10;

/// Registry key of the synthetic "unknown source" entry.
pub const UNKNOWN_SOURCE_ID: &str = "unknown";

/// Upper bound of the final trust score.
pub const MAX_TRUST_SCORE: f64 = 100.0;
