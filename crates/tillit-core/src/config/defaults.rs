// Single source of truth for all default values.

use crate::lexicon::LexicalDenominator;

// --- Scoring ---
pub const DEFAULT_CONTRADICTION_THRESHOLD: f64 = 0.7;
pub const DEFAULT_EVIDENCE_BOOST_MAX: f64 = 0.25;
pub const DEFAULT_EVIDENCE_HALF_LIFE_DAYS: f64 = 365.0;
pub const DEFAULT_EVIDENCE_SATURATION: usize = 5;
pub const DEFAULT_PARALLEL_PAIR_THRESHOLD: usize = 64;

// --- Detection ---
pub const DEFAULT_HIERARCHY_WEIGHT_GAP: f64 = 0.2;
pub const DEFAULT_HIERARCHY_LEXICAL_THRESHOLD: f64 = 0.7;
pub const DEFAULT_TEMPORAL_LEXICAL_THRESHOLD: f64 = 0.6;
pub const DEFAULT_TEMPORAL_MIN_GAP_HOURS: i64 = 24;
pub const DEFAULT_SELF_CONTRADICTION_THRESHOLD: f64 = 0.8;
pub const DEFAULT_SELF_CONTRADICTION_DIFFERENTIAL: f64 = 1.0;
pub const DEFAULT_LEXICAL_DENOMINATOR: LexicalDenominator = LexicalDenominator::AllPairs;
/// Largest gap `chrono::Duration` can represent, in hours.
pub const MAX_TEMPORAL_MIN_GAP_HOURS: i64 = i64::MAX / 3_600_000;

// --- Corroboration ---
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MAX_CORROBORATORS: usize = 10;
pub const DEFAULT_CORROBORATION_DECAY: f64 = 0.8;
pub const DEFAULT_STANDALONE_FLOOR: f64 = 0.1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
