use serde::{Deserialize, Serialize};

use super::defaults;
use crate::lexicon::LexicalDenominator;

/// Thresholds of the contradiction detectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum weight gap for an authority-hierarchy violation.
    pub hierarchy_weight_gap: f64,
    /// Lexical score a hierarchy violation must exceed.
    pub hierarchy_lexical_threshold: f64,
    /// Lexical score a temporal inconsistency must exceed.
    pub temporal_lexical_threshold: f64,
    /// Minimum time between two same-source claims, in hours.
    pub temporal_min_gap_hours: i64,
    /// Confidence a self-contradiction must exceed.
    pub self_contradiction_threshold: f64,
    /// Authority differential assigned to self-contradictions.
    pub self_contradiction_differential: f64,
    /// Denominator of the lexical contradiction score used by the detectors.
    pub lexical_denominator: LexicalDenominator,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            hierarchy_weight_gap: defaults::DEFAULT_HIERARCHY_WEIGHT_GAP,
            hierarchy_lexical_threshold: defaults::DEFAULT_HIERARCHY_LEXICAL_THRESHOLD,
            temporal_lexical_threshold: defaults::DEFAULT_TEMPORAL_LEXICAL_THRESHOLD,
            temporal_min_gap_hours: defaults::DEFAULT_TEMPORAL_MIN_GAP_HOURS,
            self_contradiction_threshold: defaults::DEFAULT_SELF_CONTRADICTION_THRESHOLD,
            self_contradiction_differential: defaults::DEFAULT_SELF_CONTRADICTION_DIFFERENTIAL,
            lexical_denominator: defaults::DEFAULT_LEXICAL_DENOMINATOR,
        }
    }
}
