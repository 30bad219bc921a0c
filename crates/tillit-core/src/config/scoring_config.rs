use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregation parameters of the trust score engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Contradictions at or below this confidence do not become penalties.
    pub contradiction_threshold: f64,
    /// Maximum relative boost evidence can add to a source's weight.
    pub evidence_boost_max: f64,
    /// Half-life of evidence reliability, in days.
    pub evidence_half_life_days: f64,
    /// Claim count at which evidentiary confidence saturates.
    pub evidence_saturation: usize,
    /// Claim count from which pairs are scanned in parallel.
    pub parallel_pair_threshold: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            contradiction_threshold: defaults::DEFAULT_CONTRADICTION_THRESHOLD,
            evidence_boost_max: defaults::DEFAULT_EVIDENCE_BOOST_MAX,
            evidence_half_life_days: defaults::DEFAULT_EVIDENCE_HALF_LIFE_DAYS,
            evidence_saturation: defaults::DEFAULT_EVIDENCE_SATURATION,
            parallel_pair_threshold: defaults::DEFAULT_PARALLEL_PAIR_THRESHOLD,
        }
    }
}
