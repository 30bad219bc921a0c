use serde::{Deserialize, Serialize};

use super::defaults;

/// Cross-vector corroboration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorroborationConfig {
    /// Jaccard similarity a corroborator must exceed.
    pub similarity_threshold: f64,
    /// Corroborators beyond this count are ignored.
    pub max_corroborators: usize,
    /// Geometric multiplier applied per additional corroborator.
    pub decay: f64,
    /// Confidence of a claim nobody corroborates.
    pub standalone_floor: f64,
}

impl Default for CorroborationConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            max_corroborators: defaults::DEFAULT_MAX_CORROBORATORS,
            decay: defaults::DEFAULT_CORROBORATION_DECAY,
            standalone_floor: defaults::DEFAULT_STANDALONE_FLOOR,
        }
    }
}
