//! Engine configuration, loadable from TOML. Every field has a default.

mod corroboration_config;
pub mod defaults;
mod detection_config;
mod observability_config;
mod scoring_config;

pub use corroboration_config::CorroborationConfig;
pub use detection_config::DetectionConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TillitResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TillitConfig {
    pub scoring: ScoringConfig,
    pub detection: DetectionConfig,
    pub corroboration: CorroborationConfig,
    pub observability: ObservabilityConfig,
}

impl TillitConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> TillitResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            document: "config".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the formulas cannot work with.
    pub fn validate(&self) -> TillitResult<()> {
        let unit = [
            ("scoring.contradiction_threshold", self.scoring.contradiction_threshold),
            ("scoring.evidence_boost_max", self.scoring.evidence_boost_max),
            ("detection.hierarchy_weight_gap", self.detection.hierarchy_weight_gap),
            ("detection.hierarchy_lexical_threshold", self.detection.hierarchy_lexical_threshold),
            ("detection.temporal_lexical_threshold", self.detection.temporal_lexical_threshold),
            ("detection.self_contradiction_threshold", self.detection.self_contradiction_threshold),
            ("detection.self_contradiction_differential", self.detection.self_contradiction_differential),
            ("corroboration.similarity_threshold", self.corroboration.similarity_threshold),
            ("corroboration.decay", self.corroboration.decay),
            ("corroboration.standalone_floor", self.corroboration.standalone_floor),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{value} is outside [0, 1]"),
                }
                .into());
            }
        }
        if self.scoring.evidence_half_life_days <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.evidence_half_life_days".to_string(),
                reason: "must be positive".to_string(),
            }
            .into());
        }
        let gap = self.detection.temporal_min_gap_hours;
        if !(0..=defaults::MAX_TEMPORAL_MIN_GAP_HOURS).contains(&gap) {
            return Err(ConfigError::InvalidValue {
                field: "detection.temporal_min_gap_hours".to_string(),
                reason: format!(
                    "{gap} is outside [0, {}]",
                    defaults::MAX_TEMPORAL_MIN_GAP_HOURS
                ),
            }
            .into());
        }
        if self.scoring.evidence_saturation == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.evidence_saturation".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
