use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which contradiction pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionType {
    /// Liability denial alongside a settlement or compensation offer.
    SettlementLogic,
    /// "No personal data held" alongside evidence of data processing.
    DataContradiction,
    /// A lower-authority source contradicts a higher-authority one.
    AuthorityHierarchyViolation,
    /// The same source says opposite things more than a day apart.
    TemporalInconsistency,
    /// Mutually exclusive absolute terms (never/always, legal/illegal, ...).
    LogicalImpossibility,
    /// Sentences within a single claim contradict each other.
    SelfContradiction,
}

impl ContradictionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SettlementLogic => "settlement_logic",
            Self::DataContradiction => "data_contradiction",
            Self::AuthorityHierarchyViolation => "authority_hierarchy_violation",
            Self::TemporalInconsistency => "temporal_inconsistency",
            Self::LogicalImpossibility => "logical_impossibility",
            Self::SelfContradiction => "self_contradiction",
        }
    }
}

impl std::fmt::Display for ContradictionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of a single detection strategy for one claim pair (or one claim).
///
/// Strategies return `Option<ContradictionResult>`; `None` means not detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContradictionResult {
    pub contradiction_type: ContradictionType,
    /// Detection confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Technical explanation of what matched.
    pub explanation: String,
    /// Plain-language message suitable for the affected person.
    pub kindness_message: String,
    /// Evidence the affected person could request to substantiate the finding.
    pub evidence: Vec<String>,
    /// Suggested next step.
    pub recommendation: String,
}

/// A detected contradiction as it enters the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContradictionPenalty {
    pub contradiction_type: ContradictionType,
    /// Detection confidence, used directly as the penalty magnitude.
    pub contradiction_penalty: f64,
    /// Weight difference between the contradicting sources, in [0.0, 1.0].
    pub authority_differential: f64,
    pub explanation: String,
    /// Implicated source identifiers.
    pub sources: Vec<String>,
    /// Implicated claim identifiers.
    pub claim_ids: Vec<String>,
    pub kindness_message: String,
    pub recommendation: String,
    pub evidence: Vec<String>,
}

impl ContradictionPenalty {
    /// Build a penalty from a strategy verdict.
    pub fn from_result(
        result: ContradictionResult,
        authority_differential: f64,
        sources: Vec<String>,
        claim_ids: Vec<String>,
    ) -> Self {
        Self {
            contradiction_type: result.contradiction_type,
            contradiction_penalty: result.confidence,
            authority_differential,
            explanation: result.explanation,
            sources,
            claim_ids,
            kindness_message: result.kindness_message,
            recommendation: result.recommendation,
            evidence: result.evidence,
        }
    }

    /// This penalty's contribution to the aggregate penalty score.
    pub fn weighted(&self) -> f64 {
        self.contradiction_penalty * self.authority_differential
    }
}
