use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::contradiction::ContradictionPenalty;

/// Per-claim evidentiary contribution. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthorityFactor {
    pub claim_id: String,
    pub source: String,
    /// Registry weight of the claim's source.
    pub authority_weight: f64,
    /// Weight boosted by evidence quality and freshness, capped at 1.0.
    pub authority_score: f64,
    /// Corroboration confidence from independent sources.
    pub cross_vector_confidence: f64,
    pub claim_content: String,
    /// Evidence contents joined by newlines.
    pub evidence_text: String,
    /// Claims that corroborated this one, strongest first.
    pub corroborating_claim_ids: Vec<String>,
}

impl AuthorityFactor {
    /// This factor's contribution to the aggregate positive score.
    pub fn contribution(&self) -> f64 {
        self.authority_weight * self.authority_score * self.cross_vector_confidence
    }
}

/// The engine's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrustScoreCalculation {
    /// One factor per input claim, in input order.
    pub authority_factors: Vec<AuthorityFactor>,
    /// Pairwise penalties in (i, j) order, followed by self-contradictions.
    pub contradiction_penalties: Vec<ContradictionPenalty>,
    pub positive_score: f64,
    pub penalty_score: f64,
    /// Final score in [0, 100].
    pub final_score: f64,
    /// How much evidence backs the score, in [0, 1].
    pub confidence: f64,
    pub registry_version: String,
    pub lexicon_version: String,
}

impl TrustScoreCalculation {
    /// Result for an empty claim list.
    pub fn empty(registry_version: impl Into<String>, lexicon_version: impl Into<String>) -> Self {
        Self {
            authority_factors: Vec::new(),
            contradiction_penalties: Vec::new(),
            positive_score: 0.0,
            penalty_score: 0.0,
            final_score: 0.0,
            confidence: 0.0,
            registry_version: registry_version.into(),
            lexicon_version: lexicon_version.into(),
        }
    }

    pub fn trust_level(&self) -> TrustLevel {
        TrustLevel::from_score(self.final_score)
    }

    pub fn has_contradictions(&self) -> bool {
        !self.contradiction_penalties.is_empty()
    }

    /// Deterministic multi-line explanation of how the score was reached.
    pub fn explain(&self) -> String {
        let mut lines = vec![format!(
            "Trust score {:.1}/100 ({}), confidence {:.2}",
            self.final_score,
            self.trust_level(),
            self.confidence
        )];
        lines.push(format!(
            "Positive evidence {:.4} from {} claim(s); penalties {:.4} from {} contradiction(s)",
            self.positive_score,
            self.authority_factors.len(),
            self.penalty_score,
            self.contradiction_penalties.len()
        ));
        for f in &self.authority_factors {
            lines.push(format!(
                "  + {} [{}] weight {:.2} x score {:.2} x corroboration {:.2} = {:.4}",
                f.claim_id,
                f.source,
                f.authority_weight,
                f.authority_score,
                f.cross_vector_confidence,
                f.contribution()
            ));
        }
        for p in &self.contradiction_penalties {
            lines.push(format!(
                "  - {} [{}] confidence {:.2} x differential {:.2} = {:.4}: {}",
                p.contradiction_type,
                p.claim_ids.join(", "),
                p.contradiction_penalty,
                p.authority_differential,
                p.weighted(),
                p.explanation
            ));
        }
        lines.join("\n")
    }

    /// blake3 digest over every numeric and identifying field, for audit logs.
    ///
    /// Identical inputs against the same registry and lexicon produce the same
    /// fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.registry_version.as_bytes());
        hasher.update(self.lexicon_version.as_bytes());
        for f in &self.authority_factors {
            hasher.update(f.claim_id.as_bytes());
            hasher.update(f.source.as_bytes());
            hasher.update(&f.authority_weight.to_le_bytes());
            hasher.update(&f.authority_score.to_le_bytes());
            hasher.update(&f.cross_vector_confidence.to_le_bytes());
        }
        for p in &self.contradiction_penalties {
            hasher.update(p.contradiction_type.as_str().as_bytes());
            hasher.update(&p.contradiction_penalty.to_le_bytes());
            hasher.update(&p.authority_differential.to_le_bytes());
            for id in &p.claim_ids {
                hasher.update(id.as_bytes());
            }
        }
        hasher.update(&self.final_score.to_le_bytes());
        hasher.update(&self.confidence.to_le_bytes());
        hasher.finalize().to_hex().to_string()
    }
}

/// Coarse band of a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl TrustLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            Self::VeryLow
        } else if score < 40.0 {
            Self::Low
        } else if score < 60.0 {
            Self::Moderate
        } else if score < 80.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
