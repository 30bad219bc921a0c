use crate::models::{Claim, TrustScoreCalculation};

/// The single entry point collaborators call: claims in, score and
/// explanation out. Implementations are pure and deterministic.
pub trait ITrustScorer: Send + Sync {
    fn calculate_trust_score(&self, claims: &[Claim]) -> TrustScoreCalculation;
}
