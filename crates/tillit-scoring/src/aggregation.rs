//! Bounded aggregation of factors and penalties.
//!
//! Sums run sequentially in input order so repeated calls are bit-identical.

use tillit_core::constants::MAX_TRUST_SCORE;
use tillit_core::{AuthorityFactor, ContradictionPenalty};

/// `Σ authority_weight × authority_score × cross_vector_confidence`.
pub fn positive_score(factors: &[AuthorityFactor]) -> f64 {
    factors.iter().map(AuthorityFactor::contribution).sum()
}

/// `Σ contradiction_penalty × authority_differential`.
pub fn penalty_score(penalties: &[ContradictionPenalty]) -> f64 {
    penalties.iter().map(ContradictionPenalty::weighted).sum()
}

/// `clamp((positive − penalty) × 100, 0, 100)`.
pub fn final_score(positive: f64, penalty: f64) -> f64 {
    ((positive - penalty) * MAX_TRUST_SCORE).clamp(0.0, MAX_TRUST_SCORE)
}

/// Evidentiary richness times the contradiction discount.
///
/// Richness saturates at `saturation` factors. With no factors the result is
/// 0 and the discount is not evaluated.
pub fn confidence(factor_count: usize, contradiction_count: usize, saturation: usize) -> f64 {
    if factor_count == 0 {
        return 0.0;
    }
    let n = factor_count as f64;
    let evidence = (n / saturation.max(1) as f64).min(1.0);
    let discount = (1.0 - contradiction_count as f64 / n).max(0.0);
    evidence * discount
}
