//! # tillit-scoring
//!
//! The trust score engine. For a claim set it computes one authority factor
//! per claim, collects contradiction penalties from the pairwise scan and the
//! per-claim self-contradiction check, and aggregates both:
//!
//! ```text
//! positive   = Σ authority_weight × authority_score × cross_vector_confidence
//! penalty    = Σ contradiction_penalty × authority_differential
//! final      = clamp((positive − penalty) × 100, 0, 100)
//! confidence = min(1, n / 5) × max(0, 1 − contradictions / n)
//! ```
//!
//! Scoring never fails: unknown sources fall back to the registry floor and
//! an empty claim set scores zero with zero confidence.

pub mod aggregation;
pub mod engine;
pub mod factors;
pub mod penalties;

pub use engine::TrustScoreEngine;
