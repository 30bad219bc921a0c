//! Per-claim authority factors.

pub mod evidence_quality;
pub mod temporal;

use chrono::{DateTime, Utc};
use tillit_authority::AuthorityRegistry;
use tillit_contradiction::CorroborationIndex;
use tillit_core::config::{CorroborationConfig, ScoringConfig};
use tillit_core::{AuthorityFactor, Claim, Evidence};

/// Shared inputs for computing the factors of one claim set.
pub struct FactorContext<'a> {
    pub registry: &'a AuthorityRegistry,
    pub corroboration: &'a CorroborationIndex<'a>,
    pub scoring: &'a ScoringConfig,
    pub corroboration_config: &'a CorroborationConfig,
    /// Reference time for evidence age. `None` measures each piece of
    /// evidence against the timestamp of the claim that owns it.
    pub as_of: Option<DateTime<Utc>>,
}

/// Source weight boosted by evidence quality and freshness:
///
/// `min(1, weight × (1 + boost_max × quality × reliability))`
///
/// A claim without evidence keeps its bare weight.
pub fn authority_score(
    weight: f64,
    evidence: &[Evidence],
    as_of: DateTime<Utc>,
    config: &ScoringConfig,
) -> f64 {
    let Some(quality) = evidence_quality::calculate(evidence) else {
        return weight;
    };
    let reliability = temporal::calculate(evidence, as_of, config.evidence_half_life_days);
    (weight * (1.0 + config.evidence_boost_max * quality * reliability)).min(1.0)
}

/// The authority factor of `claims[index]`.
pub fn compute(claims: &[Claim], index: usize, ctx: &FactorContext<'_>) -> AuthorityFactor {
    let claim = &claims[index];
    let authority_weight = ctx.registry.weight_of(&claim.source);
    let as_of = ctx.as_of.unwrap_or(claim.timestamp);
    let authority_score = authority_score(authority_weight, &claim.evidence, as_of, ctx.scoring);
    let corroboration = ctx
        .corroboration
        .assess(index, ctx.registry, ctx.corroboration_config);

    AuthorityFactor {
        claim_id: claim.id.clone(),
        source: claim.source.clone(),
        authority_weight,
        authority_score,
        cross_vector_confidence: corroboration.confidence,
        claim_content: claim.content.clone(),
        evidence_text: claim.evidence_text(),
        corroborating_claim_ids: corroboration
            .corroborators
            .into_iter()
            .map(|c| c.claim_id)
            .collect(),
    }
}
