//! Contradiction penalties for a claim set.

use tillit_authority::AuthorityRegistry;
use tillit_contradiction::{ContradictionDetector, DetectionContext};
use tillit_core::config::ScoringConfig;
use tillit_core::{Claim, ContradictionPenalty};
use tillit_observability::events;

/// Pairwise penalties in `(i, j)` order, then self-contradictions in claim
/// order. Only detections above the contradiction threshold count.
///
/// Pair penalties carry `|weight(a) − weight(b)|` as authority differential;
/// self-contradictions carry the configured self-contradiction differential
/// whatever the claim's own weight.
pub fn collect(
    claims: &[Claim],
    detector: &ContradictionDetector,
    ctx: &DetectionContext<'_>,
    registry: &AuthorityRegistry,
    config: &ScoringConfig,
) -> Vec<ContradictionPenalty> {
    let parallel = claims.len() >= config.parallel_pair_threshold;
    let span = tillit_observability::contradiction_scan_span!(claims.len(), parallel);
    let _guard = span.enter();

    let mut penalties = Vec::new();

    for finding in detector.scan_pairs(claims, ctx, parallel) {
        if finding.result.confidence <= config.contradiction_threshold {
            continue;
        }
        let a = &claims[finding.first];
        let b = &claims[finding.second];
        let differential = (registry.weight_of(&a.source) - registry.weight_of(&b.source)).abs();
        penalties.push(ContradictionPenalty::from_result(
            finding.result,
            differential,
            vec![a.source.clone(), b.source.clone()],
            vec![a.id.clone(), b.id.clone()],
        ));
    }

    for claim in claims {
        let Some(result) = detector.detect_self(claim, ctx) else {
            continue;
        };
        if result.confidence <= config.contradiction_threshold {
            continue;
        }
        penalties.push(ContradictionPenalty::from_result(
            result,
            ctx.config.self_contradiction_differential,
            vec![claim.source.clone()],
            vec![claim.id.clone()],
        ));
    }

    for p in &penalties {
        events::contradiction_detected(
            &p.claim_ids,
            p.contradiction_type.as_str(),
            p.contradiction_penalty,
        );
    }

    penalties
}
