//! A lower-authority source contradicting a clearly higher-authority one.

use tillit_core::{Claim, ContradictionResult, ContradictionType};

use super::{excerpt, ContradictionStrategy, DetectionContext};

pub struct AuthorityHierarchy;

impl ContradictionStrategy for AuthorityHierarchy {
    fn name(&self) -> &'static str {
        "authority_hierarchy"
    }

    fn contradiction_type(&self) -> ContradictionType {
        ContradictionType::AuthorityHierarchyViolation
    }

    fn detect(
        &self,
        a: &Claim,
        b: &Claim,
        ctx: &DetectionContext<'_>,
    ) -> Option<ContradictionResult> {
        detect(a, b, ctx)
    }
}

/// Weights must differ by more than the configured gap and the lexical
/// contradiction score must exceed the configured threshold. Confidence is
/// the lexical score.
pub fn detect(a: &Claim, b: &Claim, ctx: &DetectionContext<'_>) -> Option<ContradictionResult> {
    let weight_a = ctx.registry.weight_of(&a.source);
    let weight_b = ctx.registry.weight_of(&b.source);
    if (weight_a - weight_b).abs() <= ctx.config.hierarchy_weight_gap {
        return None;
    }

    let (lower, higher) = if weight_a < weight_b { (a, b) } else { (b, a) };
    let score = ctx.lexicon.contradiction_score_with(
        &lower.content,
        &higher.content,
        ctx.config.lexical_denominator,
    );
    if score <= ctx.config.hierarchy_lexical_threshold {
        return None;
    }

    let violation =
        ctx.registry
            .hierarchy_violation_for_score(score, &lower.source, &higher.source)?;

    Some(ContradictionResult {
        contradiction_type: ContradictionType::AuthorityHierarchyViolation,
        confidence: score,
        explanation: format!(
            "{}: '{}' contradicts '{}'",
            violation.explanation,
            excerpt(&lower.content),
            excerpt(&higher.content)
        ),
        kindness_message: format!(
            "{} carries more legal weight than {}. Where they disagree, the position of {} \
             normally prevails.",
            violation.authoritative_source,
            violation.violator_source,
            violation.authoritative_source
        ),
        evidence: vec![
            format!("The decision or statement from {}", violation.authoritative_source),
            format!("The conflicting statement from {}", violation.violator_source),
        ],
        recommendation: violation.recommendation,
    })
}
