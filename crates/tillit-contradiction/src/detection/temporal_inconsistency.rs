//! The same source saying opposite things at different times.

use chrono::Duration;
use tillit_core::{Claim, ContradictionResult, ContradictionType};

use super::{excerpt, ContradictionStrategy, DetectionContext};

pub struct TemporalInconsistency;

impl ContradictionStrategy for TemporalInconsistency {
    fn name(&self) -> &'static str {
        "temporal_inconsistency"
    }

    fn contradiction_type(&self) -> ContradictionType {
        ContradictionType::TemporalInconsistency
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

/// Same source, more than the configured gap apart, and a lexical
/// contradiction score above the configured threshold. Confidence is the
/// lexical score.
pub fn detect(a: &Claim, b: &Claim, ctx: &DetectionContext<'_>) -> Option<ContradictionResult> {
    if !a.same_source(b) {
        return None;
    }

    let (older, newer) = if a.timestamp <= b.timestamp { (a, b) } else { (b, a) };
    let gap = newer.timestamp - older.timestamp;
    let min_gap = Duration::try_hours(ctx.config.temporal_min_gap_hours)?;
    if gap <= min_gap {
        return None;
    }

    let score = ctx.lexicon.contradiction_score_with(
        &older.content,
        &newer.content,
        ctx.config.lexical_denominator,
    );
    if score <= ctx.config.temporal_lexical_threshold {
        return None;
    }

    Some(ContradictionResult {
        contradiction_type: ContradictionType::TemporalInconsistency,
        confidence: score,
        explanation: format!(
            "{} stated '{}' on {} and '{}' on {} ({} days later)",
            older.source,
            excerpt(&older.content),
            older.timestamp.format("%Y-%m-%d"),
            excerpt(&newer.content),
            newer.timestamp.format("%Y-%m-%d"),
            gap.num_days()
        ),
        kindness_message: format!(
            "{} has changed its position over time. It is reasonable to ask which \
             statement it stands by.",
            older.source
        ),
        evidence: vec![
            format!("The statement dated {}", older.timestamp.format("%Y-%m-%d")),
            format!("The statement dated {}", newer.timestamp.format("%Y-%m-%d")),
        ],
        recommendation: "Ask the source to confirm in writing which of its statements is \
                         current, and why it changed."
            .to_string(),
    })
}
