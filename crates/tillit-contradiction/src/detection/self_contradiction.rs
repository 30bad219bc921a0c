//! Sentences within a single claim contradicting each other.

use tillit_core::{text, Claim, ContradictionResult, ContradictionType};

use super::{excerpt, logical_impossibility, DetectionContext};

/// Strongest contradiction between two sentences of the same claim, if it
/// exceeds the configured self-contradiction threshold.
///
/// Sentence pairs are scored with the lexical contradiction score; a pair
/// holding mutually exclusive absolute terms scores the impossibility
/// confidence instead when that is higher.
pub fn detect(claim: &Claim, ctx: &DetectionContext<'_>) -> Option<ContradictionResult> {
    let sentences = text::sentences(&claim.content);
    if sentences.len() < 2 {
        return None;
    }

    let mut best: Option<(f64, usize, usize)> = None;
    for i in 0..sentences.len() {
        for j in (i + 1)..sentences.len() {
            let lexical = ctx.lexicon.contradiction_score_with(
                sentences[i],
                sentences[j],
                ctx.config.lexical_denominator,
            );
            let absolute = if logical_impossibility::first_split(sentences[i], sentences[j]).is_some()
            {
                logical_impossibility::CONFIDENCE
            } else {
                0.0
            };
            let score = lexical.max(absolute);
            if best.map_or(true, |(s, _, _)| score > s) {
                best = Some((score, i, j));
            }
        }
    }

    let (confidence, i, j) = best?;
    if confidence <= ctx.config.self_contradiction_threshold {
        return None;
    }

    Some(ContradictionResult {
        contradiction_type: ContradictionType::SelfContradiction,
        confidence,
        explanation: format!(
            "{} contradicts itself within claim {}: '{}' vs '{}'",
            claim.source,
            claim.id,
            excerpt(sentences[i]),
            excerpt(sentences[j])
        ),
        kindness_message: "This statement contradicts itself. A source that cannot keep its \
                           own account consistent deserves extra scrutiny."
            .to_string(),
        evidence: vec![format!("The full text of claim {}", claim.id)],
        recommendation: "Point out the inconsistency and ask the source to clarify its \
                         position in writing."
            .to_string(),
    })
}
