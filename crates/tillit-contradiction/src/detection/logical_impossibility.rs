//! Mutually exclusive absolute terms across two claims.

use std::sync::LazyLock;

use tillit_core::lexicon::{LexiconDocument, OppositePair, TermPair};
use tillit_core::{Claim, ContradictionResult, ContradictionType, Lexicon};

use super::{excerpt, ContradictionStrategy, DetectionContext};

pub const CONFIDENCE: f64 = 0.95;

/// Opposite terms that cannot both hold.
pub const IMPOSSIBLE_PAIRS: [(&str, &str); 5] = [
    ("always", "never"),
    ("100%", "0%"),
    ("certain", "impossible"),
    ("all", "none"),
    ("legal", "illegal"),
];

static IMPOSSIBILITIES: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_document(LexiconDocument {
        version: "logical-impossibility/1".to_string(),
        description: "Fixed absolute opposites".to_string(),
        pairs: IMPOSSIBLE_PAIRS
            .iter()
            .map(|(p, n)| TermPair::new(*p, *n))
            .collect(),
    })
    .expect("built-in impossibility pairs are valid")
});

pub struct LogicalImpossibility;

impl ContradictionStrategy for LogicalImpossibility {
    fn name(&self) -> &'static str {
        "logical_impossibility"
    }

    fn contradiction_type(&self) -> ContradictionType {
        ContradictionType::LogicalImpossibility
    }

    fn detect(
        &self,
        a: &Claim,
        b: &Claim,
        _ctx: &DetectionContext<'_>,
    ) -> Option<ContradictionResult> {
        detect_texts(&a.content, &b.content)
    }
}

/// The first impossibility pair split across the two texts.
pub fn first_split(a: &str, b: &str) -> Option<&'static OppositePair> {
    IMPOSSIBILITIES.pairs().iter().find(|p| p.is_split(a, b))
}

/// One text holds a term of a pair and the other holds its opposite. Both
/// texts may be sentences of the same claim.
pub fn detect_texts(a: &str, b: &str) -> Option<ContradictionResult> {
    let pair = first_split(a, b)?;

    Some(ContradictionResult {
        contradiction_type: ContradictionType::LogicalImpossibility,
        confidence: CONFIDENCE,
        explanation: format!(
            "'{}' and '{}' cannot both hold: '{}' vs '{}'",
            pair.positive(),
            pair.negative(),
            excerpt(a),
            excerpt(b)
        ),
        kindness_message: "These statements use absolute terms that rule each other out, so \
                           at least one of them is wrong."
            .to_string(),
        evidence: vec![
            "Both statements in their original wording".to_string(),
            "Any document the absolute statement relies on".to_string(),
        ],
        recommendation: "Ask which statement is correct and request documentation for it."
            .to_string(),
    })
}
