//! Liability denial alongside a settlement or compensation offer.
//!
//! Offering to settle is practical acknowledgment of fault, whatever the
//! accompanying words say.

use std::sync::LazyLock;

use regex::Regex;
use tillit_core::{Claim, ContradictionResult, ContradictionType};

use super::{ContradictionStrategy, DetectionContext};

pub const CONFIDENCE: f64 = 0.94;

/// Denials of liability or fault.
static DENIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(?:no liability|not liable|not responsible|no fault|not at fault|den(?:y|ies|ied)\b[^.!?]{0,40}?\b(?:liability|responsibility|fault)|ikke ansvarlig|intet ansvar|bestrider)\b|(?:^|[^\w-])(?:fully\s+)?compliant\b)",
    )
    .unwrap()
});

/// Settlement, discount, or compensation language.
static SETTLEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:settlement|settle|offer(?:s|ing|ed)?|reduction|reduced|compensation|compensate|goodwill|write[- ]off|discount|refund|forlik|kompensasjon|reduksjon|avslag|tilbud|ettergivelse)\b",
    )
    .unwrap()
});

pub struct SettlementLogic;

impl ContradictionStrategy for SettlementLogic {
    fn name(&self) -> &'static str {
        "settlement_logic"
    }

    fn contradiction_type(&self) -> ContradictionType {
        ContradictionType::SettlementLogic
    }

    fn detect(
        &self,
        a: &Claim,
        b: &Claim,
        _ctx: &DetectionContext<'_>,
    ) -> Option<ContradictionResult> {
        detect(a, b)
    }
}

/// Denial and settlement language co-occurring within either claim or
/// across the two.
pub fn detect(a: &Claim, b: &Claim) -> Option<ContradictionResult> {
    let denial = DENIAL_RE
        .find(&a.content)
        .or_else(|| DENIAL_RE.find(&b.content))?;
    let settlement = SETTLEMENT_RE
        .find(&a.content)
        .or_else(|| SETTLEMENT_RE.find(&b.content))?;

    Some(ContradictionResult {
        contradiction_type: ContradictionType::SettlementLogic,
        confidence: CONFIDENCE,
        explanation: format!(
            "Liability denial ('{}') alongside settlement language ('{}')",
            denial.as_str().trim(),
            settlement.as_str().trim()
        ),
        kindness_message: "A settlement or reduction offer usually means the other side sees \
                           weaknesses in its own position, even while it denies responsibility. \
                           You do not have to accept either statement at face value."
            .to_string(),
        evidence: vec![
            "The written settlement or reduction offer".to_string(),
            "The statement denying liability".to_string(),
            "A full breakdown of the claimed amount".to_string(),
        ],
        recommendation: "Ask for the legal basis of the claim in writing before responding \
                         to the offer."
            .to_string(),
    })
}
