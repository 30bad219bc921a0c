//! "We hold no personal data" alongside evidence of data processing.
//!
//! Debt collection cannot happen without processing personal data, so the
//! two statements cannot both be true.

use std::sync::LazyLock;

use regex::Regex;
use tillit_core::{Claim, ContradictionResult, ContradictionType};

use super::{ContradictionStrategy, DetectionContext};

pub const CONFIDENCE: f64 = 0.98;

/// Claims of holding no personal data.
static NO_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:hold|have|store|keep|process)s?\s+no\s+(?:personal\s+)?(?:data|information)|no\s+personal\s+(?:data|information)|(?:do|does|did)\s+not\s+(?:hold|have|store|keep|process)\s+(?:any\s+)?personal\s+(?:data|information)|don't\s+(?:hold|have|store|keep|process)\s+(?:any\s+)?personal\s+(?:data|information)|ingen\s+personopplysninger|har\s+ikke\s+(?:noen\s+)?personopplysninger)\b",
    )
    .unwrap()
});

/// Activities that require personal data.
static PROCESSING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:debt\s+records?|payment\s+(?:history|records?)|collection|credit\s+(?:check|score|history|report)|account\s+(?:number|history)|missed\s+(?:payments?|installments?)|installments?|outstanding\s+balance|inkasso\w*|betalingshistorikk|betalingsanmerkning\w*|kredittsjekk)\b",
    )
    .unwrap()
});

pub struct DataContradiction;

impl ContradictionStrategy for DataContradiction {
    fn name(&self) -> &'static str {
        "data_contradiction"
    }

    fn contradiction_type(&self) -> ContradictionType {
        ContradictionType::DataContradiction
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

/// "No personal data" and data-processing language co-occurring within
/// either claim or across the two.
pub fn detect(a: &Claim, b: &Claim) -> Option<ContradictionResult> {
    let denial = NO_DATA_RE
        .find(&a.content)
        .or_else(|| NO_DATA_RE.find(&b.content))?;
    let processing = PROCESSING_RE
        .find(&a.content)
        .or_else(|| PROCESSING_RE.find(&b.content))?;

    Some(ContradictionResult {
        contradiction_type: ContradictionType::DataContradiction,
        confidence: CONFIDENCE,
        explanation: format!(
            "Claims to hold no personal data ('{}') while referring to data processing ('{}')",
            denial.as_str().trim(),
            processing.as_str().trim()
        ),
        kindness_message: "Someone who refers to your payments or your debt must be holding \
                           information about you. You have the right to see exactly what \
                           they hold."
            .to_string(),
        evidence: vec![
            "A data subject access request (GDPR article 15) response".to_string(),
            "Letters or statements referring to your payment history".to_string(),
        ],
        recommendation: "Send a written access request; if the answer still denies holding \
                         data, consider a complaint to Datatilsynet."
            .to_string(),
    })
}
