use serde::Deserialize;
use test_fixtures::{list_fixtures, load_fixture};
use tillit_core::{Claim, ContradictionType, TrustLevel};
use tillit_scoring::TrustScoreEngine;

#[derive(Debug, Deserialize)]
struct ScoringCase {
    name: String,
    claims: Vec<Claim>,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    final_score: f64,
    confidence: f64,
    trust_level: TrustLevel,
    factor_weights: Vec<f64>,
    penalty_types: Vec<ContradictionType>,
}

const TOLERANCE: f64 = 1e-9;

fn check(path: &str) {
    let case: ScoringCase = load_fixture(path);
    let engine = TrustScoreEngine::norwegian();
    let calc = engine.calculate_trust_score(&case.claims);

    assert!(
        (calc.final_score - case.expected.final_score).abs() < TOLERANCE,
        "{}: final score {} != {}",
        case.name,
        calc.final_score,
        case.expected.final_score
    );
    assert!(
        (calc.confidence - case.expected.confidence).abs() < TOLERANCE,
        "{}: confidence {} != {}",
        case.name,
        calc.confidence,
        case.expected.confidence
    );
    assert_eq!(calc.trust_level(), case.expected.trust_level, "{}", case.name);

    let weights: Vec<f64> = calc.authority_factors.iter().map(|f| f.authority_weight).collect();
    assert_eq!(weights, case.expected.factor_weights, "{}", case.name);

    let types: Vec<ContradictionType> = calc
        .contradiction_penalties
        .iter()
        .map(|p| p.contradiction_type)
        .collect();
    assert_eq!(types, case.expected.penalty_types, "{}", case.name);
}

// ─── Golden datasets ───

#[test]
fn golden_unknown_source_floor() {
    check("golden/scoring/unknown_source_floor.json");
}

#[test]
fn golden_settlement_offer() {
    check("golden/scoring/settlement_offer.json");
}

#[test]
fn golden_corroborated_fee_complaint() {
    check("golden/scoring/corroborated_fee_complaint.json");
}

#[test]
fn golden_evidence_boost() {
    check("golden/scoring/evidence_boost.json");
}

#[test]
fn golden_self_contradiction() {
    check("golden/scoring/self_contradiction.json");
}

#[test]
fn golden_empty() {
    check("golden/scoring/empty.json");
}

#[test]
fn every_golden_dataset_is_checked() {
    let files = list_fixtures("golden/scoring");
    assert_eq!(files.len(), 6);
    for file in &files {
        check(file);
    }
}
