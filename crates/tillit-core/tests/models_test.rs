use chrono::{TimeZone, Utc};
use tillit_core::models::*;

fn ts(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

fn evidence(content: &str, day: Option<u32>) -> Evidence {
    Evidence {
        category: EvidenceCategory::CourtDecision,
        source: "tingrett".into(),
        authority_weight: 0.9,
        content: content.into(),
        timestamp: day.map(ts),
        verified: true,
    }
}

#[test]
fn claim_deserializes_without_optional_fields() {
    let json = r#"{
        "id": "c1",
        "content": "We hold no personal data on you",
        "source": "inkassobyra",
        "timestamp": "2024-03-01T12:00:00Z"
    }"#;
    let claim: Claim = serde_json::from_str(json).unwrap();
    assert!(claim.evidence.is_empty());
    assert!(claim.metadata.is_empty());
    assert_eq!(claim.timestamp, ts(1));
}

#[test]
fn evidence_category_uses_snake_case() {
    let json = serde_json::to_string(&EvidenceCategory::CourtDecision).unwrap();
    assert_eq!(json, "\"court_decision\"");
}

#[test]
fn contradiction_type_serializes_as_its_name() {
    for t in [
        ContradictionType::SettlementLogic,
        ContradictionType::DataContradiction,
        ContradictionType::AuthorityHierarchyViolation,
        ContradictionType::TemporalInconsistency,
        ContradictionType::LogicalImpossibility,
        ContradictionType::SelfContradiction,
    ] {
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, format!("\"{}\"", t.as_str()));
    }
}

#[test]
fn evidence_text_joins_in_order() {
    let claim = Claim::new("c1", "content", "tingrett", ts(1))
        .with_evidence(evidence("first", None))
        .with_evidence(evidence("second", Some(2)));
    assert_eq!(claim.evidence_text(), "first\nsecond");
}

#[test]
fn same_source_ignores_case() {
    let a = Claim::new("a", "x", "Datatilsynet", ts(1));
    let b = Claim::new("b", "y", " datatilsynet ", ts(2));
    assert!(a.same_source(&b));
}

#[test]
fn same_source_folds_norwegian_letters() {
    let a = Claim::new("a", "x", "Forbrukerrådet Øst", ts(1));
    let b = Claim::new("b", "y", "FORBRUKERRÅDET ØST", ts(2));
    assert!(a.same_source(&b));
    assert_eq!(tillit_core::text::source_key(" Æøå "), "æøå");
}

#[test]
fn unknown_entry_has_floor_weight() {
    let entry = AuthorityEntry::unknown();
    assert_eq!(entry.weight, 0.10);
    assert_eq!(entry.category, AuthorityCategory::Unknown);
}

#[test]
fn trust_level_bands() {
    assert_eq!(TrustLevel::from_score(0.0), TrustLevel::VeryLow);
    assert_eq!(TrustLevel::from_score(39.9), TrustLevel::Low);
    assert_eq!(TrustLevel::from_score(40.0), TrustLevel::Moderate);
    assert_eq!(TrustLevel::from_score(79.0), TrustLevel::High);
    assert_eq!(TrustLevel::from_score(100.0), TrustLevel::VeryHigh);
}

#[test]
fn empty_calculation_is_zero() {
    let calc = TrustScoreCalculation::empty("reg/1", "lex/1");
    assert_eq!(calc.final_score, 0.0);
    assert_eq!(calc.confidence, 0.0);
    assert!(!calc.has_contradictions());
    assert!(calc.explain().starts_with("Trust score 0.0/100"));
}

#[test]
fn fingerprint_is_stable_and_sensitive() {
    let a = TrustScoreCalculation::empty("reg/1", "lex/1");
    let b = TrustScoreCalculation::empty("reg/1", "lex/1");
    let c = TrustScoreCalculation::empty("reg/2", "lex/1");
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn penalty_weighted_is_product() {
    let penalty = ContradictionPenalty::from_result(
        ContradictionResult {
            contradiction_type: ContradictionType::LogicalImpossibility,
            confidence: 0.95,
            explanation: "never vs always".into(),
            kindness_message: String::new(),
            evidence: vec![],
            recommendation: String::new(),
        },
        0.5,
        vec!["a".into(), "b".into()],
        vec!["c1".into(), "c2".into()],
    );
    assert!((penalty.weighted() - 0.475).abs() < 1e-12);
}
