use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use tillit_core::{Claim, Evidence, EvidenceCategory};
use tillit_scoring::TrustScoreEngine;

const SOURCES: [&str; 8] = [
    "hoyesterett",
    "datatilsynet",
    "forbrukerradet",
    "advokat",
    "inkassobyra",
    "kreditor",
    "individual",
    "unregistered-forum",
];

const SENTENCES: [&str; 10] = [
    "The fee is legal",
    "The fee is illegal",
    "We deny any liability for this matter",
    "We are offering a 40% settlement reduction",
    "We hold no personal data on you",
    "Your payment history shows three missed installments",
    "Payment is always required upfront",
    "Payment is never required upfront",
    "The reminder fee exceeds the legal maximum",
    "The claim is valid",
];

fn arb_claim(i: usize) -> impl Strategy<Value = Claim> {
    (
        prop::collection::vec(0..SENTENCES.len(), 1..3),
        0..SOURCES.len(),
        0i64..900,
        prop::collection::vec((0.0f64..=1.0, prop::option::of(0i64..800)), 0..3),
    )
        .prop_map(move |(parts, source, day, evidence)| {
            let base = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
            let content = parts
                .iter()
                .map(|p| SENTENCES[*p])
                .collect::<Vec<_>>()
                .join(". ");
            let mut claim =
                Claim::new(format!("c{i}"), content, SOURCES[source], base + Duration::days(day));
            for (weight, evidence_day) in evidence {
                claim = claim.with_evidence(Evidence {
                    category: EvidenceCategory::Document,
                    source: "lovdata".to_string(),
                    authority_weight: weight,
                    content: "Extract".to_string(),
                    timestamp: evidence_day.map(|d| base + Duration::days(d)),
                    verified: false,
                });
            }
            claim
        })
}

fn arb_claims() -> impl Strategy<Value = Vec<Claim>> {
    (0usize..10).prop_flat_map(|n| (0..n).map(arb_claim).collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_and_confidence_stay_in_bounds(claims in arb_claims()) {
        let engine = TrustScoreEngine::norwegian();
        let calc = engine.calculate_trust_score(&claims);
        prop_assert!((0.0..=100.0).contains(&calc.final_score));
        prop_assert!((0.0..=1.0).contains(&calc.confidence));
        prop_assert_eq!(calc.authority_factors.len(), claims.len());
        for factor in &calc.authority_factors {
            prop_assert!((0.0..=1.0).contains(&factor.authority_weight));
            prop_assert!(factor.authority_score >= factor.authority_weight);
            prop_assert!(factor.authority_score <= 1.0);
            prop_assert!((0.1..=1.0).contains(&factor.cross_vector_confidence));
        }
        for penalty in &calc.contradiction_penalties {
            prop_assert!(penalty.contradiction_penalty > 0.7);
            prop_assert!((0.0..=1.0).contains(&penalty.authority_differential));
        }
    }

    #[test]
    fn scoring_is_deterministic(claims in arb_claims()) {
        let engine = TrustScoreEngine::norwegian();
        let first = engine.calculate_trust_score(&claims);
        let second = engine.calculate_trust_score(&claims);
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
        prop_assert_eq!(first, second);
    }
}
