use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use tillit_authority::AuthorityRegistry;
use tillit_contradiction::{ContradictionDetector, CorroborationIndex, DetectionContext};
use tillit_core::config::{CorroborationConfig, DetectionConfig};
use tillit_core::{Claim, Lexicon};

const SOURCES: [&str; 6] = [
    "hoyesterett",
    "lagmannsrett",
    "inkassobyra",
    "kreditor",
    "individual",
    "some-blog",
];

const FRAGMENTS: [&str; 10] = [
    "the fee is legal",
    "the fee is illegal",
    "we deny any liability",
    "we offer a settlement",
    "we hold no personal data",
    "your payment history",
    "payment is always due",
    "payment is never due",
    "the claim is valid",
    "the letter arrived",
];

fn arb_claims() -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(
        (
            prop::collection::vec(0..FRAGMENTS.len(), 1..4),
            0..SOURCES.len(),
            0i64..2000,
        ),
        0..12,
    )
    .prop_map(|rows| {
        let base = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (parts, source, hours))| {
                let content = parts
                    .iter()
                    .map(|p| FRAGMENTS[*p])
                    .collect::<Vec<_>>()
                    .join(". ");
                Claim::new(format!("c{i}"), content, SOURCES[source], base + Duration::hours(hours))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn detection_confidence_is_a_probability(claims in arb_claims()) {
        let registry = AuthorityRegistry::norwegian();
        let lexicon = Lexicon::norwegian();
        let config = DetectionConfig::default();
        let ctx = DetectionContext { registry: &registry, lexicon: &lexicon, config: &config };
        let detector = ContradictionDetector::new();

        for finding in detector.scan_pairs(&claims, &ctx, false) {
            prop_assert!((0.0..=1.0).contains(&finding.result.confidence));
        }
        for claim in &claims {
            if let Some(result) = detector.detect_self(claim, &ctx) {
                prop_assert!(result.confidence > config.self_contradiction_threshold);
                prop_assert!(result.confidence <= 1.0);
            }
        }
    }

    #[test]
    fn parallel_and_sequential_scans_agree(claims in arb_claims()) {
        let registry = AuthorityRegistry::norwegian();
        let lexicon = Lexicon::norwegian();
        let config = DetectionConfig::default();
        let ctx = DetectionContext { registry: &registry, lexicon: &lexicon, config: &config };
        let detector = ContradictionDetector::new();

        prop_assert_eq!(
            detector.scan_pairs(&claims, &ctx, false),
            detector.scan_pairs(&claims, &ctx, true)
        );
    }

    #[test]
    fn corroboration_stays_within_floor_and_one(claims in arb_claims()) {
        let registry = AuthorityRegistry::norwegian();
        let config = CorroborationConfig::default();
        let index = CorroborationIndex::new(&claims);
        for i in 0..claims.len() {
            let result = index.assess(i, &registry, &config);
            prop_assert!(result.confidence >= config.standalone_floor);
            prop_assert!(result.confidence <= 1.0);
            prop_assert!(result.corroborators.len() <= config.max_corroborators);
        }
    }
}
