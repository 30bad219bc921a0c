use chrono::{TimeZone, Utc};
use tillit_authority::AuthorityRegistry;
use tillit_contradiction::CorroborationIndex;
use tillit_core::config::CorroborationConfig;
use tillit_core::Claim;

const STATEMENT: &str = "The collection agency charged an unlawful reminder fee in March";

fn claim(id: &str, content: &str, source: &str) -> Claim {
    Claim::new(id, content, source, Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap())
}

/// A target from `individual` plus `n` identical statements from distinct unknown sources.
fn witnesses(n: usize) -> Vec<Claim> {
    let mut claims = vec![claim("target", STATEMENT, "individual")];
    claims.extend((0..n).map(|i| claim(&format!("w{i}"), STATEMENT, &format!("witness-{i:02}"))));
    claims
}

// ─── Floor ───

#[test]
fn lone_claim_keeps_standalone_floor() {
    let registry = AuthorityRegistry::norwegian();
    let claims = vec![claim("a", STATEMENT, "individual")];
    let index = CorroborationIndex::new(&claims);
    let result = index.assess(0, &registry, &CorroborationConfig::default());
    assert_eq!(result.confidence, 0.1);
    assert!(result.corroborators.is_empty());
}

#[test]
fn dissimilar_claims_do_not_corroborate() {
    let registry = AuthorityRegistry::norwegian();
    let claims = vec![
        claim("a", STATEMENT, "individual"),
        claim("b", "Forliksrådet scheduled a hearing for next week", "forliksradet"),
    ];
    let index = CorroborationIndex::new(&claims);
    let result = index.assess(0, &registry, &CorroborationConfig::default());
    assert_eq!(result.confidence, 0.1);
}

// ─── Independence ───

#[test]
fn same_source_does_not_corroborate_itself() {
    let registry = AuthorityRegistry::norwegian();
    let claims = vec![
        claim("a", STATEMENT, "individual"),
        claim("b", STATEMENT, "Individual"),
    ];
    let index = CorroborationIndex::new(&claims);
    let result = index.assess(0, &registry, &CorroborationConfig::default());
    assert!(result.corroborators.is_empty());
}

#[test]
fn non_ascii_spellings_of_one_source_do_not_corroborate() {
    let registry = AuthorityRegistry::norwegian();
    let claims = vec![
        claim("a", STATEMENT, "Forbrukerrådet Øst"),
        claim("b", STATEMENT, "FORBRUKERRÅDET ØST"),
    ];
    let index = CorroborationIndex::new(&claims);
    let result = index.assess(0, &registry, &CorroborationConfig::default());
    assert!(result.corroborators.is_empty());
    assert_eq!(result.confidence, 0.1);
}

#[test]
fn affiliated_sources_do_not_corroborate() {
    let registry = AuthorityRegistry::norwegian();
    let claims = vec![
        claim("a", STATEMENT, "kreditor"),
        claim("b", STATEMENT, "inkassobyra"),
    ];
    let index = CorroborationIndex::new(&claims);
    let result = index.assess(0, &registry, &CorroborationConfig::default());
    assert_eq!(result.confidence, 0.1);
}

#[test]
fn independent_authority_corroborates_with_its_weight() {
    let registry = AuthorityRegistry::norwegian();
    let claims = vec![
        claim("a", STATEMENT, "individual"),
        claim("b", STATEMENT, "forbrukerradet"),
    ];
    let index = CorroborationIndex::new(&claims);
    let result = index.assess(0, &registry, &CorroborationConfig::default());
    assert_eq!(result.corroborators.len(), 1);
    assert_eq!(result.corroborators[0].claim_id, "b");
    assert_eq!(result.corroborators[0].similarity, 1.0);
    assert!((result.confidence - 0.7).abs() < 1e-12);
}

#[test]
fn each_source_counts_once() {
    let registry = AuthorityRegistry::norwegian();
    let claims = vec![
        claim("a", STATEMENT, "individual"),
        claim("b", STATEMENT, "forbrukerradet"),
        claim("c", STATEMENT, "forbrukerradet"),
        claim("d", STATEMENT, "FORBRUKERRADET"),
    ];
    let index = CorroborationIndex::new(&claims);
    let result = index.assess(0, &registry, &CorroborationConfig::default());
    assert_eq!(result.corroborators.len(), 1);
    assert_eq!(result.corroborators[0].claim_id, "b");
}

// ─── Saturation ───

#[test]
fn corroboration_saturates_at_ten_sources() {
    let registry = AuthorityRegistry::norwegian();
    let config = CorroborationConfig::default();

    let ten = witnesses(10);
    let fifteen = witnesses(15);
    let with_ten = CorroborationIndex::new(&ten).assess(0, &registry, &config);
    let with_fifteen = CorroborationIndex::new(&fifteen).assess(0, &registry, &config);

    assert_eq!(with_fifteen.corroborators.len(), 10);
    assert_eq!(with_ten.confidence, with_fifteen.confidence);
    assert!(with_ten.confidence < 1.0);
}

#[test]
fn additional_corroborators_are_discounted() {
    let registry = AuthorityRegistry::norwegian();
    let config = CorroborationConfig::default();
    let one = CorroborationIndex::new(&witnesses(1)).assess(0, &registry, &config);
    let two = CorroborationIndex::new(&witnesses(2)).assess(0, &registry, &config);

    let first = 0.1;
    let second = 0.1 * 0.8;
    // Single unknown-source witness sits exactly on the floor.
    assert!((one.confidence - first).abs() < 1e-12);
    assert!((two.confidence - (first + second)).abs() < 1e-12);
}

#[test]
fn strongest_corroborators_come_first() {
    let registry = AuthorityRegistry::norwegian();
    let claims = vec![
        claim("a", STATEMENT, "individual"),
        claim("b", STATEMENT, "media"),
        claim("c", STATEMENT, "lagmannsrett"),
        claim("d", STATEMENT, "advokat"),
    ];
    let result = CorroborationIndex::new(&claims).assess(0, &registry, &CorroborationConfig::default());
    let ids: Vec<_> = result.corroborators.iter().map(|c| c.claim_id.as_str()).collect();
    assert_eq!(ids, vec!["c", "d", "b"]);
    assert_eq!(result.confidence, 1.0);
}
