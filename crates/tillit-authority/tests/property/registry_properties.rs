//! Property tests for the authority registry.

use proptest::prelude::*;

use tillit_authority::AuthorityRegistry;

proptest! {
    #[test]
    fn prop_unknown_sources_get_floor_weight(id in "zz-[a-z0-9]{1,20}") {
        let registry = AuthorityRegistry::norwegian();
        prop_assert_eq!(registry.weight_of(&id), 0.10);
    }
}

proptest! {
    #[test]
    fn prop_weights_are_unit_interval(idx in 0usize..64) {
        let registry = AuthorityRegistry::norwegian();
        let ids: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        let id = ids[idx % ids.len()];
        let w = registry.weight_of(id);
        prop_assert!((0.0..=1.0).contains(&w));
    }
}

proptest! {
    #[test]
    fn prop_compare_never_inverts(i in 0usize..64, j in 0usize..64) {
        let registry = AuthorityRegistry::norwegian();
        let ids: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        let a = ids[i % ids.len()];
        let b = ids[j % ids.len()];
        let c = registry.compare(a, b);
        prop_assert!(c.differential >= 0.0);
        prop_assert!(registry.weight_of(&c.higher) >= registry.weight_of(&c.lower));
    }
}

proptest! {
    #[test]
    fn prop_supersedes_respects_weights(i in 0usize..64, j in 0usize..64) {
        let registry = AuthorityRegistry::norwegian();
        let ids: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        let a = ids[i % ids.len()];
        let b = ids[j % ids.len()];
        if registry.supersedes(a, b) {
            prop_assert!(registry.weight_of(a) >= registry.weight_of(b));
        }
    }
}
