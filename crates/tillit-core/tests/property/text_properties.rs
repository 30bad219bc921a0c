//! Property tests for the text helpers and the lexical contradiction score.

use proptest::prelude::*;

use tillit_core::lexicon::Lexicon;
use tillit_core::text;

proptest! {
    #[test]
    fn prop_similarity_bounded_and_symmetric(a in "[a-z ]{0,60}", b in "[a-z ]{0,60}") {
        let ab = text::similarity(&a, &b);
        let ba = text::similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, ba);
    }
}

proptest! {
    #[test]
    fn prop_contradiction_score_bounded(a in "[a-z %]{0,80}", b in "[a-z %]{0,80}") {
        let lexicon = Lexicon::norwegian();
        let score = lexicon.contradiction_score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }
}

proptest! {
    #[test]
    fn prop_contradiction_score_symmetric(a in "[a-z ]{0,80}", b in "[a-z ]{0,80}") {
        let lexicon = Lexicon::norwegian();
        prop_assert_eq!(
            lexicon.contradiction_score(&a, &b),
            lexicon.contradiction_score(&b, &a)
        );
    }
}
