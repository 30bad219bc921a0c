mod trust_scorer;

pub use trust_scorer::ITrustScorer;
