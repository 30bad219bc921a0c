//! # tillit-core
//!
//! Foundation crate for the Tillit trust scoring engine.
//! Defines the claim/evidence data model, the derived calculation records,
//! errors, config, the versioned opposite-term lexicon, and the text helpers
//! shared by the authority registry and the contradiction detector.

pub mod config;
pub mod constants;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TillitConfig;
pub use errors::{TillitError, TillitResult};
pub use lexicon::Lexicon;
pub use models::{
    AuthorityCategory, AuthorityEntry, AuthorityFactor, Claim, ContradictionPenalty,
    ContradictionResult, ContradictionType, Evidence, EvidenceCategory, TrustLevel,
    TrustScoreCalculation,
};
