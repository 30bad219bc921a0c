mod authority;
mod calculation;
mod claim;
mod contradiction;

pub use authority::{AuthorityCategory, AuthorityEntry};
pub use calculation::{AuthorityFactor, TrustLevel, TrustScoreCalculation};
pub use claim::{Claim, Evidence, EvidenceCategory};
pub use contradiction::{ContradictionPenalty, ContradictionResult, ContradictionType};
