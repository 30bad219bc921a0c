use serde::{Deserialize, Serialize};

/// Two sources ordered by authority weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorityComparison {
    pub higher: String,
    pub lower: String,
    /// `weight(higher) - weight(lower)`, never negative.
    pub differential: f64,
    pub explanation: String,
}

impl AuthorityComparison {
    /// Whether both sources carry exactly the same weight.
    pub fn is_tie(&self) -> bool {
        self.differential == 0.0
    }
}
