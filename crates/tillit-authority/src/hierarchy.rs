use serde::{Deserialize, Serialize};

/// A lower-authority claim contradicting a higher-authority one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyViolation {
    /// Source whose claim yields.
    pub violator_source: String,
    /// Source whose claim prevails.
    pub authoritative_source: String,
    /// Authority weight differential between the two sources.
    pub severity: f64,
    /// Lexical contradiction score between the two claims.
    pub lexical_score: f64,
    /// The authoritative source lists the violator (directly or transitively)
    /// in its `supersedes` chain.
    pub explicit_precedence: bool,
    pub explanation: String,
    pub recommendation: String,
}
