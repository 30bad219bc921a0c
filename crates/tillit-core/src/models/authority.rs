use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::UNKNOWN_SOURCE_WEIGHT;

/// One row of the authority registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthorityEntry {
    /// Authority weight in [0.0, 1.0].
    pub weight: f64,
    pub category: AuthorityCategory,
    /// Human-readable description of the source.
    pub description: String,
    /// Country or jurisdiction tag, e.g. "NO".
    #[serde(default)]
    pub country: Option<String>,
    /// Source identifiers this entry takes precedence over.
    #[serde(default)]
    pub supersedes: Vec<String>,
}

impl AuthorityEntry {
    /// The synthetic entry returned for sources the registry does not know.
    pub fn unknown() -> Self {
        Self {
            weight: UNKNOWN_SOURCE_WEIGHT,
            category: AuthorityCategory::Unknown,
            description: "Unknown source (unverified)".to_string(),
            country: None,
            supersedes: Vec::new(),
        }
    }
}

/// Broad class of an authority source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityCategory {
    Court,
    Tribunal,
    Legislation,
    Regulator,
    Government,
    ConsumerBody,
    Professional,
    Company,
    DebtCollector,
    Creditor,
    Media,
    Individual,
    Unknown,
}

impl AuthorityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Court => "court",
            Self::Tribunal => "tribunal",
            Self::Legislation => "legislation",
            Self::Regulator => "regulator",
            Self::Government => "government",
            Self::ConsumerBody => "consumer_body",
            Self::Professional => "professional",
            Self::Company => "company",
            Self::DebtCollector => "debt_collector",
            Self::Creditor => "creditor",
            Self::Media => "media",
            Self::Individual => "individual",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AuthorityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
