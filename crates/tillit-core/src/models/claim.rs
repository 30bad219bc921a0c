use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::text;

/// An assertion made by a source.
///
/// Claims are read-only inputs to the engine; nothing downstream mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Claim {
    /// Unique claim identifier.
    pub id: String,
    /// Free-text content of the assertion.
    pub content: String,
    /// Source identifier, a key into the authority registry.
    pub source: String,
    /// When the claim was made.
    pub timestamp: DateTime<Utc>,
    /// Supporting material, in the order it was attached.
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    /// Open-ended caller metadata. Never interpreted by the engine.
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Claim {
    /// Create a claim with no evidence and no metadata.
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            source: source.into(),
            timestamp,
            evidence: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a piece of evidence, builder style.
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence.push(evidence);
        self
    }

    /// Attach a metadata value, builder style.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Evidence contents joined by newlines, in attachment order.
    pub fn evidence_text(&self) -> String {
        self.evidence
            .iter()
            .map(|e| e.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether two claims come from the same source, compared by
    /// [`text::source_key`].
    pub fn same_source(&self, other: &Claim) -> bool {
        text::source_key(&self.source) == text::source_key(&other.source)
    }
}

/// Supporting material owned by a [`Claim`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evidence {
    pub category: EvidenceCategory,
    /// Source identifier of the evidence itself.
    pub source: String,
    /// Cached authority weight of `source`. May diverge from the registry
    /// for provenance reasons; the engine uses this value as given.
    pub authority_weight: f64,
    pub content: String,
    /// Missing timestamps are treated as fully current.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub verified: bool,
}

/// Kind of supporting material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceCategory {
    Document,
    Statement,
    Regulation,
    CourtDecision,
}
