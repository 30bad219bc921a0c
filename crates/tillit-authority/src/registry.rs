//! The authority registry and its TOML document form.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use tillit_core::config::DetectionConfig;
use tillit_core::constants::UNKNOWN_SOURCE_WEIGHT;
use tillit_core::errors::{ConfigError, TillitResult};
use tillit_core::{text, AuthorityEntry, Lexicon};

use crate::affiliation::{AffiliationGroup, AffiliationIndex};
use crate::comparison::AuthorityComparison;
use crate::hierarchy::HierarchyViolation;
use crate::validation;

static NORWEGIAN_SOURCE: &str = include_str!("../data/norway.toml");

static NORWEGIAN: LazyLock<AuthorityRegistry> = LazyLock::new(|| {
    AuthorityRegistry::from_toml(NORWEGIAN_SOURCE)
        .expect("embedded Norwegian authority table is valid")
});

/// Canonical registry key, shared with claim source comparison.
pub(crate) fn normalize(source_id: &str) -> String {
    text::source_key(source_id)
}

/// Serialized form of a registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryDocument {
    pub version: String,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    pub sources: BTreeMap<String, AuthorityEntry>,
    #[serde(default)]
    pub affiliations: Vec<AffiliationGroup>,
}

/// Immutable source-id → [`AuthorityEntry`] catalog.
#[derive(Debug, Clone)]
pub struct AuthorityRegistry {
    version: String,
    jurisdiction: Option<String>,
    entries: BTreeMap<String, AuthorityEntry>,
    affiliations: Vec<AffiliationGroup>,
    affiliation_index: AffiliationIndex,
}

impl AuthorityRegistry {
    /// Parse and validate a TOML registry document.
    pub fn from_toml(source: &str) -> TillitResult<Self> {
        let document: RegistryDocument =
            toml::from_str(source).map_err(|e| ConfigError::Parse {
                document: "authority registry".to_string(),
                message: e.to_string(),
            })?;
        Self::from_document(document)
    }

    /// Validate a registry document and build the registry.
    pub fn from_document(document: RegistryDocument) -> TillitResult<Self> {
        let entries = validation::normalize_entries(document.sources)?;
        validation::check_hierarchy(&entries)?;
        validation::check_affiliations(&document.affiliations)?;

        debug!(
            version = %document.version,
            sources = entries.len(),
            affiliations = document.affiliations.len(),
            "authority registry loaded"
        );

        let affiliation_index = AffiliationIndex::build(&document.affiliations);
        Ok(Self {
            version: document.version,
            jurisdiction: document.jurisdiction,
            entries,
            affiliations: document.affiliations,
            affiliation_index,
        })
    }

    /// Build a registry from in-memory entries, e.g. a synthetic test table.
    pub fn from_entries(
        version: impl Into<String>,
        entries: impl IntoIterator<Item = (String, AuthorityEntry)>,
    ) -> TillitResult<Self> {
        Self::from_document(RegistryDocument {
            version: version.into(),
            jurisdiction: None,
            sources: entries.into_iter().collect(),
            affiliations: Vec::new(),
        })
    }

    /// The embedded Norwegian legal-authority table.
    pub fn norwegian() -> Self {
        NORWEGIAN.clone()
    }

    /// Serialize back into a document.
    pub fn to_document(&self) -> RegistryDocument {
        RegistryDocument {
            version: self.version.clone(),
            jurisdiction: self.jurisdiction.clone(),
            sources: self.entries.clone(),
            affiliations: self.affiliations.clone(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn jurisdiction(&self) -> Option<&str> {
        self.jurisdiction.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AuthorityEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether the registry has an entry for `source_id`.
    pub fn contains(&self, source_id: &str) -> bool {
        self.entries.contains_key(&normalize(source_id))
    }

    fn lookup(&self, source_id: &str) -> Option<&AuthorityEntry> {
        self.entries.get(&normalize(source_id))
    }

    /// Authority weight in [0, 1]. Unknown sources resolve to 0.10.
    pub fn weight_of(&self, source_id: &str) -> f64 {
        self.lookup(source_id)
            .map(|e| e.weight)
            .unwrap_or(UNKNOWN_SOURCE_WEIGHT)
    }

    /// Full entry. Unknown sources resolve to a synthetic "unknown source" entry.
    pub fn info_of(&self, source_id: &str) -> AuthorityEntry {
        self.lookup(source_id)
            .cloned()
            .unwrap_or_else(AuthorityEntry::unknown)
    }

    /// Order two sources by weight.
    ///
    /// On an exact tie the first argument is reported as `lower`. This is
    /// order-dependent and awaiting product clarification.
    pub fn compare(&self, source_a: &str, source_b: &str) -> AuthorityComparison {
        let weight_a = self.weight_of(source_a);
        let weight_b = self.weight_of(source_b);

        let (higher, higher_weight, lower, lower_weight) = if weight_a > weight_b {
            (source_a, weight_a, source_b, weight_b)
        } else {
            (source_b, weight_b, source_a, weight_a)
        };
        let differential = higher_weight - lower_weight;

        let explanation = if differential == 0.0 {
            format!(
                "{higher} and {lower} carry equal authority ({higher_weight:.2}); \
                 {lower} is listed as lower by argument order"
            )
        } else {
            format!(
                "{higher} ({higher_weight:.2}) outranks {lower} ({lower_weight:.2}) by {differential:.2}"
            )
        };

        AuthorityComparison {
            higher: higher.to_string(),
            lower: lower.to_string(),
            differential,
            explanation,
        }
    }

    /// Whether `superior` lists `inferior` in its supersedes chain,
    /// following the chain transitively.
    pub fn supersedes(&self, superior: &str, inferior: &str) -> bool {
        let target = normalize(inferior);
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([normalize(superior)]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current.clone()) {
                continue;
            }
            let Some(entry) = self.entries.get(&current) else {
                continue;
            };
            for next in &entry.supersedes {
                let next = normalize(next);
                if next == target {
                    return true;
                }
                queue.push_back(next);
            }
        }
        false
    }

    /// Two distinct sources listed together in the affiliation table.
    pub fn are_affiliated(&self, source_a: &str, source_b: &str) -> bool {
        self.affiliation_index.connected(source_a, source_b)
    }

    pub fn affiliations(&self) -> &[AffiliationGroup] {
        &self.affiliations
    }

    /// Report a violation when the two claims are lexically contradictory
    /// (score above `config.hierarchy_lexical_threshold`) and `higher_source`
    /// really does carry the larger weight. Severity is the weight
    /// differential.
    pub fn check_hierarchy_violation(
        &self,
        lexicon: &Lexicon,
        config: &DetectionConfig,
        lower_claim: &str,
        lower_source: &str,
        higher_claim: &str,
        higher_source: &str,
    ) -> Option<HierarchyViolation> {
        let lexical_score =
            lexicon.contradiction_score_with(lower_claim, higher_claim, config.lexical_denominator);
        if lexical_score <= config.hierarchy_lexical_threshold {
            return None;
        }
        self.hierarchy_violation_for_score(lexical_score, lower_source, higher_source)
    }

    /// Hierarchy verdict for an already computed lexical score. Thresholding
    /// the score is the caller's responsibility.
    pub fn hierarchy_violation_for_score(
        &self,
        lexical_score: f64,
        lower_source: &str,
        higher_source: &str,
    ) -> Option<HierarchyViolation> {
        let lower_weight = self.weight_of(lower_source);
        let higher_weight = self.weight_of(higher_source);
        if higher_weight <= lower_weight {
            return None;
        }

        let severity = higher_weight - lower_weight;
        let explicit_precedence = self.supersedes(higher_source, lower_source);
        let precedence_note = if explicit_precedence {
            format!("; {higher_source} explicitly supersedes {lower_source}")
        } else {
            String::new()
        };

        Some(HierarchyViolation {
            violator_source: lower_source.to_string(),
            authoritative_source: higher_source.to_string(),
            severity,
            lexical_score,
            explicit_precedence,
            explanation: format!(
                "{lower_source} ({lower_weight:.2}) contradicts {higher_source} \
                 ({higher_weight:.2}), lexical score {lexical_score:.2}{precedence_note}"
            ),
            recommendation: format!(
                "Treat the position of {higher_source} as authoritative and ask \
                 {lower_source} to justify or withdraw its claim"
            ),
        })
    }
}
