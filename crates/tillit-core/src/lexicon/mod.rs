//! Versioned opposite-term lexicon and the lexical contradiction score.
//!
//! The score is a coarse 0..1 signal: the fraction of pairs that appear split
//! across the two texts (one term in each). By default the fraction is taken
//! over every pair in the lexicon; [`LexicalDenominator::RelevantPairs`]
//! counts only pairs with a term in either text. It is not semantic
//! entailment and must not be read as legal proof.

mod term;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, LexiconError, TillitResult};

pub use term::{OppositePair, Presence};

static NORWEGIAN_SOURCE: &str = include_str!("../../data/lexicon/no_debt_collection.toml");

static NORWEGIAN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_toml(NORWEGIAN_SOURCE).expect("embedded Norwegian lexicon is valid")
});

/// Serialized form of a lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconDocument {
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub pairs: Vec<TermPair>,
}

/// One opposite-term pair as written in a lexicon document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermPair {
    pub positive: String,
    pub negative: String,
}

impl TermPair {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }
}

/// What the split-pair count is divided by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalDenominator {
    /// Every pair in the lexicon.
    #[default]
    AllPairs,
    /// Only pairs with a term in either text. Ordinary wording sharing a
    /// single common term ("yes", "no") can reach 1.0 in this mode.
    RelevantPairs,
}

/// A compiled, immutable set of opposite-term pairs.
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: String,
    description: String,
    pairs: Vec<OppositePair>,
}

impl Lexicon {
    /// Parse and compile a TOML lexicon document.
    pub fn from_toml(source: &str) -> TillitResult<Self> {
        let document: LexiconDocument = toml::from_str(source).map_err(|e| ConfigError::Parse {
            document: "lexicon".to_string(),
            message: e.to_string(),
        })?;
        Self::from_document(document)
    }

    /// Compile a lexicon document.
    pub fn from_document(document: LexiconDocument) -> TillitResult<Self> {
        if document.pairs.is_empty() {
            return Err(LexiconError::Empty {
                version: document.version,
            }
            .into());
        }
        let pairs = document
            .pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| OppositePair::compile(index, &pair.positive, &pair.negative))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            version: document.version,
            description: document.description,
            pairs,
        })
    }

    /// The embedded Norwegian debt-collection lexicon.
    pub fn norwegian() -> Self {
        NORWEGIAN.clone()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pairs(&self) -> &[OppositePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize back into a document, e.g. to append pairs and reload.
    pub fn to_document(&self) -> LexiconDocument {
        LexiconDocument {
            version: self.version.clone(),
            description: self.description.clone(),
            pairs: self
                .pairs
                .iter()
                .map(|p| TermPair::new(p.positive(), p.negative()))
                .collect(),
        }
    }

    /// Pairs that appear split across the two texts, one term in each.
    pub fn split_pairs<'a>(&'a self, a: &str, b: &str) -> Vec<&'a OppositePair> {
        self.pairs.iter().filter(|p| p.is_split(a, b)).collect()
    }

    /// Split pairs divided by the number of pairs in the lexicon.
    pub fn contradiction_score(&self, a: &str, b: &str) -> f64 {
        self.contradiction_score_with(a, b, LexicalDenominator::AllPairs)
    }

    /// Split pairs divided by `denominator`. 0.0 when the denominator is 0.
    pub fn contradiction_score_with(
        &self,
        a: &str,
        b: &str,
        denominator: LexicalDenominator,
    ) -> f64 {
        let mut checked = 0usize;
        let mut split = 0usize;
        for pair in &self.pairs {
            let pa = pair.presence(a);
            let pb = pair.presence(b);
            if denominator == LexicalDenominator::RelevantPairs && !(pa.any() || pb.any()) {
                continue;
            }
            checked += 1;
            if pa.opposes(&pb) {
                split += 1;
            }
        }
        if checked == 0 {
            0.0
        } else {
            split as f64 / checked as f64
        }
    }
}
