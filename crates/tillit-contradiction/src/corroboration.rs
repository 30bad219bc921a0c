//! Cross-vector confidence: how well independent sources back a claim.
//!
//! A corroborator is a claim from a different, unaffiliated source whose
//! token-set Jaccard similarity to the target exceeds the threshold. Each
//! source counts once, through its most similar claim. Contributions
//! (`weight × similarity`) are taken strongest first, at most
//! `max_corroborators` of them, each discounted by `decay^rank`:
//!
//! `confidence = clamp(Σ weight_k × similarity_k × decay^k, floor, 1.0)`
//!
//! A claim nobody corroborates keeps the standalone floor.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use tillit_authority::AuthorityRegistry;
use tillit_core::config::CorroborationConfig;
use tillit_core::{text, Claim};

/// One independent claim backing the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Corroborator {
    pub claim_index: usize,
    pub claim_id: String,
    pub source: String,
    pub similarity: f64,
    pub authority_weight: f64,
}

impl Corroborator {
    /// Undiscounted contribution: authority weight times agreement strength.
    pub fn strength(&self) -> f64 {
        self.authority_weight * self.similarity
    }
}

/// Corroboration verdict for one claim.
#[derive(Debug, Clone, PartialEq)]
pub struct Corroboration {
    pub confidence: f64,
    /// Counted corroborators, strongest first.
    pub corroborators: Vec<Corroborator>,
}

/// Token sets for a claim list, computed once per calculation.
pub struct CorroborationIndex<'a> {
    claims: &'a [Claim],
    tokens: Vec<BTreeSet<String>>,
}

impl<'a> CorroborationIndex<'a> {
    pub fn new(claims: &'a [Claim]) -> Self {
        Self {
            claims,
            tokens: claims.iter().map(|c| text::token_set(&c.content)).collect(),
        }
    }

    /// Similarity between claims `i` and `j`.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        text::jaccard(&self.tokens[i], &self.tokens[j])
    }

    /// Cross-vector confidence of the claim at `target`.
    pub fn assess(
        &self,
        target: usize,
        registry: &AuthorityRegistry,
        config: &CorroborationConfig,
    ) -> Corroboration {
        let subject = &self.claims[target];

        // Best claim per independent source, keyed by case-folded source id.
        let mut best_by_source: BTreeMap<String, Corroborator> = BTreeMap::new();
        for (index, other) in self.claims.iter().enumerate() {
            if index == target
                || subject.same_source(other)
                || registry.are_affiliated(&subject.source, &other.source)
            {
                continue;
            }
            let similarity = self.similarity(target, index);
            if similarity <= config.similarity_threshold {
                continue;
            }
            let candidate = Corroborator {
                claim_index: index,
                claim_id: other.id.clone(),
                source: other.source.clone(),
                similarity,
                authority_weight: registry.weight_of(&other.source),
            };
            let key = text::source_key(&other.source);
            match best_by_source.get(&key) {
                Some(existing) if existing.strength() >= candidate.strength() => {}
                _ => {
                    best_by_source.insert(key, candidate);
                }
            }
        }

        let mut corroborators: Vec<Corroborator> = best_by_source.into_values().collect();
        // Strongest first; ties keep input order.
        corroborators.sort_by(|x, y| {
            y.strength()
                .total_cmp(&x.strength())
                .then(x.claim_index.cmp(&y.claim_index))
        });
        corroborators.truncate(config.max_corroborators);

        if corroborators.is_empty() {
            return Corroboration {
                confidence: config.standalone_floor,
                corroborators,
            };
        }

        let mut multiplier = 1.0;
        let mut total = 0.0;
        for c in &corroborators {
            total += c.strength() * multiplier;
            multiplier *= config.decay;
        }

        Corroboration {
            confidence: total.clamp(config.standalone_floor, 1.0),
            corroborators,
        }
    }
}
