//! # tillit-contradiction
//!
//! Lexical, pattern-based contradiction detection between claims, and the
//! cross-vector corroboration that rewards independent agreement.
//!
//! ## Pair strategies, in evaluation order
//! 1. **Settlement logic**: liability denial alongside a settlement offer
//! 2. **Data contradiction**: "no personal data" alongside data processing
//! 3. **Authority hierarchy**: lower authority contradicting a higher one
//! 4. **Temporal inconsistency**: same source, opposite statements, >1 day apart
//! 5. **Logical impossibility**: mutually exclusive absolute terms
//!
//! Plus **self-contradiction**, which checks sentences within one claim.
//!
//! Detection is a heuristic, not a legal determination. The first strategy
//! that matches a pair wins; the order is fixed and explicit.

pub mod corroboration;
pub mod detection;

use rayon::prelude::*;
use tracing::debug;

use tillit_core::{Claim, ContradictionResult};

pub use corroboration::{Corroboration, CorroborationIndex, Corroborator};
pub use detection::{ContradictionStrategy, DetectionContext};

/// A positive detection for the claim pair `(first, second)`, `first < second`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairFinding {
    pub first: usize,
    pub second: usize,
    pub result: ContradictionResult,
}

/// Runs an ordered list of strategies over claim pairs.
pub struct ContradictionDetector {
    strategies: Vec<Box<dyn ContradictionStrategy>>,
}

impl ContradictionDetector {
    /// The five built-in strategies in their fixed order.
    pub fn new() -> Self {
        Self {
            strategies: detection::default_strategies(),
        }
    }

    /// A detector with a custom strategy list, evaluated in the given order.
    pub fn with_strategies(strategies: Vec<Box<dyn ContradictionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// First strategy to match the pair, or `None`.
    pub fn detect_pair(
        &self,
        a: &Claim,
        b: &Claim,
        ctx: &DetectionContext<'_>,
    ) -> Option<ContradictionResult> {
        self.strategies.iter().find_map(|s| s.detect(a, b, ctx))
    }

    /// Every strategy that matches the pair, in strategy order.
    pub fn detect_pair_exhaustive(
        &self,
        a: &Claim,
        b: &Claim,
        ctx: &DetectionContext<'_>,
    ) -> Vec<ContradictionResult> {
        self.strategies
            .iter()
            .filter_map(|s| s.detect(a, b, ctx))
            .collect()
    }

    /// Sentences within a single claim contradicting each other.
    pub fn detect_self(
        &self,
        claim: &Claim,
        ctx: &DetectionContext<'_>,
    ) -> Option<ContradictionResult> {
        detection::self_contradiction::detect(claim, ctx)
    }

    /// Run [`detect_pair`](Self::detect_pair) over every unordered pair.
    ///
    /// Findings come back in `(first, second)` lexicographic order whether or
    /// not the scan runs in parallel.
    pub fn scan_pairs(
        &self,
        claims: &[Claim],
        ctx: &DetectionContext<'_>,
        parallel: bool,
    ) -> Vec<PairFinding> {
        let n = claims.len();
        debug!(claims = n, parallel, "scanning claim pairs");

        let check = |i: usize, j: usize| {
            self.detect_pair(&claims[i], &claims[j], ctx)
                .map(|result| PairFinding {
                    first: i,
                    second: j,
                    result,
                })
        };

        if parallel {
            (0..n)
                .into_par_iter()
                .flat_map_iter(|i| ((i + 1)..n).filter_map(move |j| check(i, j)))
                .collect()
        } else {
            (0..n)
                .flat_map(|i| ((i + 1)..n).filter_map(move |j| check(i, j)))
                .collect()
        }
    }
}

impl Default for ContradictionDetector {
    fn default() -> Self {
        Self::new()
    }
}
