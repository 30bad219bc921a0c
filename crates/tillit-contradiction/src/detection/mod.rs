//! Contradiction detection strategy registry.
//!
//! Each strategy is a pure function of two claims plus shared read-only
//! context. Strategies run in a fixed order and the first match wins.

pub mod authority_hierarchy;
pub mod data_contradiction;
pub mod logical_impossibility;
pub mod self_contradiction;
pub mod settlement_logic;
pub mod temporal_inconsistency;

use tillit_authority::AuthorityRegistry;
use tillit_core::config::DetectionConfig;
use tillit_core::{Claim, ContradictionResult, ContradictionType, Lexicon};

/// Read-only inputs shared by every strategy.
#[derive(Debug, Clone, Copy)]
pub struct DetectionContext<'a> {
    pub registry: &'a AuthorityRegistry,
    pub lexicon: &'a Lexicon,
    pub config: &'a DetectionConfig,
}

/// One contradiction pattern. Implementations must be pure and deterministic.
pub trait ContradictionStrategy: Send + Sync {
    /// Stable identifier, used in logs.
    fn name(&self) -> &'static str;

    /// The type of contradiction this strategy reports.
    fn contradiction_type(&self) -> ContradictionType;

    /// `Some` when the pair matches this pattern.
    fn detect(
        &self,
        a: &Claim,
        b: &Claim,
        ctx: &DetectionContext<'_>,
    ) -> Option<ContradictionResult>;
}

/// The built-in strategies, most specific first.
pub fn default_strategies() -> Vec<Box<dyn ContradictionStrategy>> {
    vec![
        // 1. Liability denial + settlement offer.
        Box::new(settlement_logic::SettlementLogic),
        // 2. "No personal data" + data processing.
        Box::new(data_contradiction::DataContradiction),
        // 3. Lower authority contradicting higher authority.
        Box::new(authority_hierarchy::AuthorityHierarchy),
        // 4. Same source reversing itself over time.
        Box::new(temporal_inconsistency::TemporalInconsistency),
        // 5. Mutually exclusive absolute terms.
        Box::new(logical_impossibility::LogicalImpossibility),
    ]
}

/// Shorten claim text for explanations.
pub(crate) fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 80;
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(MAX_CHARS).collect();
        format!("{}…", cut.trim_end())
    }
}
