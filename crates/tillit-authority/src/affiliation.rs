//! Corporate connection table.
//!
//! Sources in the same group are not independent of each other: a creditor
//! and the agency collecting on its behalf cannot corroborate one another.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::registry::normalize;

/// A named set of connected source identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliationGroup {
    pub group: String,
    pub members: Vec<String>,
}

/// Source id → names of the groups it belongs to.
#[derive(Debug, Clone, Default)]
pub(crate) struct AffiliationIndex {
    memberships: BTreeMap<String, BTreeSet<String>>,
}

impl AffiliationIndex {
    pub(crate) fn build(groups: &[AffiliationGroup]) -> Self {
        let mut memberships: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for group in groups {
            for member in &group.members {
                memberships
                    .entry(normalize(member))
                    .or_default()
                    .insert(group.group.clone());
            }
        }
        Self { memberships }
    }

    /// Two distinct sources sharing at least one group.
    pub(crate) fn connected(&self, a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            return false;
        }
        match (self.memberships.get(&a), self.memberships.get(&b)) {
            (Some(ga), Some(gb)) => !ga.is_disjoint(gb),
            _ => false,
        }
    }
}
