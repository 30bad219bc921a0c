//! Load-time checks. A registry that fails these is never constructed.

use std::collections::BTreeMap;

use tillit_core::errors::{RegistryError, TillitResult};
use tillit_core::AuthorityEntry;

use crate::affiliation::AffiliationGroup;
use crate::registry::normalize;

/// Case-fold keys and supersedes targets, reject out-of-range weights and
/// keys that collide after folding.
pub(crate) fn normalize_entries(
    sources: BTreeMap<String, AuthorityEntry>,
) -> TillitResult<BTreeMap<String, AuthorityEntry>> {
    let mut entries = BTreeMap::new();
    for (raw_id, mut entry) in sources {
        let source_id = normalize(&raw_id);
        if !entry.weight.is_finite() || !(0.0..=1.0).contains(&entry.weight) {
            return Err(RegistryError::InvalidWeight {
                source_id,
                weight: entry.weight,
            }
            .into());
        }
        entry.supersedes = entry.supersedes.iter().map(|s| normalize(s)).collect();
        if entries.insert(source_id.clone(), entry).is_some() {
            return Err(RegistryError::DuplicateSource { source_id }.into());
        }
    }
    Ok(entries)
}

/// Every supersedes target exists and carries a weight no greater than the
/// superseding entry's.
pub(crate) fn check_hierarchy(entries: &BTreeMap<String, AuthorityEntry>) -> TillitResult<()> {
    for (source_id, entry) in entries {
        for superseded in &entry.supersedes {
            let Some(target) = entries.get(superseded) else {
                return Err(RegistryError::UnknownSuperseded {
                    source_id: source_id.clone(),
                    superseded: superseded.clone(),
                }
                .into());
            };
            if target.weight > entry.weight {
                return Err(RegistryError::HierarchyInconsistent {
                    source_id: source_id.clone(),
                    weight: entry.weight,
                    superseded: superseded.clone(),
                    superseded_weight: target.weight,
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Groups need at least two distinct members to connect anything.
pub(crate) fn check_affiliations(groups: &[AffiliationGroup]) -> TillitResult<()> {
    for group in groups {
        let mut members: Vec<String> = group.members.iter().map(|m| normalize(m)).collect();
        members.sort();
        members.dedup();
        if members.len() < 2 {
            return Err(RegistryError::DegenerateAffiliation {
                group: group.group.clone(),
            }
            .into());
        }
    }
    Ok(())
}
