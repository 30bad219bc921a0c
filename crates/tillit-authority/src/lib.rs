//! # tillit-authority
//!
//! Lookup-only catalog mapping source identifiers to authority weights.
//!
//! The registry is loaded once from a versioned TOML table (the Norwegian
//! legal-authority table is embedded as the default), validated, and then
//! never mutated, so it can be shared across threads without locking.
//!
//! ## Operations
//! - `weight_of` / `info_of`: case-insensitive lookup, unknown sources fall
//!   back to weight 0.10
//! - `compare`: order two sources by weight
//! - `check_hierarchy_violation`: lower-authority claim contradicting a
//!   higher-authority one
//! - `are_affiliated`: corporate connection table used by corroboration

pub mod affiliation;
pub mod comparison;
pub mod hierarchy;
pub mod registry;
mod validation;

pub use affiliation::AffiliationGroup;
pub use comparison::AuthorityComparison;
pub use hierarchy::HierarchyViolation;
pub use registry::{AuthorityRegistry, RegistryDocument};
