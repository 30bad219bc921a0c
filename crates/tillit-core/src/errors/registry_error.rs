/// Authority registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("source {source_id} has weight {weight} outside [0, 1]")]
    InvalidWeight { source_id: String, weight: f64 },

    #[error("duplicate source id after case folding: {source_id}")]
    DuplicateSource { source_id: String },

    #[error("source {source_id} supersedes unknown source {superseded}")]
    UnknownSuperseded {
        source_id: String,
        superseded: String,
    },

    #[error(
        "hierarchy inconsistency: {source_id} ({weight}) supersedes {superseded} ({superseded_weight}) with a higher weight"
    )]
    HierarchyInconsistent {
        source_id: String,
        weight: f64,
        superseded: String,
        superseded_weight: f64,
    },

    #[error("affiliation group {group} has fewer than two members")]
    DegenerateAffiliation { group: String },
}
