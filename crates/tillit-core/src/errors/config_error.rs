/// Configuration document errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse {document}: {message}")]
    Parse { document: String, message: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
