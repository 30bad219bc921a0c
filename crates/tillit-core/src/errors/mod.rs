mod config_error;
mod lexicon_error;
mod registry_error;

pub use config_error::ConfigError;
pub use lexicon_error::LexiconError;
pub use registry_error::RegistryError;

/// Top-level error type. Only raised while loading tables and config;
/// scoring itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum TillitError {
    #[error("registry error: {0}")]
    RegistryError(#[from] RegistryError),

    #[error("lexicon error: {0}")]
    LexiconError(#[from] LexiconError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type TillitResult<T> = Result<T, TillitError>;
