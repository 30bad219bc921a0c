/// Opposite-term lexicon errors.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon {version} contains no term pairs")]
    Empty { version: String },

    #[error("term pair #{index} has an empty term")]
    EmptyTerm { index: usize },

    #[error("term pair #{index} uses the same term on both sides: {term}")]
    IdenticalTerms { index: usize, term: String },

    #[error("term pair #{index} failed to compile: {message}")]
    Pattern { index: usize, message: String },
}
