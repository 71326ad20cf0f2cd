//! Error types for the text engine

/// Errors produced by the pure text-processing functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// Malformed field specification (cut-style field lists)
    #[error("invalid field spec: '{0}'")]
    InvalidSpec(String),

    /// Malformed regular expression
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}
