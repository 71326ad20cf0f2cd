//! Error types for tool operations

use crate::text::TextError;

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Path or tool not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text engine rejected the input (bad field spec or pattern)
    #[error(transparent)]
    Text(#[from] TextError),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl ToolError {
    /// Whether retrying the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ToolError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_errors_convert_transparently() {
        let err: ToolError = TextError::InvalidSpec("0".to_string()).into();
        assert_eq!(err.to_string(), "invalid field spec: '0'");
    }

    #[test]
    fn io_errors_are_retryable() {
        let err: ToolError =
            std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted").into();
        assert!(err.is_retryable());
        assert!(!ToolError::InvalidArguments("x".to_string()).is_retryable());
    }
}
