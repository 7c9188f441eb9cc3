//! Error types for cabinet-tools

use thiserror::Error;

/// Tool error type
///
/// Handlers return these; the catalog converts them into failure outcomes
/// rather than letting them escape an invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// Tool execution failed
    #[error("execution failed: {0}")]
    Execution(String),

    /// Arguments did not match the tool's request shape
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
