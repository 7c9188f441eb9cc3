//! Error types for cabinet-core

use thiserror::Error;

/// Core error type
///
/// Only backend-protocol failures escape the dispatch loop as errors;
/// everything tool-level is absorbed into the conversation.
#[derive(Debug, Error)]
pub enum Error {
    /// Model backend error
    #[error("llm error: {0}")]
    Llm(#[from] cabinet_llm::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
