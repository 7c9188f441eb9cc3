//! Cabinet LLM - Anthropic Messages API integration
//!
//! This crate provides the model-facing layer for Cabinet:
//! - Message: conversation turns built from typed content blocks
//! - Backend: the `ModelBackend` trait the dispatch loop talks to
//! - Anthropic: reqwest-based client for the Messages API

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod anthropic;
pub mod error;
pub mod message;
pub mod provider;
pub mod tools;
pub mod util;

pub use anthropic::{AnthropicClient, AnthropicConfig, DEFAULT_LIGHT_MODEL, DEFAULT_MODEL, MODELS};
pub use error::{Error, Result};
pub use message::{
    CacheControl, Content, ContentBlock, Message, MessageRequest, ModelResponse, Role, StopReason,
    SystemBlock, TokenUsage,
};
pub use provider::ModelBackend;
pub use tools::ToolDefinition;
