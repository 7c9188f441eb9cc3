//! Backend trait the dispatch loop talks to
//!
//! The loop treats the model as an opaque remote call: it sends system
//! instructions, a tool manifest, and the conversation, and gets back
//! content blocks tagged with a stop reason. Anything that can issue that
//! call can stand in for the real API, which is how the loop is tested.

use crate::error::Result;
use crate::message::{MessageRequest, ModelResponse};

/// A handle that can issue Messages API requests
#[async_trait::async_trait]
pub trait ModelBackend: Send + Sync {
    /// Backend name, for logging
    fn name(&self) -> &str;

    /// Model used when a request does not specify one
    fn default_model(&self) -> &str;

    /// Issue one request and return the response
    async fn create_message(&self, request: MessageRequest) -> Result<ModelResponse>;
}
