//! Cabinet Core - the dispatch loop
//!
//! Drives a turn-bounded tool-use conversation: send the conversation plus
//! the tool manifest to the model, execute whatever tools it requests,
//! feed the results back, and stop on a final answer, an unexpected stop
//! condition, or exhaustion of the iteration budget.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod conversation;
pub mod dispatcher;
pub mod error;
pub mod result;

pub use config::{DispatchRequest, DispatcherConfig, DEFAULT_SYSTEM_PROMPT};
pub use conversation::{Conversation, DEFAULT_HISTORY_LIMIT};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use result::{DispatchResult, DispatchStatus};
