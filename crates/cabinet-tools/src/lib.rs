//! Cabinet Tools - capability catalog
//!
//! The catalog maps a tool name to its declared contract (description +
//! input schema) and its execution handler. It supplies the model-facing
//! manifest and resolves a requested invocation to a handler, normalizing
//! every failure into a result the dispatch loop can feed back to the
//! model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::{Capability, ParameterMap, ToolCatalog, ToolDescriptor, ToolHandler};
pub use error::{Error, Result};
pub use record::{CallTrace, InvocationOutcome, InvocationRecord};
