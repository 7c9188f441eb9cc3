//! Grouped specialist tools
//!
//! Each group is one model-facing tool. Its input is an `action` name plus
//! a typed `params` payload; deserialization at the catalog boundary is
//! the only validation step, so an unknown action or malformed parameters
//! surface as a tool error the dispatcher reports back to the model.

pub mod engineering;
pub mod legal;
pub mod operations;
pub mod organization;
pub mod productivity;
pub mod research;
pub mod strategy;
pub mod writing;

pub use engineering::EngineeringTool;
pub use legal::LegalTool;
pub use operations::OperationsTool;
pub use organization::OrganizationTool;
pub use productivity::ProductivityTool;
pub use research::ResearchTool;
pub use strategy::StrategyTool;
pub use writing::WritingTool;

use crate::specialist::Specialist;
use cabinet_tools::ParameterMap;
use serde_json::Value;

/// Standard success payload: `{success, specialist, <field>: text}`
pub(crate) fn respond(specialist: &Specialist, field: &str, text: String) -> Value {
    let mut map = serde_json::Map::new();
    map.insert("success".to_string(), Value::Bool(true));
    map.insert(
        "specialist".to_string(),
        Value::String(specialist.title().to_string()),
    );
    map.insert(field.to_string(), Value::String(text));
    Value::Object(map)
}

/// Optional labeled line for prompt assembly
pub(crate) fn opt_section(label: &str, value: Option<&String>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("\n{}: {}", label, v),
        _ => String::new(),
    }
}

/// Bulleted list for prompt assembly
pub(crate) fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract the object map from a `json!` literal
pub(crate) fn object(value: Value) -> ParameterMap {
    match value {
        Value::Object(map) => map,
        _ => ParameterMap::new(),
    }
}
