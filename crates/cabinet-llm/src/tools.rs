//! Tool manifest types for function calling

use serde::{Deserialize, Serialize};

/// Model-facing tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON schema for the tool input
    pub input_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new(
            "perform_research",
            "Research and analysis tasks",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "action": {"type": "string"}
                },
                "required": ["action"]
            }),
        );

        assert_eq!(tool.name, "perform_research");
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["input_schema"]["type"], "object");
    }
}
