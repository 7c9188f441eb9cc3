//! Invocation results and the call trace

use serde::{Deserialize, Serialize};

/// Result of resolving and executing one tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationOutcome {
    /// Whether the invocation succeeded
    pub success: bool,
    /// Output data (null on failure)
    pub output: serde_json::Value,
    /// Error message if failed
    pub error: Option<String>,
    /// Execution duration in milliseconds
    pub duration_ms: u64,
}

impl InvocationOutcome {
    /// Create a successful outcome
    #[must_use]
    pub fn success(output: serde_json::Value, duration_ms: u64) -> Self {
        Self {
            success: true,
            output,
            error: None,
            duration_ms,
        }
    }

    /// Create a failed outcome
    #[must_use]
    pub fn failure(error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            success: false,
            output: serde_json::Value::Null,
            error: Some(error.into()),
            duration_ms,
        }
    }
}

/// Record of one attempted invocation, kept for the caller-facing trace
///
/// Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRecord {
    /// Tool name as requested by the model
    pub tool_name: String,
    /// Input arguments
    pub input: serde_json::Value,
    /// Output result (null on failure)
    pub output: serde_json::Value,
    /// Whether it succeeded
    pub success: bool,
    /// Error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl InvocationRecord {
    /// Build a record from an invocation and its outcome
    #[must_use]
    pub fn from_outcome(
        tool_name: impl Into<String>,
        input: serde_json::Value,
        outcome: &InvocationOutcome,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            input,
            output: outcome.output.clone(),
            success: outcome.success,
            error: outcome.error.clone(),
            duration_ms: outcome.duration_ms,
        }
    }
}

/// Ordered log of every invocation attempted during one request
pub type CallTrace = Vec<InvocationRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_constructors() {
        let ok = InvocationOutcome::success(serde_json::json!({"data": "test"}), 12);
        assert!(ok.success);
        assert!(ok.error.is_none());

        let failed = InvocationOutcome::failure("boom", 3);
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("boom"));
        assert!(failed.output.is_null());
    }

    #[test]
    fn test_record_from_outcome() {
        let outcome = InvocationOutcome::failure("Tool 'y' not found", 0);
        let record =
            InvocationRecord::from_outcome("y", serde_json::json!({"action": "noop"}), &outcome);

        assert_eq!(record.tool_name, "y");
        assert!(!record.success);
        assert_eq!(record.error.as_deref(), Some("Tool 'y' not found"));
    }

    #[test]
    fn test_record_serialization_skips_missing_error() {
        let outcome = InvocationOutcome::success(serde_json::json!("ok"), 1);
        let record = InvocationRecord::from_outcome("x", serde_json::json!({}), &outcome);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["success"], true);
    }
}
