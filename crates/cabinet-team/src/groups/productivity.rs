//! Productivity group: tasks, schedules, notes

use crate::groups::{object, opt_section, respond};
use crate::specialist::Specialist;
use cabinet_tools::{Error, ParameterMap, Result, ToolHandler};
use serde::Deserialize;
use serde_json::Value;

/// Tool name
pub const NAME: &str = "manage_productivity";

/// Model-facing description
pub const DESCRIPTION: &str = "\
Performs productivity work: task management, schedule coordination, and
note summarization.

Actions:
- manage_tasks: build and prioritize a task list
- organize_schedule: arrange and optimize a schedule
- summarize_notes: summarize and structure notes";

/// One existing task handed in with a request
#[derive(Debug, Deserialize)]
pub struct TaskItem {
    /// Task title
    pub title: String,
}

/// Productivity actions
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum ProductivityAction {
    /// Build and prioritize a task list
    ManageTasks {
        /// What the user wants done
        request: String,
        /// Existing tasks, if any
        #[serde(default)]
        tasks: Vec<TaskItem>,
    },
    /// Arrange and optimize a schedule
    OrganizeSchedule {
        /// Events to place
        events: Vec<String>,
        /// Constraints to respect
        #[serde(default)]
        constraints: Option<String>,
    },
    /// Summarize and structure notes
    SummarizeNotes {
        /// Raw notes
        notes: String,
    },
}

impl ProductivityAction {
    fn field(&self) -> &'static str {
        match self {
            Self::ManageTasks { .. } => "recommendations",
            Self::OrganizeSchedule { .. } => "schedule",
            Self::SummarizeNotes { .. } => "summary",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::ManageTasks { request, tasks } => {
                let existing = if tasks.is_empty() {
                    String::new()
                } else {
                    let lines: Vec<String> =
                        tasks.iter().map(|t| format!("- {}", t.title)).collect();
                    format!("\nCurrent task list:\n{}", lines.join("\n"))
                };
                format!(
                    "User request: {}\n{}\n\n\
                     Analyze the request and provide:\n\
                     1. A recommended task list (specific and actionable)\n\
                     2. Priority for each task (high/medium/low)\n\
                     3. Estimated effort\n\
                     4. A suggested order of execution",
                    request, existing
                )
            }
            Self::OrganizeSchedule {
                events,
                constraints,
            } => {
                format!(
                    "Optimize the following schedule:\n\n{}{}\n\n\
                     Provide:\n\
                     1. An optimized arrangement\n\
                     2. Suggested time blocks\n\
                     3. Ways to protect free time\n\
                     4. Caveats and recommendations",
                    crate::groups::bullets(events),
                    opt_section("Constraints", constraints.as_ref())
                )
            }
            Self::SummarizeNotes { notes } => {
                format!(
                    "Analyze and structure these notes:\n\n{}\n\n\
                     Provide:\n\
                     1. A core summary (3-5 bullet points)\n\
                     2. Grouping by topic\n\
                     3. Extracted action items\n\
                     4. Important dates and deadlines",
                    notes
                )
            }
        }
    }
}

/// Handler backed by the productivity specialist
pub struct ProductivityTool {
    specialist: Specialist,
}

impl ProductivityTool {
    /// Create the tool
    #[must_use]
    pub fn new(specialist: Specialist) -> Self {
        Self { specialist }
    }

    /// Declared parameters for registration
    #[must_use]
    pub fn parameters() -> ParameterMap {
        object(serde_json::json!({
            "action": {
                "type": "string",
                "enum": ["manage_tasks", "organize_schedule", "summarize_notes"],
                "description": "Which productivity task to perform"
            },
            "params": {
                "type": "object",
                "description": "Parameters for the chosen action",
                "properties": {
                    "request": {"type": "string"},
                    "tasks": {"type": "array", "items": {"type": "object"}},
                    "events": {"type": "array", "items": {"type": "string"}},
                    "constraints": {"type": "string"},
                    "notes": {"type": "string"}
                }
            }
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for ProductivityTool {
    async fn call(&self, arguments: Value) -> Result<Value> {
        let action: ProductivityAction = serde_json::from_value(arguments)
            .map_err(|e| Error::InvalidInput(format!("{}: {}", NAME, e)))?;
        let field = action.field();
        let text = self.specialist.consult(action.render()).await?;
        Ok(respond(&self.specialist, field, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::testing::specialist;
    use crate::profiles;

    #[test]
    fn test_parse_manage_tasks() {
        let action: ProductivityAction = serde_json::from_value(serde_json::json!({
            "action": "manage_tasks",
            "params": {"request": "plan my week", "tasks": [{"title": "ship release"}]}
        }))
        .unwrap();

        match action {
            ProductivityAction::ManageTasks { request, tasks } => {
                assert_eq!(request, "plan my week");
                assert_eq!(tasks.len(), 1);
            }
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_action_fails_parse() {
        let result: std::result::Result<ProductivityAction, _> =
            serde_json::from_value(serde_json::json!({
                "action": "do_everything",
                "params": {}
            }));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_includes_constraints() {
        let action = ProductivityAction::OrganizeSchedule {
            events: vec!["standup 9am".to_string()],
            constraints: Some("no meetings after 4pm".to_string()),
        };
        let prompt = action.render();
        assert!(prompt.contains("- standup 9am"));
        assert!(prompt.contains("no meetings after 4pm"));
    }

    #[tokio::test]
    async fn test_handler_end_to_end() {
        let tool = ProductivityTool::new(specialist(&profiles::PRODUCTIVITY, "do X then Y"));
        let result = tool
            .call(serde_json::json!({
                "action": "summarize_notes",
                "params": {"notes": "met with supplier, needs quote by Friday"}
            }))
            .await
            .unwrap();

        assert_eq!(result["success"], true);
        assert_eq!(result["summary"], "do X then Y");
        assert_eq!(result["specialist"], "Productivity Specialist");
    }

    #[tokio::test]
    async fn test_handler_rejects_malformed_params() {
        let tool = ProductivityTool::new(specialist(&profiles::PRODUCTIVITY, "unused"));
        let result = tool
            .call(serde_json::json!({"action": "summarize_notes", "params": {}}))
            .await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
