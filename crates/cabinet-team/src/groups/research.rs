//! Research group: topics, competitors, source synthesis

use crate::groups::{bullets, object, opt_section, respond};
use crate::specialist::Specialist;
use cabinet_tools::{Error, ParameterMap, Result, ToolHandler};
use serde::Deserialize;
use serde_json::Value;

/// Tool name
pub const NAME: &str = "perform_research";

/// Model-facing description
pub const DESCRIPTION: &str = "\
Performs research and analysis work: topic investigation, competitor
analysis, and source summarization.

Actions:
- research_topic: investigate a topic in depth
- analyze_competitors: compare named competitors
- summarize_research: condense research material into insights";

/// Research actions
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum ResearchAction {
    /// Investigate a topic in depth
    ResearchTopic {
        /// Topic to investigate
        topic: String,
        /// Aspects to focus on
        #[serde(default)]
        focus_areas: Option<Vec<String>>,
    },
    /// Compare named competitors
    AnalyzeCompetitors {
        /// Competitors to compare
        competitors: Vec<String>,
        /// Dimension to focus the comparison on
        #[serde(default)]
        focus: Option<String>,
    },
    /// Condense research material
    SummarizeResearch {
        /// Source material
        documents: String,
    },
}

impl ResearchAction {
    fn field(&self) -> &'static str {
        match self {
            Self::ResearchTopic { .. } => "findings",
            Self::AnalyzeCompetitors { .. } => "analysis",
            Self::SummarizeResearch { .. } => "summary",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::ResearchTopic { topic, focus_areas } => {
                let focus = match focus_areas {
                    Some(areas) if !areas.is_empty() => {
                        format!("\nFocus areas:\n{}", bullets(areas))
                    }
                    _ => String::new(),
                };
                format!(
                    "Research the following topic: {}\n{}\n\n\
                     Provide:\n\
                     1. An overview of the current landscape\n\
                     2. Key players and dynamics\n\
                     3. Relevant data points and trends\n\
                     4. Implications for the business",
                    topic, focus
                )
            }
            Self::AnalyzeCompetitors { competitors, focus } => {
                format!(
                    "Analyze these competitors:\n{}{}\n\n\
                     Provide:\n\
                     1. Positioning and target segment of each\n\
                     2. Strengths and weaknesses\n\
                     3. A comparison on the requested dimension\n\
                     4. Openings we can exploit",
                    bullets(competitors),
                    opt_section("Comparison focus", focus.as_ref())
                )
            }
            Self::SummarizeResearch { documents } => {
                format!(
                    "Summarize the following research material:\n\n{}\n\n\
                     Provide:\n\
                     1. The central findings\n\
                     2. Supporting evidence, with its strength noted\n\
                     3. Open questions the material does not settle\n\
                     4. Recommended next steps",
                    documents
                )
            }
        }
    }
}

/// Handler backed by the research specialist
pub struct ResearchTool {
    specialist: Specialist,
}

impl ResearchTool {
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
                "enum": ["research_topic", "analyze_competitors", "summarize_research"],
                "description": "Which research task to perform"
            },
            "params": {
                "type": "object",
                "description": "Parameters for the chosen action",
                "properties": {
                    "topic": {"type": "string"},
                    "focus_areas": {"type": "array", "items": {"type": "string"}},
                    "competitors": {"type": "array", "items": {"type": "string"}},
                    "focus": {"type": "string"},
                    "documents": {"type": "string"}
                }
            }
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for ResearchTool {
    async fn call(&self, arguments: Value) -> Result<Value> {
        let action: ResearchAction = serde_json::from_value(arguments)
            .map_err(|e| Error::InvalidInput(format!("{}: {}", NAME, e)))?;
        let field = action.field();
        let text = self.specialist.consult(action.render()).await?;
        Ok(respond(&self.specialist, field, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_competitors() {
        let action: ResearchAction = serde_json::from_value(serde_json::json!({
            "action": "analyze_competitors",
            "params": {"competitors": ["Acme", "Globex"], "focus": "pricing"}
        }))
        .unwrap();

        let prompt = action.render();
        assert!(prompt.contains("- Acme"));
        assert!(prompt.contains("Comparison focus: pricing"));
        assert_eq!(action.field(), "analysis");
    }

    #[test]
    fn test_missing_required_param_fails() {
        let result: std::result::Result<ResearchAction, _> =
            serde_json::from_value(serde_json::json!({
                "action": "research_topic",
                "params": {"focus_areas": ["x"]}
            }));
        assert!(result.is_err());
    }
}
