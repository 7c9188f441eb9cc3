//! Extended operations group: data, marketing, and sales behind one tool

use crate::groups::{object, opt_section, respond};
use crate::specialist::Specialist;
use cabinet_tools::{Error, ParameterMap, Result, ToolHandler};
use serde::Deserialize;
use serde_json::Value;

/// Tool name
pub const NAME: &str = "consult_extended_ops";

/// Model-facing description
pub const DESCRIPTION: &str = "\
Consults the extended operations team: data, marketing, and sales.

Actions:
- analyze_data, create_visualization_plan, generate_insights (data)
- create_marketing_content, plan_campaign, analyze_marketing_performance (marketing)
- develop_sales_strategy, manage_pipeline, create_sales_proposal (sales)";

/// Data, marketing, and sales actions
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum OperationsAction {
    /// Analyze a dataset
    AnalyzeData {
        /// Description of the data
        data_description: String,
        /// What the analysis should answer
        analysis_goal: String,
    },
    /// Plan visualizations
    CreateVisualizationPlan {
        /// Kind of data to present
        data_type: String,
        /// Who will read it
        audience: String,
        /// What the visuals should achieve
        #[serde(default)]
        purpose: Option<String>,
    },
    /// Derive insights from findings
    GenerateInsights {
        /// Business context
        business_context: String,
        /// Findings from the data
        data_findings: String,
    },
    /// Create marketing content
    CreateMarketingContent {
        /// Content kind (post, landing page, newsletter, ...)
        content_type: String,
        /// Subject
        topic: String,
        /// Audience to write for
        #[serde(default)]
        target_audience: Option<String>,
    },
    /// Plan a campaign
    PlanCampaign {
        /// What the campaign should achieve
        campaign_goal: String,
        /// Budget available
        #[serde(default)]
        budget: Option<String>,
        /// How long it runs
        #[serde(default)]
        duration: Option<String>,
    },
    /// Analyze marketing performance
    AnalyzeMarketingPerformance {
        /// Metrics data
        metrics_data: String,
        /// Period covered
        #[serde(default)]
        period: Option<String>,
    },
    /// Build a sales strategy
    DevelopSalesStrategy {
        /// Market to sell into
        target_market: String,
        /// Revenue or volume goals
        goals: String,
        /// Resources available
        #[serde(default)]
        resources: Option<String>,
    },
    /// Review the pipeline
    ManagePipeline {
        /// Current pipeline data
        pipeline_data: String,
        /// Aspect to focus on
        #[serde(default)]
        focus: Option<String>,
    },
    /// Write a sales proposal
    CreateSalesProposal {
        /// The client
        client_info: String,
        /// The solution being proposed
        solution: String,
        /// Pricing, if decided
        #[serde(default)]
        pricing: Option<String>,
    },
}

impl OperationsAction {
    fn field(&self) -> &'static str {
        match self {
            Self::AnalyzeData { .. } => "analysis",
            Self::CreateVisualizationPlan { .. } => "plan",
            Self::GenerateInsights { .. } => "insights",
            Self::CreateMarketingContent { .. } => "content",
            Self::PlanCampaign { .. } => "campaign",
            Self::AnalyzeMarketingPerformance { .. } => "analysis",
            Self::DevelopSalesStrategy { .. } => "strategy",
            Self::ManagePipeline { .. } => "pipeline",
            Self::CreateSalesProposal { .. } => "proposal",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::AnalyzeData {
                data_description,
                analysis_goal,
            } => format!(
                "Analyze this data.\n\nData: {}\nGoal: {}\n\n\
                 Answer the business question first, then show the method,\n\
                 notable patterns, and caveats.",
                data_description, analysis_goal
            ),
            Self::CreateVisualizationPlan {
                data_type,
                audience,
                purpose,
            } => format!(
                "Plan visualizations.\n\nData: {}\nAudience: {}{}\n\n\
                 For each visual: the comparison it makes, the chart type,\n\
                 and why that type fits.",
                data_type,
                audience,
                opt_section("Purpose", purpose.as_ref())
            ),
            Self::GenerateInsights {
                business_context,
                data_findings,
            } => format!(
                "Derive insights.\n\nContext: {}\nFindings: {}\n\n\
                 State each insight as a decision it should change, with the\n\
                 confidence level and the caveat attached.",
                business_context, data_findings
            ),
            Self::CreateMarketingContent {
                content_type,
                topic,
                target_audience,
            } => format!(
                "Create marketing content.\n\nType: {}\nTopic: {}{}\n\n\
                 Write for one reader. Include a hook, the body, and a\n\
                 single call to action.",
                content_type,
                topic,
                opt_section("Target audience", target_audience.as_ref())
            ),
            Self::PlanCampaign {
                campaign_goal,
                budget,
                duration,
            } => format!(
                "Plan a campaign.\n\nGoal: {}{}{}\n\n\
                 Pick one primary metric, lay out channels with budget\n\
                 split, and a week-by-week schedule.",
                campaign_goal,
                opt_section("Budget", budget.as_ref()),
                opt_section("Duration", duration.as_ref())
            ),
            Self::AnalyzeMarketingPerformance {
                metrics_data,
                period,
            } => format!(
                "Analyze marketing performance.{}\n\nMetrics:\n{}\n\n\
                 Compare against plan where stated, explain the drivers, and\n\
                 recommend reallocations.",
                opt_section("Period", period.as_ref()),
                metrics_data
            ),
            Self::DevelopSalesStrategy {
                target_market,
                goals,
                resources,
            } => format!(
                "Build a sales strategy.\n\nMarket: {}\nGoals: {}{}\n\n\
                 Cover segmentation, qualification criteria, the sales\n\
                 motion, and an honest forecast.",
                target_market,
                goals,
                opt_section("Resources", resources.as_ref())
            ),
            Self::ManagePipeline {
                pipeline_data,
                focus,
            } => format!(
                "Review this pipeline.{}\n\n{}\n\n\
                 Per stage: health, stuck deals with the reason, and the\n\
                 next step for each.",
                opt_section("Focus", focus.as_ref()),
                pipeline_data
            ),
            Self::CreateSalesProposal {
                client_info,
                solution,
                pricing,
            } => format!(
                "Write a sales proposal.\n\nClient: {}\nSolution: {}{}\n\n\
                 Sell the outcome first, then the approach, then the price\n\
                 with its rationale.",
                client_info,
                solution,
                opt_section("Pricing", pricing.as_ref())
            ),
        }
    }
}

/// Handler routing between data, marketing, and sales
pub struct OperationsTool {
    data: Specialist,
    marketing: Specialist,
    sales: Specialist,
}

impl OperationsTool {
    /// Create the tool
    #[must_use]
    pub fn new(data: Specialist, marketing: Specialist, sales: Specialist) -> Self {
        Self {
            data,
            marketing,
            sales,
        }
    }

    fn specialist_for(&self, action: &OperationsAction) -> &Specialist {
        match action {
            OperationsAction::AnalyzeData { .. }
            | OperationsAction::CreateVisualizationPlan { .. }
            | OperationsAction::GenerateInsights { .. } => &self.data,
            OperationsAction::CreateMarketingContent { .. }
            | OperationsAction::PlanCampaign { .. }
            | OperationsAction::AnalyzeMarketingPerformance { .. } => &self.marketing,
            OperationsAction::DevelopSalesStrategy { .. }
            | OperationsAction::ManagePipeline { .. }
            | OperationsAction::CreateSalesProposal { .. } => &self.sales,
        }
    }

    /// Declared parameters for registration
    #[must_use]
    pub fn parameters() -> ParameterMap {
        object(serde_json::json!({
            "action": {
                "type": "string",
                "enum": [
                    "analyze_data", "create_visualization_plan", "generate_insights",
                    "create_marketing_content", "plan_campaign", "analyze_marketing_performance",
                    "develop_sales_strategy", "manage_pipeline", "create_sales_proposal"
                ],
                "description": "Which data, marketing, or sales task to perform"
            },
            "params": {
                "type": "object",
                "description": "Parameters for the chosen action (data_description, analysis_goal, data_type, audience, business_context, content_type, topic, campaign_goal, metrics_data, target_market, goals, pipeline_data, client_info, solution, ...)"
            }
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for OperationsTool {
    async fn call(&self, arguments: Value) -> Result<Value> {
        let action: OperationsAction = serde_json::from_value(arguments)
            .map_err(|e| Error::InvalidInput(format!("{}: {}", NAME, e)))?;
        let specialist = self.specialist_for(&action);
        let field = action.field();
        let text = specialist.consult(action.render()).await?;
        Ok(respond(specialist, field, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::testing::specialist;
    use crate::profiles;

    fn tool() -> OperationsTool {
        OperationsTool::new(
            specialist(&profiles::DATA, "data says"),
            specialist(&profiles::MARKETING, "marketing says"),
            specialist(&profiles::SALES, "sales says"),
        )
    }

    #[tokio::test]
    async fn test_campaign_routes_to_marketing() {
        let result = tool()
            .call(serde_json::json!({
                "action": "plan_campaign",
                "params": {"campaign_goal": "200 signups", "budget": "$5k"}
            }))
            .await
            .unwrap();

        assert_eq!(result["specialist"], "Marketing Lead");
        assert_eq!(result["campaign"], "marketing says");
    }

    #[tokio::test]
    async fn test_proposal_routes_to_sales() {
        let result = tool()
            .call(serde_json::json!({
                "action": "create_sales_proposal",
                "params": {"client_info": "mid-size retailer", "solution": "inventory sync"}
            }))
            .await
            .unwrap();

        assert_eq!(result["specialist"], "Sales Lead");
        assert_eq!(result["proposal"], "sales says");
    }

    #[test]
    fn test_parse_analyze_data() {
        let action: OperationsAction = serde_json::from_value(serde_json::json!({
            "action": "analyze_data",
            "params": {"data_description": "monthly churn", "analysis_goal": "find drivers"}
        }))
        .unwrap();
        assert_eq!(action.field(), "analysis");
    }
}
