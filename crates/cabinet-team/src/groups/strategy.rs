//! Business strategy group: finance, business development, and product

use crate::groups::{bullets, object, opt_section, respond};
use crate::specialist::Specialist;
use cabinet_tools::{Error, ParameterMap, Result, ToolHandler};
use serde::Deserialize;
use serde_json::Value;

/// Tool name
pub const NAME: &str = "consult_business_strategy";

/// Model-facing description
pub const DESCRIPTION: &str = "\
Consults the business strategy team: finance, business development, and
product.

Actions:
- analyze_finances, create_budget, forecast_financials (finance)
- identify_opportunities, develop_partnership_strategy, create_growth_plan (business development)
- analyze_product_opportunity, create_product_roadmap, define_feature_specs (product)";

/// Strategy actions
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum StrategyAction {
    /// Analyze financial data
    AnalyzeFinances {
        /// The financial data
        financial_data: String,
        /// Period covered
        #[serde(default)]
        period: Option<String>,
    },
    /// Build a budget
    CreateBudget {
        /// Departments to allocate across
        departments: Vec<String>,
        /// Total budget available
        total_budget: String,
        /// Constraints on the allocation
        #[serde(default)]
        constraints: Option<String>,
    },
    /// Forecast financials
    ForecastFinancials {
        /// Historical data
        historical_data: String,
        /// Growth assumptions to apply
        #[serde(default)]
        growth_assumptions: Option<String>,
    },
    /// Identify growth opportunities
    IdentifyOpportunities {
        /// Market to examine
        market: String,
        /// Aspects to focus on
        #[serde(default)]
        focus_areas: Option<Vec<String>>,
    },
    /// Develop a partnership strategy
    DevelopPartnershipStrategy {
        /// Kind of partner sought
        partner_type: String,
        /// What the partnership should achieve
        #[serde(default)]
        objectives: Option<String>,
    },
    /// Build a growth plan
    CreateGrowthPlan {
        /// Where the business is today
        current_state: String,
        /// Where it should be
        target_goals: String,
        /// Over what timeframe
        #[serde(default)]
        timeframe: Option<String>,
    },
    /// Analyze a product opportunity
    AnalyzeProductOpportunity {
        /// Market context
        market: String,
        /// The customer problem
        customer_problem: String,
    },
    /// Build a product roadmap
    CreateProductRoadmap {
        /// Product vision
        product_vision: String,
        /// Phase structure, if predetermined
        #[serde(default)]
        phases: Option<String>,
    },
    /// Write feature specifications
    DefineFeatureSpecs {
        /// The feature
        feature_description: String,
        /// Known requirements
        #[serde(default)]
        requirements: Option<String>,
    },
}

impl StrategyAction {
    fn field(&self) -> &'static str {
        match self {
            Self::AnalyzeFinances { .. } => "analysis",
            Self::CreateBudget { .. } => "budget",
            Self::ForecastFinancials { .. } => "forecast",
            Self::IdentifyOpportunities { .. } => "opportunities",
            Self::DevelopPartnershipStrategy { .. } => "strategy",
            Self::CreateGrowthPlan { .. } => "plan",
            Self::AnalyzeProductOpportunity { .. } => "analysis",
            Self::CreateProductRoadmap { .. } => "roadmap",
            Self::DefineFeatureSpecs { .. } => "specs",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::AnalyzeFinances {
                financial_data,
                period,
            } => format!(
                "Analyze the following financials.{}\n\n{}\n\n\
                 Provide revenue and cost structure, unit economics, notable\n\
                 movements, and cash or runway risks.",
                opt_section("Period", period.as_ref()),
                financial_data
            ),
            Self::CreateBudget {
                departments,
                total_budget,
                constraints,
            } => format!(
                "Build a budget of {} across these departments:\n{}{}\n\n\
                 Provide the allocation with rationale per department, the\n\
                 assumptions behind each number, and a contingency reserve.",
                total_budget,
                bullets(departments),
                opt_section("Constraints", constraints.as_ref())
            ),
            Self::ForecastFinancials {
                historical_data,
                growth_assumptions,
            } => format!(
                "Forecast financials from this history:\n\n{}{}\n\n\
                 Provide a base, optimistic, and pessimistic scenario with\n\
                 every assumption stated next to the number it drives.",
                historical_data,
                opt_section("Growth assumptions", growth_assumptions.as_ref())
            ),
            Self::IdentifyOpportunities { market, focus_areas } => {
                let focus = match focus_areas {
                    Some(areas) if !areas.is_empty() => {
                        format!("\nFocus areas:\n{}", bullets(areas))
                    }
                    _ => String::new(),
                };
                format!(
                    "Identify growth opportunities in this market: {}{}\n\n\
                     Size each opportunity before ranking, and note what it\n\
                     would take to pursue.",
                    market, focus
                )
            }
            Self::DevelopPartnershipStrategy {
                partner_type,
                objectives,
            } => format!(
                "Develop a partnership strategy.\n\nPartner type: {}{}\n\n\
                 Cover candidate profiles, the partner's incentive, deal\n\
                 structure options, and success metrics.",
                partner_type,
                opt_section("Objectives", objectives.as_ref())
            ),
            Self::CreateGrowthPlan {
                current_state,
                target_goals,
                timeframe,
            } => format!(
                "Build a growth plan.\n\nCurrent state: {}\nTargets: {}{}\n\n\
                 Stage the plan with measurable milestones and the resources\n\
                 each stage needs.",
                current_state,
                target_goals,
                opt_section("Timeframe", timeframe.as_ref())
            ),
            Self::AnalyzeProductOpportunity {
                market,
                customer_problem,
            } => format!(
                "Analyze this product opportunity.\n\nMarket: {}\n\
                 Customer problem: {}\n\n\
                 Cover problem severity and frequency, existing alternatives,\n\
                 our wedge, and the evidence we should gather first.",
                market, customer_problem
            ),
            Self::CreateProductRoadmap {
                product_vision,
                phases,
            } => format!(
                "Build a product roadmap for this vision: {}{}\n\n\
                 Sequence by learning value and dependency; for each phase\n\
                 give the goal, the features, and the exit criterion.",
                product_vision,
                opt_section("Phases", phases.as_ref())
            ),
            Self::DefineFeatureSpecs {
                feature_description,
                requirements,
            } => format!(
                "Write a specification for this feature: {}{}\n\n\
                 Include user stories, acceptance criteria, edge cases, and\n\
                 out-of-scope items.",
                feature_description,
                opt_section("Requirements", requirements.as_ref())
            ),
        }
    }
}

/// Handler routing between finance, business development, and product
pub struct StrategyTool {
    finance: Specialist,
    business_dev: Specialist,
    product: Specialist,
}

impl StrategyTool {
    /// Create the tool
    #[must_use]
    pub fn new(finance: Specialist, business_dev: Specialist, product: Specialist) -> Self {
        Self {
            finance,
            business_dev,
            product,
        }
    }

    fn specialist_for(&self, action: &StrategyAction) -> &Specialist {
        match action {
            StrategyAction::AnalyzeFinances { .. }
            | StrategyAction::CreateBudget { .. }
            | StrategyAction::ForecastFinancials { .. } => &self.finance,
            StrategyAction::IdentifyOpportunities { .. }
            | StrategyAction::DevelopPartnershipStrategy { .. }
            | StrategyAction::CreateGrowthPlan { .. } => &self.business_dev,
            StrategyAction::AnalyzeProductOpportunity { .. }
            | StrategyAction::CreateProductRoadmap { .. }
            | StrategyAction::DefineFeatureSpecs { .. } => &self.product,
        }
    }

    /// Declared parameters for registration
    #[must_use]
    pub fn parameters() -> ParameterMap {
        object(serde_json::json!({
            "action": {
                "type": "string",
                "enum": [
                    "analyze_finances", "create_budget", "forecast_financials",
                    "identify_opportunities", "develop_partnership_strategy", "create_growth_plan",
                    "analyze_product_opportunity", "create_product_roadmap", "define_feature_specs"
                ],
                "description": "Which strategy task to perform"
            },
            "params": {
                "type": "object",
                "description": "Parameters for the chosen action (financial_data, departments, total_budget, market, partner_type, current_state, target_goals, customer_problem, product_vision, feature_description, ...)"
            }
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for StrategyTool {
    async fn call(&self, arguments: Value) -> Result<Value> {
        let action: StrategyAction = serde_json::from_value(arguments)
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

    fn tool() -> StrategyTool {
        StrategyTool::new(
            specialist(&profiles::FINANCE, "finance says"),
            specialist(&profiles::BUSINESS_DEV, "bizdev says"),
            specialist(&profiles::PRODUCT, "product says"),
        )
    }

    #[tokio::test]
    async fn test_budget_routes_to_finance() {
        let result = tool()
            .call(serde_json::json!({
                "action": "create_budget",
                "params": {
                    "departments": ["engineering", "marketing"],
                    "total_budget": "$500k"
                }
            }))
            .await
            .unwrap();

        assert_eq!(result["specialist"], "Finance Advisor");
        assert_eq!(result["budget"], "finance says");
    }

    #[tokio::test]
    async fn test_roadmap_routes_to_product() {
        let result = tool()
            .call(serde_json::json!({
                "action": "create_product_roadmap",
                "params": {"product_vision": "one-click payroll"}
            }))
            .await
            .unwrap();

        assert_eq!(result["specialist"], "Product Strategist");
        assert_eq!(result["roadmap"], "product says");
    }

    #[test]
    fn test_growth_plan_prompt() {
        let action: StrategyAction = serde_json::from_value(serde_json::json!({
            "action": "create_growth_plan",
            "params": {
                "current_state": "10 customers",
                "target_goals": "100 customers",
                "timeframe": "12 months"
            }
        }))
        .unwrap();

        let prompt = action.render();
        assert!(prompt.contains("Current state: 10 customers"));
        assert!(prompt.contains("Timeframe: 12 months"));
    }
}
