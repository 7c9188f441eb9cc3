//! Engineering group: development lead and design lead behind one tool

use crate::groups::{object, opt_section, respond};
use crate::specialist::Specialist;
use cabinet_tools::{Error, ParameterMap, Result, ToolHandler};
use serde::Deserialize;
use serde_json::Value;

/// Tool name
pub const NAME: &str = "consult_tech_creative";

/// Model-facing description
pub const DESCRIPTION: &str = "\
Consults the technical and creative team.

Actions:
- design_architecture, review_technical_design, plan_development_process (development)
- review_ux_ui, create_brand_guidelines, design_system_audit (design)";

/// Development and design actions
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum EngineeringAction {
    /// Design system architecture
    DesignArchitecture {
        /// What the product must do
        product_requirements: String,
        /// Constraints to respect
        #[serde(default)]
        constraints: Option<String>,
    },
    /// Review a technical design
    ReviewTechnicalDesign {
        /// The design document
        design_document: String,
        /// Aspects to focus on
        #[serde(default)]
        focus: Option<String>,
    },
    /// Plan the delivery process
    PlanDevelopmentProcess {
        /// Team size
        team_size: String,
        /// Scope of the project
        project_scope: String,
        /// Timeline, if fixed
        #[serde(default)]
        timeline: Option<String>,
    },
    /// Review UX/UI
    ReviewUxUi {
        /// The product or flow under review
        product_description: String,
        /// Known issues to weigh in on
        #[serde(default)]
        issues: Option<String>,
    },
    /// Build brand guidelines
    CreateBrandGuidelines {
        /// Brand background
        brand_info: String,
        /// Audience the brand speaks to
        #[serde(default)]
        target_audience: Option<String>,
    },
    /// Audit a design system
    DesignSystemAudit {
        /// The current system
        current_system: String,
        /// Goals of the audit
        #[serde(default)]
        goals: Option<String>,
    },
}

impl EngineeringAction {
    fn field(&self) -> &'static str {
        match self {
            Self::DesignArchitecture { .. } => "architecture",
            Self::ReviewTechnicalDesign { .. } => "review",
            Self::PlanDevelopmentProcess { .. } => "plan",
            Self::ReviewUxUi { .. } => "review",
            Self::CreateBrandGuidelines { .. } => "guidelines",
            Self::DesignSystemAudit { .. } => "audit",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::DesignArchitecture {
                product_requirements,
                constraints,
            } => format!(
                "Design a system architecture.\n\nRequirements: {}{}\n\n\
                 Cover components and their responsibilities, data flow,\n\
                 technology choices with justification, and the failure\n\
                 modes of the design.",
                product_requirements,
                opt_section("Constraints", constraints.as_ref())
            ),
            Self::ReviewTechnicalDesign {
                design_document,
                focus,
            } => format!(
                "Review this technical design.{}\n\n{}\n\n\
                 Call out risks, missing cases, and simpler alternatives,\n\
                 each tied to the section it concerns.",
                opt_section("Focus", focus.as_ref()),
                design_document
            ),
            Self::PlanDevelopmentProcess {
                team_size,
                project_scope,
                timeline,
            } => format!(
                "Plan the delivery process.\n\nTeam size: {}\nScope: {}{}\n\n\
                 Provide milestones with owners, the critical path, and the\n\
                 risks most likely to slip the schedule.",
                team_size,
                project_scope,
                opt_section("Timeline", timeline.as_ref())
            ),
            Self::ReviewUxUi {
                product_description,
                issues,
            } => format!(
                "Review the UX/UI of: {}{}\n\n\
                 For each finding name the user task it affects, the\n\
                 severity, and a concrete fix.",
                product_description,
                opt_section("Known issues", issues.as_ref())
            ),
            Self::CreateBrandGuidelines {
                brand_info,
                target_audience,
            } => format!(
                "Create brand guidelines.\n\nBrand: {}{}\n\n\
                 Cover voice and tone, visual direction, usage rules, and\n\
                 examples a non-designer can apply.",
                brand_info,
                opt_section("Target audience", target_audience.as_ref())
            ),
            Self::DesignSystemAudit {
                current_system,
                goals,
            } => format!(
                "Audit this design system.{}\n\nCurrent system: {}\n\n\
                 Report inconsistencies, gaps, and a prioritized cleanup\n\
                 plan.",
                opt_section("Goals", goals.as_ref()),
                current_system
            ),
        }
    }
}

/// Handler routing between the development and design leads
pub struct EngineeringTool {
    development: Specialist,
    design: Specialist,
}

impl EngineeringTool {
    /// Create the tool
    #[must_use]
    pub fn new(development: Specialist, design: Specialist) -> Self {
        Self {
            development,
            design,
        }
    }

    fn specialist_for(&self, action: &EngineeringAction) -> &Specialist {
        match action {
            EngineeringAction::DesignArchitecture { .. }
            | EngineeringAction::ReviewTechnicalDesign { .. }
            | EngineeringAction::PlanDevelopmentProcess { .. } => &self.development,
            EngineeringAction::ReviewUxUi { .. }
            | EngineeringAction::CreateBrandGuidelines { .. }
            | EngineeringAction::DesignSystemAudit { .. } => &self.design,
        }
    }

    /// Declared parameters for registration
    #[must_use]
    pub fn parameters() -> ParameterMap {
        object(serde_json::json!({
            "action": {
                "type": "string",
                "enum": [
                    "design_architecture", "review_technical_design", "plan_development_process",
                    "review_ux_ui", "create_brand_guidelines", "design_system_audit"
                ],
                "description": "Which technical or design task to perform"
            },
            "params": {
                "type": "object",
                "description": "Parameters for the chosen action (product_requirements, design_document, team_size, project_scope, product_description, brand_info, current_system, ...)"
            }
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for EngineeringTool {
    async fn call(&self, arguments: Value) -> Result<Value> {
        let action: EngineeringAction = serde_json::from_value(arguments)
            .map_err(|e| Error::InvalidInput(format!("{}: {}", NAME, e)))?;
        let specialist = self.specialist_for(&action);
        let field = action.field();
        let text = specialist.consult(action.render()).await?;
        Ok(respond(specialist, field, text))
    }
}
