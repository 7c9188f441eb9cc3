//! Organization group: HR, PR, and security behind one tool

use crate::groups::{bullets, object, opt_section, respond};
use crate::specialist::Specialist;
use cabinet_tools::{Error, ParameterMap, Result, ToolHandler};
use serde::Deserialize;
use serde_json::Value;

/// Tool name
pub const NAME: &str = "consult_org_pr_security";

/// Model-facing description
pub const DESCRIPTION: &str = "\
Consults the organization, communications, and security team.

Actions:
- develop_hiring_strategy, design_org_culture, create_performance_framework (HR)
- draft_press_release, create_crisis_plan, develop_media_strategy (PR)
- assess_security_posture, create_security_policy, conduct_security_audit (security)";

/// HR, PR, and security actions
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum OrganizationAction {
    /// Plan hiring
    DevelopHiringStrategy {
        /// Roles to fill
        positions: Vec<String>,
        /// Company stage and context
        #[serde(default)]
        company_context: Option<String>,
    },
    /// Shape culture
    DesignOrgCulture {
        /// Culture as it is today
        current_culture: String,
        /// Values to build toward
        #[serde(default)]
        desired_values: Option<String>,
    },
    /// Design a performance framework
    CreatePerformanceFramework {
        /// How the team is structured
        team_structure: String,
        /// What the framework should drive
        #[serde(default)]
        goals: Option<String>,
    },
    /// Draft a press release
    DraftPressRelease {
        /// The news
        news_topic: String,
        /// Messages that must land
        key_messages: String,
        /// Company boilerplate
        #[serde(default)]
        company_info: Option<String>,
    },
    /// Build a crisis communication plan
    CreateCrisisPlan {
        /// The scenario to plan for
        crisis_scenario: String,
        /// Stakeholders to address
        #[serde(default)]
        stakeholders: Option<String>,
    },
    /// Build a media strategy
    DevelopMediaStrategy {
        /// What the coverage should achieve
        objectives: String,
        /// Outlets to target
        #[serde(default)]
        target_media: Option<String>,
        /// Budget available
        #[serde(default)]
        budget: Option<String>,
    },
    /// Assess security posture
    AssessSecurityPosture {
        /// The system under assessment
        system_description: String,
        /// Controls already in place
        #[serde(default)]
        current_measures: Option<String>,
    },
    /// Write a security policy
    CreateSecurityPolicy {
        /// What the policy covers
        scope: String,
        /// Requirements it must satisfy
        #[serde(default)]
        requirements: Option<String>,
    },
    /// Run a security audit
    ConductSecurityAudit {
        /// What to audit
        audit_scope: String,
        /// Standards to audit against
        #[serde(default)]
        standards: Option<String>,
    },
}

impl OrganizationAction {
    fn field(&self) -> &'static str {
        match self {
            Self::DevelopHiringStrategy { .. } => "strategy",
            Self::DesignOrgCulture { .. } => "culture",
            Self::CreatePerformanceFramework { .. } => "framework",
            Self::DraftPressRelease { .. } => "press_release",
            Self::CreateCrisisPlan { .. } => "plan",
            Self::DevelopMediaStrategy { .. } => "strategy",
            Self::AssessSecurityPosture { .. } => "assessment",
            Self::CreateSecurityPolicy { .. } => "policy",
            Self::ConductSecurityAudit { .. } => "audit",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::DevelopHiringStrategy {
                positions,
                company_context,
            } => format!(
                "Plan hiring for these roles:\n{}{}\n\n\
                 Provide sequencing, sourcing channels per role, and what to\n\
                 screen for at this stage of the company.",
                bullets(positions),
                opt_section("Company context", company_context.as_ref())
            ),
            Self::DesignOrgCulture {
                current_culture,
                desired_values,
            } => format!(
                "Design organizational culture.\n\nToday: {}{}\n\n\
                 Identify the gap, the behaviors to reward, and concrete\n\
                 rituals or policies that produce them.",
                current_culture,
                opt_section("Desired values", desired_values.as_ref())
            ),
            Self::CreatePerformanceFramework {
                team_structure,
                goals,
            } => format!(
                "Design a performance framework.\n\nTeam structure: {}{}\n\n\
                 Keep it light enough to actually run: cadence, criteria,\n\
                 and how feedback turns into action.",
                team_structure,
                opt_section("Goals", goals.as_ref())
            ),
            Self::DraftPressRelease {
                news_topic,
                key_messages,
                company_info,
            } => format!(
                "Draft a press release.\n\nNews: {}\nKey messages: {}{}\n\n\
                 Standard wire format: headline, dateline, lede with the one\n\
                 message, supporting quotes, boilerplate.",
                news_topic,
                key_messages,
                opt_section("Company info", company_info.as_ref())
            ),
            Self::CreateCrisisPlan {
                crisis_scenario,
                stakeholders,
            } => format!(
                "Build a crisis communication plan for: {}{}\n\n\
                 Cover the first-hour response, holding statements per\n\
                 stakeholder, and the acknowledge/own/act sequence.",
                crisis_scenario,
                opt_section("Stakeholders", stakeholders.as_ref())
            ),
            Self::DevelopMediaStrategy {
                objectives,
                target_media,
                budget,
            } => format!(
                "Develop a media strategy.\n\nObjectives: {}{}{}\n\n\
                 Match outlets to the audience, propose story angles, and\n\
                 define what success looks like.",
                objectives,
                opt_section("Target media", target_media.as_ref()),
                opt_section("Budget", budget.as_ref())
            ),
            Self::AssessSecurityPosture {
                system_description,
                current_measures,
            } => format!(
                "Assess the security posture of this system:\n\n{}{}\n\n\
                 Rank findings by exploitability and impact; map every\n\
                 recommended control to the threat it mitigates.",
                system_description,
                opt_section("Current measures", current_measures.as_ref())
            ),
            Self::CreateSecurityPolicy {
                scope,
                requirements,
            } => format!(
                "Write a security policy.\n\nScope: {}{}\n\n\
                 Make it enforceable: concrete rules, ownership, and the\n\
                 exceptions process.",
                scope,
                opt_section("Requirements", requirements.as_ref())
            ),
            Self::ConductSecurityAudit {
                audit_scope,
                standards,
            } => format!(
                "Conduct a security audit.\n\nScope: {}{}\n\n\
                 Report findings by control area with severity, evidence\n\
                 expected, and remediation steps.",
                audit_scope,
                opt_section("Standards", standards.as_ref())
            ),
        }
    }
}

/// Handler routing between HR, PR, and security
pub struct OrganizationTool {
    hr: Specialist,
    pr: Specialist,
    security: Specialist,
}

impl OrganizationTool {
    /// Create the tool
    #[must_use]
    pub fn new(hr: Specialist, pr: Specialist, security: Specialist) -> Self {
        Self { hr, pr, security }
    }

    fn specialist_for(&self, action: &OrganizationAction) -> &Specialist {
        match action {
            OrganizationAction::DevelopHiringStrategy { .. }
            | OrganizationAction::DesignOrgCulture { .. }
            | OrganizationAction::CreatePerformanceFramework { .. } => &self.hr,
            OrganizationAction::DraftPressRelease { .. }
            | OrganizationAction::CreateCrisisPlan { .. }
            | OrganizationAction::DevelopMediaStrategy { .. } => &self.pr,
            OrganizationAction::AssessSecurityPosture { .. }
            | OrganizationAction::CreateSecurityPolicy { .. }
            | OrganizationAction::ConductSecurityAudit { .. } => &self.security,
        }
    }

    /// Declared parameters for registration
    #[must_use]
    pub fn parameters() -> ParameterMap {
        object(serde_json::json!({
            "action": {
                "type": "string",
                "enum": [
                    "develop_hiring_strategy", "design_org_culture", "create_performance_framework",
                    "draft_press_release", "create_crisis_plan", "develop_media_strategy",
                    "assess_security_posture", "create_security_policy", "conduct_security_audit"
                ],
                "description": "Which HR, PR, or security task to perform"
            },
            "params": {
                "type": "object",
                "description": "Parameters for the chosen action (positions, current_culture, team_structure, news_topic, key_messages, crisis_scenario, objectives, system_description, scope, audit_scope, ...)"
            }
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for OrganizationTool {
    async fn call(&self, arguments: Value) -> Result<Value> {
        let action: OrganizationAction = serde_json::from_value(arguments)
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

    fn tool() -> OrganizationTool {
        OrganizationTool::new(
            specialist(&profiles::HR, "hr says"),
            specialist(&profiles::PR, "pr says"),
            specialist(&profiles::SECURITY, "security says"),
        )
    }

    #[tokio::test]
    async fn test_press_release_routes_to_pr() {
        let result = tool()
            .call(serde_json::json!({
                "action": "draft_press_release",
                "params": {"news_topic": "series A", "key_messages": "growth, team"}
            }))
            .await
            .unwrap();

        assert_eq!(result["specialist"], "PR & Communications Lead");
        assert_eq!(result["press_release"], "pr says");
    }

    #[tokio::test]
    async fn test_audit_routes_to_security() {
        let result = tool()
            .call(serde_json::json!({
                "action": "conduct_security_audit",
                "params": {"audit_scope": "API surface", "standards": "SOC 2"}
            }))
            .await
            .unwrap();

        assert_eq!(result["specialist"], "Security Advisor");
        assert_eq!(result["audit"], "security says");
    }

    #[test]
    fn test_parse_hiring_strategy() {
        let action: OrganizationAction = serde_json::from_value(serde_json::json!({
            "action": "develop_hiring_strategy",
            "params": {"positions": ["backend engineer", "designer"]}
        }))
        .unwrap();
        assert!(action.render().contains("- backend engineer"));
    }
}
