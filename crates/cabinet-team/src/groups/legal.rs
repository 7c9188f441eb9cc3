//! Legal group: legal counsel and compliance officer behind one tool

use crate::groups::{bullets, object, opt_section, respond};
use crate::specialist::Specialist;
use cabinet_tools::{Error, ParameterMap, Result, ToolHandler};
use serde::Deserialize;
use serde_json::Value;

/// Tool name
pub const NAME: &str = "consult_legal_team";

/// Model-facing description
pub const DESCRIPTION: &str = "\
Consults the legal and compliance team.

Actions:
- review_contract: review a contract
- provide_legal_advice: legal guidance for a situation
- assess_compliance: assess a practice against regulations
- monitor_compliance: status across compliance areas
- create_compliance_report: periodic compliance report
- identify_risks: risks in a business process";

/// Legal and compliance actions
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum LegalAction {
    /// Review a contract
    ReviewContract {
        /// Contract text
        contract_text: String,
        /// Clauses or concerns to focus on
        #[serde(default)]
        focus: Option<String>,
    },
    /// Legal guidance for a situation
    ProvideLegalAdvice {
        /// The situation
        situation: String,
        /// Specific questions
        #[serde(default)]
        questions: Option<String>,
    },
    /// Assess a practice against regulations
    AssessCompliance {
        /// The business practice
        business_practice: String,
        /// Regulations to assess against
        #[serde(default)]
        regulations: Option<String>,
    },
    /// Status across compliance areas
    MonitorCompliance {
        /// Areas to report on
        areas: Vec<String>,
    },
    /// Periodic compliance report
    CreateComplianceReport {
        /// Reporting period
        period: String,
        /// Areas to emphasize
        #[serde(default)]
        focus_areas: Option<Vec<String>>,
    },
    /// Risks in a business process
    IdentifyRisks {
        /// The process to examine
        business_process: String,
    },
}

impl LegalAction {
    fn field(&self) -> &'static str {
        match self {
            Self::ReviewContract { .. } => "review",
            Self::ProvideLegalAdvice { .. } => "advice",
            Self::AssessCompliance { .. } => "assessment",
            Self::MonitorCompliance { .. } => "status",
            Self::CreateComplianceReport { .. } => "report",
            Self::IdentifyRisks { .. } => "risks",
        }
    }

    fn render(&self) -> String {
        match self {
            Self::ReviewContract {
                contract_text,
                focus,
            } => format!(
                "Review the following contract.{}\n\n{}\n\n\
                 Provide:\n\
                 1. Obligations and liabilities by party\n\
                 2. Clauses that are risky or unusual, quoted\n\
                 3. Negotiable points versus hard blockers\n\
                 4. A recommendation",
                opt_section("Focus", focus.as_ref()),
                contract_text
            ),
            Self::ProvideLegalAdvice {
                situation,
                questions,
            } => format!(
                "Situation: {}{}\n\n\
                 Provide practical legal guidance: applicable rules, exposure,\n\
                 and recommended next steps. Note where retained counsel is\n\
                 warranted.",
                situation,
                opt_section("Questions", questions.as_ref())
            ),
            Self::AssessCompliance {
                business_practice,
                regulations,
            } => format!(
                "Assess this business practice for compliance.{}\n\n\
                 Practice: {}\n\n\
                 Provide the obligations that apply, where the practice\n\
                 meets or violates them, and the smallest change that\n\
                 restores compliance.",
                opt_section("Regulations", regulations.as_ref()),
                business_practice
            ),
            Self::MonitorCompliance { areas } => format!(
                "Report compliance status for the following areas:\n{}\n\n\
                 For each area provide: current obligations, status,\n\
                 outstanding items, and deadlines.",
                bullets(areas)
            ),
            Self::CreateComplianceReport {
                period,
                focus_areas,
            } => {
                let focus = match focus_areas {
                    Some(areas) if !areas.is_empty() => {
                        format!("\nFocus areas:\n{}", bullets(areas))
                    }
                    _ => String::new(),
                };
                format!(
                    "Write a compliance report for the period: {}{}\n\n\
                     Include a status summary, incidents, remediations, and\n\
                     items due next period.",
                    period, focus
                )
            }
            Self::IdentifyRisks { business_process } => format!(
                "Identify compliance and legal risks in this process:\n\n{}\n\n\
                 Rank findings by severity and likelihood, and pair each\n\
                 with a mitigation.",
                business_process
            ),
        }
    }
}

/// Handler routing between legal counsel and the compliance officer
pub struct LegalTool {
    legal: Specialist,
    compliance: Specialist,
}

impl LegalTool {
    /// Create the tool
    #[must_use]
    pub fn new(legal: Specialist, compliance: Specialist) -> Self {
        Self { legal, compliance }
    }

    fn specialist_for(&self, action: &LegalAction) -> &Specialist {
        match action {
            LegalAction::ReviewContract { .. }
            | LegalAction::ProvideLegalAdvice { .. }
            | LegalAction::AssessCompliance { .. } => &self.legal,
            LegalAction::MonitorCompliance { .. }
            | LegalAction::CreateComplianceReport { .. }
            | LegalAction::IdentifyRisks { .. } => &self.compliance,
        }
    }

    /// Declared parameters for registration
    #[must_use]
    pub fn parameters() -> ParameterMap {
        object(serde_json::json!({
            "action": {
                "type": "string",
                "enum": [
                    "review_contract", "provide_legal_advice", "assess_compliance",
                    "monitor_compliance", "create_compliance_report", "identify_risks"
                ],
                "description": "Which legal or compliance task to perform"
            },
            "params": {
                "type": "object",
                "description": "Parameters for the chosen action (contract_text, situation, questions, business_practice, areas, period, business_process, ...)"
            }
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for LegalTool {
    async fn call(&self, arguments: Value) -> Result<Value> {
        let action: LegalAction = serde_json::from_value(arguments)
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

    fn tool() -> LegalTool {
        LegalTool::new(
            specialist(&profiles::LEGAL, "legal says"),
            specialist(&profiles::COMPLIANCE, "compliance says"),
        )
    }

    #[tokio::test]
    async fn test_contract_review_routes_to_legal() {
        let result = tool()
            .call(serde_json::json!({
                "action": "review_contract",
                "params": {"contract_text": "Party A shall..."}
            }))
            .await
            .unwrap();

        assert_eq!(result["specialist"], "Legal Counsel");
        assert_eq!(result["review"], "legal says");
    }

    #[tokio::test]
    async fn test_risk_identification_routes_to_compliance() {
        let result = tool()
            .call(serde_json::json!({
                "action": "identify_risks",
                "params": {"business_process": "manual invoice approval"}
            }))
            .await
            .unwrap();

        assert_eq!(result["specialist"], "Compliance Officer");
        assert_eq!(result["risks"], "compliance says");
    }

    #[test]
    fn test_parse_monitor_compliance() {
        let action: LegalAction = serde_json::from_value(serde_json::json!({
            "action": "monitor_compliance",
            "params": {"areas": ["privacy", "tax"]}
        }))
        .unwrap();
        assert!(action.render().contains("- privacy"));
    }
}
