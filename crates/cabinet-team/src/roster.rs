//! Roster - builds the specialists and registers the grouped tools

use crate::groups::{
    engineering, legal, operations, organization, productivity, research, strategy, writing,
    EngineeringTool, LegalTool, OperationsTool, OrganizationTool, ProductivityTool, ResearchTool,
    StrategyTool, WritingTool,
};
use crate::profiles;
use crate::specialist::{Specialist, SpecialistProfile};
use cabinet_llm::{ModelBackend, DEFAULT_LIGHT_MODEL, DEFAULT_MODEL};
use cabinet_skills::PluginLoader;
use cabinet_tools::ToolCatalog;
use std::sync::Arc;
use tracing::info;

/// Models and limits shared by every specialist
#[derive(Debug, Clone)]
pub struct TeamConfig {
    /// Model for analysis-heavy specialists
    pub model: String,
    /// Model for light specialists
    pub light_model: String,
    /// Output token ceiling per consult
    pub max_tokens: u32,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            light_model: DEFAULT_LIGHT_MODEL.to_string(),
            max_tokens: 2000,
        }
    }
}

/// Build every specialist and register the eight grouped tools
///
/// The caller owns the catalog and the backend; nothing here is global.
pub fn register_team(
    catalog: &mut ToolCatalog,
    backend: Arc<dyn ModelBackend>,
    config: &TeamConfig,
    loader: &PluginLoader,
) {
    let build = |profile: &SpecialistProfile| {
        Specialist::from_profile(profile, Arc::clone(&backend), config, loader)
    };

    catalog.register(
        productivity::NAME,
        productivity::DESCRIPTION,
        ProductivityTool::parameters(),
        Arc::new(ProductivityTool::new(build(&profiles::PRODUCTIVITY))),
    );

    catalog.register(
        research::NAME,
        research::DESCRIPTION,
        ResearchTool::parameters(),
        Arc::new(ResearchTool::new(build(&profiles::RESEARCH))),
    );

    catalog.register(
        writing::NAME,
        writing::DESCRIPTION,
        WritingTool::parameters(),
        Arc::new(WritingTool::new(build(&profiles::WRITING))),
    );

    catalog.register(
        legal::NAME,
        legal::DESCRIPTION,
        LegalTool::parameters(),
        Arc::new(LegalTool::new(
            build(&profiles::LEGAL),
            build(&profiles::COMPLIANCE),
        )),
    );

    catalog.register(
        strategy::NAME,
        strategy::DESCRIPTION,
        StrategyTool::parameters(),
        Arc::new(StrategyTool::new(
            build(&profiles::FINANCE),
            build(&profiles::BUSINESS_DEV),
            build(&profiles::PRODUCT),
        )),
    );

    catalog.register(
        engineering::NAME,
        engineering::DESCRIPTION,
        EngineeringTool::parameters(),
        Arc::new(EngineeringTool::new(
            build(&profiles::DEVELOPMENT),
            build(&profiles::DESIGN),
        )),
    );

    catalog.register(
        organization::NAME,
        organization::DESCRIPTION,
        OrganizationTool::parameters(),
        Arc::new(OrganizationTool::new(
            build(&profiles::HR),
            build(&profiles::PR),
            build(&profiles::SECURITY),
        )),
    );

    catalog.register(
        operations::NAME,
        operations::DESCRIPTION,
        OperationsTool::parameters(),
        Arc::new(OperationsTool::new(
            build(&profiles::DATA),
            build(&profiles::MARKETING),
            build(&profiles::SALES),
        )),
    );

    info!(
        tools = catalog.len(),
        specialists = profiles::ALL.len(),
        "Team registered"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::testing::CannedBackend;

    #[test]
    fn test_register_team_registers_all_groups() {
        let mut catalog = ToolCatalog::new();
        let loader = PluginLoader::new("does-not-exist");
        register_team(
            &mut catalog,
            Arc::new(CannedBackend("ok")),
            &TeamConfig::default(),
            &loader,
        );

        assert_eq!(catalog.len(), 8);
        for name in [
            "manage_productivity",
            "perform_research",
            "perform_writing",
            "consult_legal_team",
            "consult_business_strategy",
            "consult_tech_creative",
            "consult_org_pr_security",
            "consult_extended_ops",
        ] {
            assert!(catalog.has(name), "missing tool {}", name);
        }

        // Every grouped tool declares action + params, both required
        let manifest = catalog.manifest();
        for definition in manifest.iter() {
            assert_eq!(
                definition.input_schema["required"],
                serde_json::json!(["action", "params"])
            );
        }
    }
}
