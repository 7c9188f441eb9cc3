//! Specialist - a prompt template bound to a model

use cabinet_llm::{Message, MessageRequest, ModelBackend, SystemBlock};
use cabinet_skills::PluginLoader;
use cabinet_tools::{Error, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Which model a specialist runs on
///
/// Light specialists (drafting, summarizing) run on the cheaper model;
/// analysis-heavy specialists run on the standard one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Cheap, fast model
    Light,
    /// Standard model
    Standard,
}

/// Declarative definition of one specialist
#[derive(Debug, Clone, Copy)]
pub struct SpecialistProfile {
    /// Stable key (also the plugin name convention)
    pub key: &'static str,
    /// Display name used in tool results
    pub title: &'static str,
    /// Base system prompt
    pub prompt: &'static str,
    /// Model tier
    pub tier: ModelTier,
    /// Plugins whose skills are appended to the prompt
    pub plugins: &'static [&'static str],
}

/// A specialist ready to consult: resolved prompt, model, and backend
pub struct Specialist {
    key: &'static str,
    title: &'static str,
    system_prompt: String,
    model: String,
    max_tokens: u32,
    backend: Arc<dyn ModelBackend>,
}

impl Specialist {
    /// Build a specialist from its profile
    ///
    /// Plugin skills are loaded once here and appended to the base prompt
    /// under a "Best Practices" heading.
    #[must_use]
    pub fn from_profile(
        profile: &SpecialistProfile,
        backend: Arc<dyn ModelBackend>,
        config: &crate::roster::TeamConfig,
        loader: &PluginLoader,
    ) -> Self {
        let skills = loader.combined_skills(profile.plugins, None);
        let system_prompt = if skills.is_empty() {
            profile.prompt.to_string()
        } else {
            format!("{}\n\n# Best Practices\n\n{}", profile.prompt, skills)
        };

        let model = match profile.tier {
            ModelTier::Light => config.light_model.clone(),
            ModelTier::Standard => config.model.clone(),
        };

        Self {
            key: profile.key,
            title: profile.title,
            system_prompt,
            model,
            max_tokens: config.max_tokens,
            backend,
        }
    }

    /// Stable key
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Display name
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// The resolved system prompt
    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Send one rendered prompt to the specialist's model
    ///
    /// The system prompt is sent as a cacheable block so repeated consults
    /// of the same specialist hit the prompt cache.
    #[instrument(skip(self, prompt), fields(specialist = self.key, model = %self.model))]
    pub async fn consult(&self, prompt: String) -> Result<String> {
        debug!(chars = prompt.len(), "Consulting specialist");

        let request = MessageRequest::new(self.model.clone(), self.max_tokens)
            .with_system(vec![SystemBlock::cached(self.system_prompt.clone())])
            .with_messages(vec![Message::user(prompt)]);

        let response = self
            .backend
            .create_message(request)
            .await
            .map_err(|e| Error::Execution(e.to_string()))?;

        Ok(response.text())
    }
}

impl std::fmt::Debug for Specialist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Specialist")
            .field("key", &self.key)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::TeamConfig;
    use cabinet_llm::{ContentBlock, ModelResponse, StopReason};

    struct CannedBackend;

    #[async_trait::async_trait]
    impl ModelBackend for CannedBackend {
        fn name(&self) -> &str {
            "canned"
        }

        fn default_model(&self) -> &str {
            "test-model"
        }

        async fn create_message(
            &self,
            request: MessageRequest,
        ) -> cabinet_llm::Result<ModelResponse> {
            assert!(!request.system.is_empty());
            assert!(request.system[0].cache_control.is_some());
            Ok(ModelResponse {
                id: "msg_1".to_string(),
                model: request.model,
                content: vec![ContentBlock::Text {
                    text: "advice".to_string(),
                }],
                stop_reason: Some(StopReason::EndTurn),
                usage: None,
            })
        }
    }

    const PROFILE: SpecialistProfile = SpecialistProfile {
        key: "research",
        title: "Research Specialist",
        prompt: "You are a research specialist.",
        tier: ModelTier::Standard,
        plugins: &[],
    };

    #[tokio::test]
    async fn test_consult_uses_cached_system_prompt() {
        let loader = PluginLoader::new("does-not-exist");
        let specialist = Specialist::from_profile(
            &PROFILE,
            Arc::new(CannedBackend),
            &TeamConfig::default(),
            &loader,
        );

        let answer = specialist.consult("What is up?".to_string()).await.unwrap();
        assert_eq!(answer, "advice");
        assert_eq!(specialist.system_prompt(), "You are a research specialist.");
    }

    #[test]
    fn test_tier_selects_model() {
        let loader = PluginLoader::new("does-not-exist");
        let config = TeamConfig {
            model: "heavy".to_string(),
            light_model: "light".to_string(),
            max_tokens: 100,
        };

        let light_profile = SpecialistProfile {
            tier: ModelTier::Light,
            ..PROFILE
        };
        let light =
            Specialist::from_profile(&light_profile, Arc::new(CannedBackend), &config, &loader);
        assert!(format!("{:?}", light).contains("light"));

        let heavy = Specialist::from_profile(&PROFILE, Arc::new(CannedBackend), &config, &loader);
        assert!(format!("{:?}", heavy).contains("heavy"));
    }
}
