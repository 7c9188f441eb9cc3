//! Dispatcher configuration and request input

use crate::conversation::DEFAULT_HISTORY_LIMIT;
use std::time::Duration;

/// Default iteration ceiling for interactive requests
///
/// Batch entry points pass a larger ceiling through
/// [`DispatchRequest::with_max_iterations`].
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Fixed instructions for the dispatcher model
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are the user's executive assistant and the leader of a team of
domain specialists. You manage the experts and combine their work to meet
the user's business needs.

**Core operations team:**
- Productivity: task management, scheduling, note organization
- Research: market research, competitor analysis, trends
- Writing: email, documents, summaries, translation

**Extended operations team:**
- Data: analysis, visualization planning, insights
- Marketing: content, campaign planning, performance analysis
- Sales: strategy, pipeline management, proposals

**Strategic advisory team:**
- Legal & Compliance: contract review, legal guidance, compliance
- Finance, BizDev, Product: financial, growth, and product strategy
- Tech & Design: architecture, technical review, UX/UI, brand
- HR, PR, Security: organization, communications, security policy

**How you work:**
1. Analyze the request and pick the right team
2. Simple requests use one team; complex ones combine several
3. Integrate the results into one finished answer

**Principles:**
- Business goals first, practical solutions
- Clear, concrete deliverables
- Respond in the language the user writes in

You are a capable, trustworthy business partner.";

/// Input for one dispatch
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    /// The user's message
    pub message: String,
    /// Optional structured context appended to the first turn
    pub context: Option<serde_json::Value>,
    /// Override for the iteration ceiling
    pub max_iterations: Option<usize>,
}

impl DispatchRequest {
    /// Create a request
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            max_iterations: None,
        }
    }

    /// Attach structured context
    #[must_use]
    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Override the iteration ceiling
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// Configuration for the dispatcher
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Fixed system instructions, sent as a cacheable block every turn
    pub system_prompt: String,
    /// Model override; backend default when unset
    pub model: Option<String>,
    /// Output token ceiling per model call
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Default iteration ceiling
    pub max_iterations: usize,
    /// Conversation turn-count ceiling for history trimming
    pub history_limit: usize,
    /// Whole-request deadline, checked at each loop top when set
    pub deadline: Option<Duration>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            model: None,
            max_tokens: 4096,
            temperature: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            deadline: None,
        }
    }
}

impl DispatcherConfig {
    /// Create a configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the system prompt
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the output token ceiling
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the iteration ceiling
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the history ceiling
    #[must_use]
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    /// Set a whole-request deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = DispatchRequest::new("write a plan")
            .with_context(serde_json::json!({"company": "Acme"}))
            .with_max_iterations(20);

        assert_eq!(request.message, "write a plan");
        assert_eq!(request.max_iterations, Some(20));
        assert!(request.context.is_some());
    }

    #[test]
    fn test_config_defaults() {
        let config = DispatcherConfig::default();
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.history_limit, 20);
        assert!(config.deadline.is_none());
        assert!(config.model.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = DispatcherConfig::new()
            .with_max_iterations(10)
            .with_history_limit(30)
            .with_temperature(0.3);

        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.history_limit, 30);
        assert_eq!(config.temperature, Some(0.3));
    }
}
