//! Dispatcher - the turn-bounded tool-use loop
//!
//! One `process` call owns its conversation and call trace; the backend
//! and the catalog are shared read-only. The loop is strictly sequential:
//! one model call per iteration, tool invocations executed in request
//! order, and the whole batch of results returned in a single user turn.

use crate::config::{DispatchRequest, DispatcherConfig};
use crate::conversation::Conversation;
use crate::error::Result;
use crate::result::DispatchResult;
use cabinet_llm::{
    ContentBlock, Message, MessageRequest, ModelBackend, StopReason, SystemBlock,
};
use cabinet_tools::{Capability, CallTrace, InvocationRecord, ToolCatalog};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Drives tool-use conversations to completion within an iteration budget
pub struct Dispatcher {
    backend: Arc<dyn ModelBackend>,
    catalog: Arc<ToolCatalog>,
    config: DispatcherConfig,
}

impl Dispatcher {
    /// Create a dispatcher
    #[must_use]
    pub fn new(
        backend: Arc<dyn ModelBackend>,
        catalog: Arc<ToolCatalog>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            backend,
            catalog,
            config,
        }
    }

    /// Create with default configuration
    #[must_use]
    pub fn with_defaults(backend: Arc<dyn ModelBackend>, catalog: Arc<ToolCatalog>) -> Self {
        Self::new(backend, catalog, DispatcherConfig::default())
    }

    /// The configuration
    #[must_use]
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Introspection listing of the registered tools
    #[must_use]
    pub fn list_capabilities(&self) -> Vec<Capability> {
        self.catalog.capabilities()
    }

    /// Drive one request to a terminal state
    ///
    /// Tool-level failures are folded into the conversation; only backend
    /// transport and protocol errors return `Err`.
    #[instrument(skip(self, request), fields(request_id = tracing::field::Empty))]
    pub async fn process(&self, request: DispatchRequest) -> Result<DispatchResult> {
        let request_id = Uuid::new_v4();
        tracing::Span::current().record("request_id", tracing::field::display(request_id));

        let started = Instant::now();
        let max_iterations = request.max_iterations.unwrap_or(self.config.max_iterations);

        let mut seed = request.message.clone();
        if let Some(context) = &request.context {
            let rendered = serde_json::to_string_pretty(context)?;
            seed.push_str("\n\n**Additional context:**\n");
            seed.push_str(&rendered);
        }

        let mut conversation = Conversation::new(Message::user(seed));
        let mut call_trace: CallTrace = Vec::new();
        let mut iterations = 0;

        // The manifest is stable for the life of the request; fetch once.
        let manifest = self.catalog.manifest();
        let system = vec![SystemBlock::cached(self.config.system_prompt.clone())];
        let model = self
            .config
            .model
            .clone()
            .unwrap_or_else(|| self.backend.default_model().to_string());

        info!(
            max_iterations,
            tools = manifest.len(),
            "Starting dispatch"
        );

        while iterations < max_iterations {
            iterations += 1;

            if let Some(deadline) = self.config.deadline {
                if started.elapsed() >= deadline {
                    warn!(iterations, "Deadline elapsed before resolution");
                    return Ok(DispatchResult::deadline_exceeded(call_trace, iterations));
                }
            }

            conversation.trim_to(self.config.history_limit);

            let mut payload = MessageRequest::new(model.clone(), self.config.max_tokens)
                .with_system(system.clone())
                .with_messages(conversation.turns().to_vec())
                .with_tools(manifest.as_ref().clone());
            if let Some(temperature) = self.config.temperature {
                payload = payload.with_temperature(temperature);
            }

            debug!(iteration = iterations, turns = conversation.len(), "Calling model");
            let response = self.backend.create_message(payload).await?;

            match response.stop_reason {
                Some(StopReason::EndTurn) => {
                    let answer = response.text();
                    info!(
                        iterations,
                        tools_used = call_trace.len(),
                        "Dispatch answered"
                    );
                    return Ok(DispatchResult::answered(answer, call_trace, iterations));
                }
                Some(StopReason::ToolUse) => {
                    let blocks = response.content;
                    conversation.push(Message::assistant_blocks(blocks.clone()));

                    let mut result_blocks = Vec::with_capacity(blocks.len());
                    for block in &blocks {
                        let ContentBlock::ToolUse { id, name, input } = block else {
                            continue;
                        };

                        info!(tool = %name, "Executing tool");
                        let outcome = self.catalog.invoke(name, input.clone()).await;
                        call_trace.push(InvocationRecord::from_outcome(
                            name.as_str(),
                            input.clone(),
                            &outcome,
                        ));

                        result_blocks.push(if outcome.success {
                            ContentBlock::ToolResult {
                                tool_use_id: id.clone(),
                                content: serde_json::to_string(&outcome.output)
                                    .unwrap_or_else(|_| "{}".to_string()),
                                is_error: None,
                            }
                        } else {
                            ContentBlock::ToolResult {
                                tool_use_id: id.clone(),
                                content: outcome
                                    .error
                                    .unwrap_or_else(|| "tool execution failed".to_string()),
                                is_error: Some(true),
                            }
                        });
                    }

                    // One user turn carries the whole batch of results; the
                    // request/response pairing requires them together.
                    conversation.push(Message::user_blocks(result_blocks));
                }
                other => {
                    let reason = other
                        .as_ref()
                        .map_or("none", StopReason::as_str);
                    warn!(stop_reason = reason, "Unexpected stop condition");
                    return Ok(DispatchResult::unexpected_stop(
                        reason, call_trace, iterations,
                    ));
                }
            }
        }

        warn!(iterations, "Max iterations reached without a final answer");
        Ok(DispatchResult::exhausted(call_trace, iterations))
    }
}
