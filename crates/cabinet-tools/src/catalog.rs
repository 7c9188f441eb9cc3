//! Catalog - tool registration and dispatch-by-name
//!
//! Registration happens once at startup; afterwards the catalog is shared
//! read-only between concurrent requests. The model-facing manifest is
//! built lazily and cached until the next registration.

use crate::error::Result;
use crate::record::InvocationOutcome;
use cabinet_llm::ToolDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

/// Default ceiling for a single handler execution
const DEFAULT_INVOKE_TIMEOUT: Duration = Duration::from_secs(120);

/// Mapping of parameter name to its JSON-schema fragment
///
/// Every declared parameter is required; the derived schema's `required`
/// set is exactly the key set.
pub type ParameterMap = serde_json::Map<String, serde_json::Value>;

/// Trait for tool execution handlers
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with the supplied arguments
    async fn call(&self, arguments: serde_json::Value) -> Result<serde_json::Value>;
}

/// A registered tool: contract plus handler
#[derive(Clone)]
pub struct ToolDescriptor {
    /// Unique tool name
    pub name: String,
    /// Human description shown to the model
    pub description: String,
    /// Parameter name to schema fragment
    pub parameters: ParameterMap,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    /// Derive the model-facing input schema
    #[must_use]
    pub fn input_schema(&self) -> serde_json::Value {
        let required: Vec<&str> = self.parameters.keys().map(String::as_str).collect();
        serde_json::json!({
            "type": "object",
            "properties": serde_json::Value::Object(self.parameters.clone()),
            "required": required,
        })
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(&self.name, &self.description, self.input_schema())
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("parameters", &self.parameters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Introspection entry for one registered tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Declared parameter names
    pub parameters: Vec<String>,
}

/// Registry mapping tool names to contracts and handlers
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
    manifest_cache: Mutex<Option<Arc<Vec<ToolDefinition>>>>,
    invoke_timeout: Duration,
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
            manifest_cache: Mutex::new(None),
            invoke_timeout: DEFAULT_INVOKE_TIMEOUT,
        }
    }

    /// Set the per-invocation timeout
    #[must_use]
    pub fn with_invoke_timeout(mut self, timeout: Duration) -> Self {
        self.invoke_timeout = timeout;
        self
    }

    /// Register a tool, overwriting any existing descriptor with that name
    ///
    /// Invalidates the cached manifest. Listing order follows first
    /// registration; re-registering keeps the original position.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ParameterMap,
        handler: Arc<dyn ToolHandler>,
    ) {
        let descriptor = ToolDescriptor {
            name: name.into(),
            description: description.into(),
            parameters,
            handler,
        };
        debug!(tool = %descriptor.name, "Registering tool");

        if let Some(&position) = self.index.get(&descriptor.name) {
            self.tools[position] = descriptor;
        } else {
            self.index.insert(descriptor.name.clone(), self.tools.len());
            self.tools.push(descriptor);
        }

        *self.lock_cache() = None;
    }

    /// Get a descriptor by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&position| &self.tools[position])
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Model-facing manifest of every registered tool
    ///
    /// Built once after the last registration change and reused for every
    /// turn of every request.
    #[must_use]
    pub fn manifest(&self) -> Arc<Vec<ToolDefinition>> {
        let mut cache = self.lock_cache();
        if let Some(manifest) = cache.as_ref() {
            return Arc::clone(manifest);
        }
        let manifest = Arc::new(
            self.tools
                .iter()
                .map(ToolDescriptor::definition)
                .collect::<Vec<_>>(),
        );
        *cache = Some(Arc::clone(&manifest));
        manifest
    }

    /// Introspection listing of registered capabilities
    #[must_use]
    pub fn capabilities(&self) -> Vec<Capability> {
        self.tools
            .iter()
            .map(|descriptor| Capability {
                name: descriptor.name.clone(),
                description: descriptor.description.clone(),
                parameters: descriptor.parameters.keys().cloned().collect(),
            })
            .collect()
    }

    /// Resolve and execute one invocation
    ///
    /// Never returns an error: an unknown name, a handler failure, or a
    /// timeout all become failure outcomes so the conversation can continue
    /// with the failure reported back to the model.
    #[instrument(skip(self, arguments), fields(tool = %name))]
    pub async fn invoke(&self, name: &str, arguments: serde_json::Value) -> InvocationOutcome {
        let Some(descriptor) = self.get(name) else {
            warn!(tool = %name, "Requested tool is not registered");
            return InvocationOutcome::failure(format!("Tool '{}' not found", name), 0);
        };

        let start = Instant::now();
        match timeout(self.invoke_timeout, descriptor.handler.call(arguments)).await {
            Ok(Ok(output)) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                debug!(tool = %name, duration_ms, "Tool invocation succeeded");
                InvocationOutcome::success(output, duration_ms)
            }
            Ok(Err(e)) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                warn!(tool = %name, error = %e, "Tool invocation failed");
                InvocationOutcome::failure(format!("Error: {}", e), duration_ms)
            }
            Err(_) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                warn!(tool = %name, duration_ms, "Tool invocation timed out");
                InvocationOutcome::failure(
                    format!("Tool '{}' timed out after {}ms", name, duration_ms),
                    duration_ms,
                )
            }
        }
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, Option<Arc<Vec<ToolDefinition>>>> {
        self.manifest_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ToolCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolCatalog")
            .field("tools", &self.index.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct EchoHandler;

    #[async_trait::async_trait]
    impl ToolHandler for EchoHandler {
        async fn call(&self, arguments: serde_json::Value) -> Result<serde_json::Value> {
            Ok(serde_json::json!({"echo": arguments}))
        }
    }

    struct FailingHandler;

    #[async_trait::async_trait]
    impl ToolHandler for FailingHandler {
        async fn call(&self, _arguments: serde_json::Value) -> Result<serde_json::Value> {
            Err(Error::Execution("handler exploded".to_string()))
        }
    }

    struct SlowHandler;

    #[async_trait::async_trait]
    impl ToolHandler for SlowHandler {
        async fn call(&self, _arguments: serde_json::Value) -> Result<serde_json::Value> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(serde_json::Value::Null)
        }
    }

    fn params(names: &[&str]) -> ParameterMap {
        let mut map = ParameterMap::new();
        for name in names {
            map.insert(
                (*name).to_string(),
                serde_json::json!({"type": "string"}),
            );
        }
        map
    }

    #[test]
    fn test_register_and_capabilities() {
        let mut catalog = ToolCatalog::new();
        catalog.register("a", "first", params(&["x"]), Arc::new(EchoHandler));
        catalog.register("b", "second", params(&["y", "z"]), Arc::new(EchoHandler));
        catalog.register("c", "third", params(&[]), Arc::new(EchoHandler));

        let capabilities = catalog.capabilities();
        assert_eq!(capabilities.len(), 3);
        assert_eq!(capabilities[0].name, "a");
        assert_eq!(capabilities[1].parameters, vec!["y", "z"]);
    }

    #[test]
    fn test_reregister_overwrites() {
        let mut catalog = ToolCatalog::new();
        catalog.register("a", "first", params(&["x"]), Arc::new(EchoHandler));
        catalog.register("a", "replaced", params(&["x", "y"]), Arc::new(EchoHandler));

        assert_eq!(catalog.len(), 1);
        let capability = &catalog.capabilities()[0];
        assert_eq!(capability.description, "replaced");
        assert_eq!(capability.parameters, vec!["x", "y"]);
    }

    #[test]
    fn test_input_schema_requires_all_parameters() {
        let mut catalog = ToolCatalog::new();
        catalog.register(
            "t",
            "tool",
            params(&["action", "params"]),
            Arc::new(EchoHandler),
        );

        let schema = catalog.get("t").unwrap().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], serde_json::json!(["action", "params"]));
        assert!(schema["properties"]["action"].is_object());
    }

    #[test]
    fn test_manifest_is_cached_until_registration() {
        let mut catalog = ToolCatalog::new();
        catalog.register("a", "first", params(&["x"]), Arc::new(EchoHandler));

        let first = catalog.manifest();
        let second = catalog.manifest();
        assert!(Arc::ptr_eq(&first, &second));

        catalog.register("b", "second", params(&[]), Arc::new(EchoHandler));
        let third = catalog.manifest();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(third.len(), 2);
    }

    #[test]
    fn test_invoke_unknown_tool_is_failure_not_error() {
        let catalog = ToolCatalog::new();
        let outcome = tokio_test::block_on(catalog.invoke("y", serde_json::json!({})));

        assert!(!outcome.success);
        assert!(outcome.error.as_deref().unwrap().contains("'y'"));
    }

    #[tokio::test]
    async fn test_invoke_success() {
        let mut catalog = ToolCatalog::new();
        catalog.register("echo", "echoes", params(&["v"]), Arc::new(EchoHandler));

        let outcome = catalog.invoke("echo", serde_json::json!({"v": "hi"})).await;
        assert!(outcome.success);
        assert_eq!(outcome.output["echo"]["v"], "hi");
    }

    #[tokio::test]
    async fn test_invoke_handler_failure_is_absorbed() {
        let mut catalog = ToolCatalog::new();
        catalog.register("bad", "fails", params(&[]), Arc::new(FailingHandler));

        let outcome = catalog.invoke("bad", serde_json::json!({})).await;
        assert!(!outcome.success);
        assert!(outcome.error.as_deref().unwrap().contains("handler exploded"));
    }

    #[tokio::test]
    async fn test_invoke_timeout() {
        let mut catalog = ToolCatalog::new().with_invoke_timeout(Duration::from_millis(20));
        catalog.register("slow", "sleeps", params(&[]), Arc::new(SlowHandler));

        let outcome = catalog.invoke("slow", serde_json::json!({})).await;
        assert!(!outcome.success);
        assert!(outcome.error.as_deref().unwrap().contains("timed out"));
    }
}
