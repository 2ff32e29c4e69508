use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::AiorzeaError;

/// Name, description and argument schema, as handed to a function-calling model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the argument object.
    pub parameters: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }
}

/// A callable tool with a name, a description and a JSON-in/JSON-out invocation.
#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> &ToolDefinition;

    /// Runs the tool. `args` is the argument object produced by the caller.
    async fn execute(&self, args: Value) -> Result<Value, AiorzeaError>;
}

/// Registered tools, kept in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, replacing any tool with the same name in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.definition().name.clone();
        debug!(tool = %name, "Registering tool");
        match self
            .tools
            .iter_mut()
            .find(|t| t.definition().name == name)
        {
            Some(slot) => *slot = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|t| t.definition().name == name)
            .cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools
            .iter()
            .map(|t| t.definition().name.as_str())
            .collect()
    }

    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Runs the named tool and renders its output as a JSON string, the form
    /// a chat agent receives tool results in.
    pub async fn invoke(&self, name: &str, args: Value) -> Result<String, AiorzeaError> {
        let tool = self
            .get(name)
            .ok_or_else(|| AiorzeaError::InvalidInput(format!("Unknown tool: {}", name)))?;
        debug!(tool = %name, "Invoking tool");
        let output = tool.execute(args).await?;
        Ok(serde_json::to_string(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo(ToolDefinition);

    impl Echo {
        fn named(name: &str, description: &str) -> Arc<dyn Tool> {
            Arc::new(Self(ToolDefinition::new(name, description)))
        }
    }

    #[async_trait]
    impl Tool for Echo {
        fn definition(&self) -> &ToolDefinition {
            &self.0
        }

        async fn execute(&self, args: Value) -> Result<Value, AiorzeaError> {
            Ok(json!({ "tool": self.0.description, "args": args }))
        }
    }

    #[tokio::test]
    async fn invoke_renders_output_as_json_string() {
        let mut registry = ToolRegistry::new();
        registry.register(Echo::named("echo", "first"));

        let out = registry.invoke("echo", json!({"x": 1})).await.unwrap();
        assert_eq!(out, r#"{"args":{"x":1},"tool":"first"}"#);
    }

    #[tokio::test]
    async fn unknown_tool_is_invalid_input() {
        let registry = ToolRegistry::new();
        let err = registry.invoke("missing", json!({})).await.unwrap_err();
        assert!(matches!(err, AiorzeaError::InvalidInput(_)));
        assert!(err.to_string().contains("Unknown tool: missing"));
    }

    #[test]
    fn registration_order_is_kept_and_duplicates_replace() {
        let mut registry = ToolRegistry::new();
        registry.register(Echo::named("b", "one"));
        registry.register(Echo::named("a", "two"));
        registry.register(Echo::named("b", "three"));

        assert_eq!(registry.names(), vec!["b", "a"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("b").unwrap().definition().description, "three");
    }

    #[test]
    fn default_parameters_are_an_empty_object_schema() {
        let def = ToolDefinition::new("noop", "does nothing");
        assert_eq!(def.parameters["type"], "object");
        assert!(def.parameters["properties"].as_object().unwrap().is_empty());
    }
}
