//! Tool registry for managing available tools
//!
//! Instance-scoped: a host constructs one registry per configured store
//! and passes it where needed. There is no process-global registry.

use crate::tools::base::Tool;
use crate::tools::types::ToolSchema;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping tool names to implementations
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Register multiple tools
    pub fn register_all(&mut self, tools: Vec<Arc<dyn Tool>>) {
        for tool in tools {
            self.register(tool);
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all tools
    pub fn all_tools(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.values().cloned().collect()
    }

    /// Get schemas for all registered tools
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|tool| tool.schema()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::base::ToolError;
    use crate::tools::types::{ToolCall, ToolResult};
    use async_trait::async_trait;

    struct NamedTool(&'static str);

    #[async_trait]
    impl Tool for NamedTool {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test tool"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new(self.0, "test tool", Vec::new())
        }

        async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(&call.id, self.name(), ""))
        }
    }

    #[test]
    fn registers_and_looks_up_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register_all(vec![
            Arc::new(NamedTool("list_collections")),
            Arc::new(NamedTool("get_schema")),
        ]);

        assert!(registry.has_tool("get_schema"));
        assert!(!registry.has_tool("query_data"));
        assert_eq!(registry.get("list_collections").unwrap().name(), "list_collections");
        assert_eq!(registry.schemas().len(), 2);
        assert_eq!(registry.all_tools().len(), 2);
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("get_schema")));
        registry.register(Arc::new(NamedTool("get_schema")));
        assert_eq!(registry.tool_names(), vec!["get_schema"]);
    }
}
