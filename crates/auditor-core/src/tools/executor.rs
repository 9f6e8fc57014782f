//! Tool execution engine

use crate::tools::base::Tool;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Dispatches tool calls by name with a per-call timeout ceiling.
///
/// Concurrent calls are independent and uncoordinated; nothing here
/// mutates shared state between calls.
pub struct ToolExecutor {
    tools: HashMap<String, Arc<dyn Tool>>,
    max_execution_time: Duration,
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            max_execution_time: Duration::from_secs(300),
        }
    }

    /// Create a tool executor with a custom timeout ceiling
    pub fn with_max_execution_time(max_execution_time: Duration) -> Self {
        Self {
            tools: HashMap::new(),
            max_execution_time,
        }
    }

    /// Register a tool
    pub fn register_tool(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        self.tools.insert(name, tool);
    }

    /// Register multiple tools
    pub fn register_tools(&mut self, tools: Vec<Arc<dyn Tool>>) {
        for tool in tools {
            self.register_tool(tool);
        }
    }

    /// Get all registered tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Execute a single tool call
    pub async fn execute_tool(&self, call: &ToolCall) -> ToolResult {
        let tool = match self.tools.get(&call.name) {
            Some(tool) => tool,
            None => {
                return ToolResult::error(
                    &call.id,
                    &call.name,
                    format!("Tool '{}' not found", call.name),
                );
            }
        };

        match timeout(self.max_execution_time, tool.execute_with_timing(call)).await {
            Ok(result) => result,
            Err(_) => ToolResult::error(
                &call.id,
                &call.name,
                format!(
                    "Tool execution timed out after {:?}",
                    self.max_execution_time
                ),
            ),
        }
    }

    /// Execute multiple tool calls concurrently
    ///
    /// Every call is read-only and stateless, so no coordination is
    /// needed between them.
    pub async fn execute_tools(&self, calls: &[ToolCall]) -> Vec<ToolResult> {
        let futures: Vec<_> = calls.iter().map(|call| self.execute_tool(call)).collect();
        futures::future::join_all(futures).await
    }

    /// Get tool schemas for all registered tools
    pub fn get_tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|tool| tool.schema()).collect()
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::new()
    }
}
