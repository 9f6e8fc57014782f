//! Base trait and error type for tools

use crate::error::AuditorError;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::Instant;

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ToolError> for AuditorError {
    fn from(err: ToolError) -> Self {
        AuditorError::tool("unknown", err.to_string())
    }
}

/// Base trait for all tools
///
/// A tool is one callable operation the hosting transport exposes to the
/// agent. Each tool carries a JSON schema for its parameters and returns
/// a serializable result; store failures are encoded in the result
/// payload, never raised across this boundary.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (lowercase with underscores)
    fn name(&self) -> &str;

    /// Description shown to the calling agent
    fn description(&self) -> &str;

    /// JSON schema for the tool's input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate the tool call arguments before execution
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Whether this tool only reads data (every tool here does)
    fn is_read_only(&self) -> bool {
        false
    }

    /// Execute with validation, timing, and error-to-result conversion
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let start_time = Instant::now();

        if let Err(err) = self.validate(call) {
            return ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64);
        }

        match self.execute(call).await {
            Ok(mut result) => {
                result.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
                result
            }
            Err(err) => ToolResult::error(&call.id, self.name(), err.to_string())
                .with_execution_time(start_time.elapsed().as_millis() as u64),
        }
    }
}
