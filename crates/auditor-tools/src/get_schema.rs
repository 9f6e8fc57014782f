//! Schema inference tool

use auditor_core::schema;
use auditor_core::store::StoreAdapter;
use auditor_core::tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Infers a container's field names and types from one sampled record.
///
/// A failing store does not fail the tool call: the payload carries an
/// `{"error": ...}` mapping instead, mirroring the schema/notice shapes.
pub struct GetSchemaTool {
    store: Arc<dyn StoreAdapter>,
}

impl GetSchemaTool {
    pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for GetSchemaTool {
    fn name(&self) -> &str {
        "get_schema"
    }

    fn description(&self) -> &str {
        "Returns the field names and data types of a container, inferred from one sampled record"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![ToolParameter::string(
                "container_name",
                "Name of the container to get the schema of",
            )],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.get_string("container_name")
            .map(|_| ())
            .ok_or_else(|| ToolError::InvalidArguments("'container_name' is required".to_string()))
    }

    fn is_read_only(&self) -> bool {
        true
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let container = call
            .get_string("container_name")
            .ok_or_else(|| ToolError::InvalidArguments("'container_name' is required".to_string()))?;

        let payload = match schema::schema_report(self.store.as_ref(), &container).await {
            Ok(report) => serde_json::to_value(&report)?,
            Err(err) => {
                debug!(container, %err, "schema inference failed");
                json!({ "error": err.store_message() })
            }
        };

        let output = serde_json::to_string(&payload)?;
        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("container", container))
    }
}
