//! Query execution tool

use auditor_core::gateway::QueryGateway;
use auditor_core::record::QueryOutcome;
use auditor_core::store::StoreAdapter;
use auditor_core::tools::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Executes a caller-supplied read-only query.
///
/// Only `SELECT` queries should be sent; nothing here enforces that.
/// Store failures are encoded in the payload as a tagged string
/// (`"CosmosDB Error: ..."` / `"Database Error: ..."`), so the call
/// itself always completes.
pub struct QueryDataTool {
    gateway: QueryGateway,
}

impl QueryDataTool {
    pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
        Self {
            gateway: QueryGateway::new(store),
        }
    }
}

#[async_trait]
impl Tool for QueryDataTool {
    fn name(&self) -> &str {
        "query_data"
    }

    fn description(&self) -> &str {
        "Executes a read-only SQL query. Only 'SELECT' queries are allowed."
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            self.name(),
            self.description(),
            vec![
                ToolParameter::optional_string(
                    "container_name",
                    "Name of the container to execute the query in (document store only)",
                ),
                ToolParameter::string("query", "Query to execute"),
            ],
        )
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        call.get_string("query")
            .map(|_| ())
            .ok_or_else(|| ToolError::InvalidArguments("'query' is required".to_string()))
    }

    fn is_read_only(&self) -> bool {
        true
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let query = call
            .get_string("query")
            .ok_or_else(|| ToolError::InvalidArguments("'query' is required".to_string()))?;
        let container = call.get_string("container_name");

        let outcome = self.gateway.query(container.as_deref(), &query).await;
        let result = match outcome {
            QueryOutcome::Rows(rows) => {
                debug!(rows = rows.len(), "query returned rows");
                let count = rows.len() as u64;
                ToolResult::success(&call.id, self.name(), serde_json::to_string(&rows)?)
                    .with_metadata("rows", count)
            }
            // Failure travels in the payload; the call still completes.
            QueryOutcome::Error(message) => {
                ToolResult::success(&call.id, self.name(), message)
            }
        };
        Ok(result)
    }
}
