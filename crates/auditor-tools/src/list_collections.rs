//! List collections tool

use auditor_core::store::StoreAdapter;
use auditor_core::tools::{Tool, ToolCall, ToolError, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Enumerates the container/table names known to the configured store.
pub struct ListCollectionsTool {
    store: Arc<dyn StoreAdapter>,
}

impl ListCollectionsTool {
    pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ListCollectionsTool {
    fn name(&self) -> &str {
        "list_collections"
    }

    fn description(&self) -> &str {
        "Returns the list of available collections/tables in the configured store"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.name(), self.description(), Vec::new())
    }

    fn is_read_only(&self) -> bool {
        true
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let names = self
            .store
            .list_containers()
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        debug!(count = names.len(), "listed collections");

        let output = serde_json::to_string(&names)?;
        Ok(ToolResult::success(&call.id, self.name(), output)
            .with_metadata("count", names.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditor_core::error::{AuditorError, AuditorResult};
    use auditor_core::record::Record;
    use auditor_core::store::StoreKind;
    use std::collections::HashMap;

    struct FixedStore(Vec<&'static str>);

    #[async_trait]
    impl StoreAdapter for FixedStore {
        fn kind(&self) -> StoreKind {
            StoreKind::Cosmos
        }

        async fn list_containers(&self) -> AuditorResult<Vec<String>> {
            if self.0.is_empty() {
                return Err(AuditorError::store(StoreKind::Cosmos, "unreachable"));
            }
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }

        async fn fetch_sample(&self, _container: &str) -> AuditorResult<Option<Record>> {
            Ok(None)
        }

        async fn run_query(
            &self,
            _container: Option<&str>,
            _query: &str,
        ) -> AuditorResult<Vec<Record>> {
            Ok(Vec::new())
        }
    }

    fn call() -> ToolCall {
        ToolCall::new("call-1", "list_collections", HashMap::new())
    }

    #[tokio::test]
    async fn lists_exactly_the_present_containers() {
        let tool = ListCollectionsTool::new(Arc::new(FixedStore(vec!["users", "customers"])));
        let result = tool.execute_with_timing(&call()).await;
        assert!(result.success);
        let names: Vec<String> = serde_json::from_str(&result.output.unwrap()).unwrap();
        assert_eq!(names, vec!["users", "customers"]);
        assert_eq!(result.metadata["count"], serde_json::json!(2));
    }

    #[tokio::test]
    async fn store_failure_becomes_error_result() {
        let tool = ListCollectionsTool::new(Arc::new(FixedStore(Vec::new())));
        let result = tool.execute_with_timing(&call()).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("CosmosDB Error"));
    }
}
