//! Data Auditor Tools
//!
//! The three agent-facing operations, each implemented as a [`Tool`]
//! over an injected store adapter:
//!
//! - `list_collections`: enumerate container/table names
//! - `get_schema`: infer a container's schema from one sampled record
//! - `query_data`: execute a caller-supplied read-only query

pub mod get_schema;
pub mod list_collections;
pub mod query_data;

pub use get_schema::GetSchemaTool;
pub use list_collections::ListCollectionsTool;
pub use query_data::QueryDataTool;

use auditor_core::store::StoreAdapter;
use auditor_core::tools::Tool;
use std::sync::Arc;

/// All data-access tools, bound to one store adapter
pub fn data_tools(store: Arc<dyn StoreAdapter>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(ListCollectionsTool::new(store.clone())),
        Arc::new(GetSchemaTool::new(store.clone())),
        Arc::new(QueryDataTool::new(store)),
    ]
}
