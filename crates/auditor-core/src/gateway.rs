//! Query gateway
//!
//! The outermost boundary between the backing store and the tool
//! surface: every store-level failure stops here and becomes a tagged
//! error value. Each call is one stateless request/response cycle with
//! exactly two outcomes.

use crate::record::QueryOutcome;
use crate::store::StoreAdapter;
use std::sync::Arc;
use tracing::{debug, warn};

/// Forwards caller-supplied queries to the store adapter and converts
/// any failure into a [`QueryOutcome::Error`].
///
/// No retries, no timeouts, no query classification; the gateway trusts
/// the caller's claim that the query is read-only.
#[derive(Clone)]
pub struct QueryGateway {
    store: Arc<dyn StoreAdapter>,
}

impl QueryGateway {
    pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn StoreAdapter> {
        &self.store
    }

    /// Execute `query` and materialize the result.
    ///
    /// Never propagates a store failure: the error message, prefixed
    /// with the store type, is the return value.
    pub async fn query(&self, container: Option<&str>, query: &str) -> QueryOutcome {
        match self.store.run_query(container, query).await {
            Ok(rows) => {
                debug!(rows = rows.len(), "query succeeded");
                QueryOutcome::Rows(rows)
            }
            Err(err) => {
                let message = format!(
                    "{}: {}",
                    self.store.kind().error_prefix(),
                    err.store_message()
                );
                warn!(%message, "query failed");
                QueryOutcome::Error(message)
            }
        }
    }
}
