//! Store adapters for the two interchangeable backing stores
//!
//! Each adapter is a thin pass-through: no query rewriting, no retries,
//! no pagination. Keeping the adapters this thin preserves exact
//! backing-store semantics and keeps the two variants substitutable
//! behind the same three operations.

pub mod cosmos;
pub mod sqlite;

pub use cosmos::{CosmosStore, EnvTokenCredential, TokenCredential};
pub use sqlite::SqliteStore;

use crate::config::{StoreBackend, StoreConfig};
use crate::error::{AuditorError, AuditorResult};
use crate::record::Record;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Identifies which backing store an adapter talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Cloud document database (Azure Cosmos DB)
    Cosmos,
    /// Local relational file (SQLite)
    Sqlite,
}

impl StoreKind {
    /// Prefix for error messages surfaced to the calling agent.
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Self::Cosmos => "CosmosDB Error",
            Self::Sqlite => "Database Error",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cosmos => write!(f, "CosmosDB"),
            Self::Sqlite => write!(f, "SQLite"),
        }
    }
}

/// The three primitive operations every backing store exposes.
///
/// Adapters are constructed explicitly and injected into the tools that
/// need them; nothing here is process-global.
#[async_trait]
pub trait StoreAdapter: Send + Sync {
    /// Which backing store this adapter talks to
    fn kind(&self) -> StoreKind;

    /// Enumerate container/table names known to the store.
    ///
    /// Returns the full set in one call; there is no pagination.
    async fn list_containers(&self) -> AuditorResult<Vec<String>>;

    /// Fetch one representative record from the named container.
    ///
    /// Returns `None` when the container holds zero records. Which
    /// record is returned is store-dependent; callers must not rely on
    /// it being any particular one.
    async fn fetch_sample(&self, container: &str) -> AuditorResult<Option<Record>>;

    /// Execute the caller-supplied query text verbatim and materialize
    /// all resulting rows.
    ///
    /// No query-text validation happens here; sending read-only text is
    /// the caller's contract. The relational variant names its tables in
    /// the query itself and ignores `container`.
    async fn run_query(&self, container: Option<&str>, query: &str)
        -> AuditorResult<Vec<Record>>;
}

/// Build the adapter for the configured backing store.
pub fn connect(config: &StoreConfig) -> AuditorResult<Arc<dyn StoreAdapter>> {
    match config.backend {
        StoreBackend::Cosmos => {
            let cosmos = config
                .cosmos
                .as_ref()
                .ok_or_else(|| AuditorError::config("Cosmos backend selected without settings"))?;
            Ok(Arc::new(CosmosStore::new(cosmos)?))
        }
        StoreBackend::Sqlite => Ok(Arc::new(SqliteStore::new(&config.sqlite_path))),
    }
}
