//! SQLite adapter over a local relational file
//!
//! Opens a fresh connection per call and lets it close on drop. Default
//! autocommit, no pooling; fine for the low-throughput tool-call pattern
//! this serves.

use crate::error::{AuditorError, AuditorResult};
use crate::record::Record;
use crate::store::{StoreAdapter, StoreKind};
use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Relational adapter backed by a single SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> AuditorResult<Connection> {
        Connection::open(&self.path)
            .map_err(|e| AuditorError::store(StoreKind::Sqlite, e.to_string()))
    }

    fn run_query_blocking(&self, query: &str) -> AuditorResult<Vec<Record>> {
        let conn = self.open()?;
        let mut stmt = conn
            .prepare(query)
            .map_err(|e| AuditorError::store(StoreKind::Sqlite, e.to_string()))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut rows = stmt
            .query([])
            .map_err(|e| AuditorError::store(StoreKind::Sqlite, e.to_string()))?;
        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| AuditorError::store(StoreKind::Sqlite, e.to_string()))?
        {
            let mut record = Record::new();
            for (idx, name) in columns.iter().enumerate() {
                let value = row
                    .get_ref(idx)
                    .map_err(|e| AuditorError::store(StoreKind::Sqlite, e.to_string()))?;
                record.insert(name.clone(), sqlite_value_to_json(value));
            }
            records.push(record);
        }
        Ok(records)
    }
}

/// Quote an identifier for interpolation into SQL text.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn sqlite_value_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::from(v),
        ValueRef::Real(v) => Value::from(v),
        ValueRef::Text(v) => Value::String(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(v) => Value::Array(v.iter().map(|b| Value::from(*b)).collect()),
    }
}

#[async_trait]
impl StoreAdapter for SqliteStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Sqlite
    }

    async fn list_containers(&self) -> AuditorResult<Vec<String>> {
        debug!(path = %self.path.display(), "listing tables");
        let records = self.run_query_blocking(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )?;
        Ok(records
            .into_iter()
            .filter_map(|mut r| match r.remove("name") {
                Some(Value::String(name)) => Some(name),
                _ => None,
            })
            .collect())
    }

    async fn fetch_sample(&self, container: &str) -> AuditorResult<Option<Record>> {
        // First row in storage order; which row that is carries no guarantee.
        let query = format!("SELECT * FROM {} LIMIT 1", quote_ident(container));
        let records = self.run_query_blocking(&query)?;
        Ok(records.into_iter().next())
    }

    async fn run_query(
        &self,
        _container: Option<&str>,
        query: &str,
    ) -> AuditorResult<Vec<Record>> {
        debug!(query, "executing SQLite query");
        self.run_query_blocking(query)
    }
}
