//! Payload types crossing the tool boundary
//!
//! Everything here serializes to the plain shapes the hosting transport
//! hands to the calling agent: records stay field-for-field what the
//! backing store returned, and failures are values, never faults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One document or row, as a field-name-to-value mapping.
///
/// Records pass through the system unmodified: no renaming, no type
/// coercion, no field filtering beyond the reserved-prefix exclusion
/// applied during schema inference.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Field-name-to-type-label mapping inferred from one sampled record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredSchema {
    /// Container the sample was taken from
    pub container: String,
    /// Field name to type label (`"string"`, `"integer"`, ...)
    pub fields: BTreeMap<String, String>,
}

/// Outcome of schema inference for one container.
///
/// An empty container is a valid state, not an error, so it gets its own
/// notice shape rather than an error value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaReport {
    /// Inferred fields: `{"container": ..., "fields": {...}}`
    Fields(InferredSchema),
    /// Empty-container notice: `{"message": "..."}`
    Empty { message: String },
}

impl SchemaReport {
    /// Whether this report is the empty-container notice.
    pub fn is_empty_notice(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Outcome of a query: all rows materialized, or a single error value.
///
/// There is no partial-success representation. The error string carries
/// the store-type prefix (`"CosmosDB Error: ..."` / `"Database Error:
/// ..."`) so the calling agent can tell which backing store failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    /// Result rows, in store order
    Rows(Vec<Record>),
    /// Tagged, human-readable failure message
    Error(String),
}

impl QueryOutcome {
    /// Whether this outcome is a failure value.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The result rows, if the query succeeded.
    pub fn rows(&self) -> Option<&[Record]> {
        match self {
            Self::Rows(rows) => Some(rows),
            Self::Error(_) => None,
        }
    }
}
