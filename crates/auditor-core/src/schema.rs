//! Single-sample schema inference
//!
//! Types are derived from exactly one sampled record. A field that is
//! absent from the sample, or carries a different type in other records,
//! is simply not reflected — a documented approximation, not a defect.

use crate::error::AuditorResult;
use crate::record::{InferredSchema, Record, SchemaReport};
use crate::store::StoreAdapter;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Notice returned for containers that hold zero records.
pub const EMPTY_CONTAINER_MESSAGE: &str = "Container is empty; no schema found.";

/// Fields starting with this prefix are store-internal bookkeeping
/// (`_rid`, `_ts`, ...) and are excluded from inference.
const RESERVED_PREFIX: char = '_';

/// Type label for one runtime value.
pub fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Derive the schema of one sampled record.
pub fn infer_from_sample(container: &str, sample: &Record) -> InferredSchema {
    let fields: BTreeMap<String, String> = sample
        .iter()
        .filter(|(name, _)| !name.starts_with(RESERVED_PREFIX))
        .map(|(name, value)| (name.clone(), type_label(value).to_string()))
        .collect();
    InferredSchema {
        container: container.to_string(),
        fields,
    }
}

/// Infer the schema of a container by sampling one record from the store.
pub async fn schema_report(
    store: &dyn StoreAdapter,
    container: &str,
) -> AuditorResult<SchemaReport> {
    match store.fetch_sample(container).await? {
        None => {
            debug!(container, "container is empty");
            Ok(SchemaReport::Empty {
                message: EMPTY_CONTAINER_MESSAGE.to_string(),
            })
        }
        Some(sample) => Ok(SchemaReport::Fields(infer_from_sample(container, &sample))),
    }
}
