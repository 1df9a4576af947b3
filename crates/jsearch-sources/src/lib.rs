//! jsearch-sources — record source adapters for jsearch.
//!
//! Each source turns a table declaration into decoded
//! [`Record`](jsearch_core::Record)s for
//! [`Database::load`](jsearch_core::Database::load).

pub mod dir;
pub mod memory;

pub use dir::JsonDirSource;
pub use memory::MemorySource;

use jsearch_core::{Record, SourceError};
use serde_json::Value;

/// Decode a snapshot document (a JSON array of objects) into records.
///
/// Array elements that are not objects are skipped with a warning.
pub fn decode_records(table: &str, bytes: &[u8]) -> Result<Vec<Record>, SourceError> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|source| SourceError::Malformed {
            table: table.to_string(),
            source,
        })?;

    let Value::Array(items) = document else {
        return Err(SourceError::NotAnArray {
            table: table.to_string(),
        });
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match item {
            Value::Object(record) => Some(record),
            other => {
                tracing::warn!(table, position, kind = %kind(&other), "skipping non-object record");
                None
            }
        })
        .collect())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
