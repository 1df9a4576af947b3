//! In-memory source — fixed records per table, for tests and embedding.

use jsearch_core::{Record, RecordSource, SourceError, TableSchema};
use serde_json::Value;
use std::collections::HashMap;

/// Serves records from memory. Tables that were never added are reported as
/// [`SourceError::Missing`], exactly like an absent snapshot file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<String, Vec<Record>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.tables.insert(name.into(), records);
        self
    }

    /// Add a table from a JSON array of objects. Non-object elements are
    /// dropped.
    pub fn with_json(self, name: impl Into<String>, array: Value) -> Self {
        let records = match array {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(record) => Some(record),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        self.with_table(name, records)
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<Record>> {
        self.tables.remove(name)
    }
}

impl RecordSource for MemorySource {
    fn read(&self, table: &TableSchema) -> Result<Vec<Record>, SourceError> {
        self.tables
            .get(&table.name)
            .cloned()
            .ok_or_else(|| SourceError::Missing {
                table: table.name.clone(),
                path: table.file_name().into(),
            })
    }
}
