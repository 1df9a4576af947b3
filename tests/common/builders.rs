//! Test builders — ergonomic constructors for records, schemas, and loaded
//! databases.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use jsearch::sources::MemorySource;
use jsearch::{Database, FieldAlias, ForeignKey, MatchMode, Record, Schema, Table, TableSchema};
use serde_json::Value;

/// Convert a `json!` object literal into a [`Record`].
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("record() expects a JSON object, got {other}"),
    }
}

/// Convert a `json!` array of objects into records.
pub fn records(value: Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items.into_iter().map(record).collect(),
        other => panic!("records() expects a JSON array, got {other}"),
    }
}

/// Build a table directly from a schema and a `json!` array.
pub fn table(schema: TableSchema, rows: Value) -> Table {
    Table::new(&schema, records(rows), MatchMode::Exact)
}

/// `local -> target.foreign` projected through `(field, alias)` pairs.
pub fn fk(local: &str, target: &str, foreign: &str, aliases: &[(&str, &str)]) -> ForeignKey {
    let key = ForeignKey::new(local, target, foreign);
    if aliases.is_empty() {
        key
    } else {
        key.project(aliases.iter().map(|(f, a)| FieldAlias::new(*f, *a)))
    }
}

// ---------------------------------------------------------------------------
// DatabaseBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for an in-memory [`Database`].
///
/// # Example
///
/// ```rust
/// let db = DatabaseBuilder::new()
///     .table(TableSchema::new("users").primary_key("_id"), json!([{"_id": "71"}]))
///     .build();
/// ```
#[derive(Default)]
pub struct DatabaseBuilder {
    schema: Schema,
    source: MemorySource,
    mode: MatchMode,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self {
            schema: Schema::new("test"),
            ..Self::default()
        }
    }

    pub fn table(mut self, schema: TableSchema, rows: Value) -> Self {
        self.source = self.source.with_table(schema.name.clone(), records(rows));
        self.schema = self.schema.table(schema);
        self
    }

    /// Declare a table whose snapshot is missing.
    pub fn missing(mut self, schema: TableSchema) -> Self {
        self.schema = self.schema.table(schema);
        self
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> Database {
        Database::load(&self.schema, &self.source, self.mode).expect("in-memory load")
    }
}
