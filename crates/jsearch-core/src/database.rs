//! The database: every loaded [`Table`] by entity name, and the single
//! search entry point that performs lookup followed by enrichment.
//!
//! A `Database` is built once by [`Database::load`] and is read-only from then
//! on. It holds no interior mutability, so a shared `&Database` can serve any
//! number of concurrent readers.

use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::source::RecordSource;
use crate::table::{Relation, Table};
use crate::types::{MatchMode, Projection, Record};
use std::collections::{HashMap, HashSet};

/// One searchable field of a table, as reported by
/// [`Database::searchable_fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub indexed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Database {
    name: String,
    tables: HashMap<String, Table>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: HashMap::new(),
        }
    }

    /// Build every table declared in `schema` from `source`.
    ///
    /// Loading is best-effort per table: a table whose snapshot is missing is
    /// logged and left out, and any later reference to it fails with
    /// [`Error::TableNotFound`]. Any other source failure aborts the load.
    /// Foreign-key targets are not checked here; they are resolved by name on
    /// each search.
    pub fn load(schema: &Schema, source: &impl RecordSource, mode: MatchMode) -> Result<Self> {
        let mut db = Self::new(schema.name.clone());
        for table_schema in &schema.tables {
            tracing::info!(table = %table_schema.name, "loading table");
            match source.read(table_schema) {
                Ok(records) => {
                    let table = Table::new(table_schema, records, mode);
                    tracing::info!(table = %table.name(), records = table.len(), "table loaded");
                    db.insert(table);
                }
                Err(err) if err.is_missing() => {
                    tracing::warn!(table = %table_schema.name, error = %err, "skipping table");
                }
                Err(err) => {
                    tracing::error!(table = %table_schema.name, error = %err, "load failed");
                    return Err(err.into());
                }
            }
        }
        Ok(db)
    }

    /// Add (or replace) a table.
    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name().to_string(), table);
    }

    pub fn fetch_table(&self, entity: &str) -> Result<&Table> {
        self.tables
            .get(entity)
            .ok_or_else(|| Error::TableNotFound(entity.to_string()))
    }

    /// Find records of `entity` whose `field` equals `value`, then attach the
    /// results of each relationship the table declares.
    ///
    /// Every relationship target is resolved before any join runs, so a
    /// relationship pointing at a table that failed to load surfaces as
    /// [`Error::TableNotFound`], even when the lookup itself found nothing.
    pub fn search(&self, entity: &str, field: &str, value: &str) -> Result<Vec<Record>> {
        tracing::debug!(entity, field, value, "searching");
        let table = self.fetch_table(entity)?;
        let found = table.search(field, value, &Projection::All);

        if table.foreign_keys().is_empty() {
            return Ok(found);
        }

        let mut relations = Vec::with_capacity(table.foreign_keys().len());
        for key in table.foreign_keys() {
            relations.push(Relation {
                key,
                target: self.fetch_table(&key.target)?,
            });
        }

        Ok(table.join(found, &relations))
    }

    /// Loaded entity names, sorted.
    pub fn entities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every field name that appears on at least one record of `entity`, in
    /// first-seen order, followed by indexed fields that no record carries.
    pub fn searchable_fields(&self, entity: &str) -> Result<Vec<FieldInfo>> {
        let table = self.fetch_table(entity)?;
        let mut seen: HashSet<&str> = HashSet::new();
        let mut fields: Vec<FieldInfo> = Vec::new();
        let names = table
            .records()
            .iter()
            .flat_map(|r| r.keys().map(String::as_str))
            .chain(table.indexed_fields());
        for name in names {
            if !seen.insert(name) {
                continue;
            }
            fields.push(FieldInfo {
                name: name.to_string(),
                indexed: table.index(name).is_some(),
            });
        }
        Ok(fields)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
