//! A single entity collection: records in load order, their indexes, and the
//! relationships declared out of it.
//!
//! Records are never reordered or modified after [`Table::new`], so index
//! positions stay valid for the table's lifetime. Search results are owned
//! copies; enriching them never touches the stored records.

use crate::index::Index;
use crate::schema::{ForeignKey, TableSchema};
use crate::types::{value_key, MatchMode, Projection, Record};
use serde_json::Value;
use std::collections::HashMap;

/// A declared relationship paired with its resolved target table.
#[derive(Debug, Clone, Copy)]
pub struct Relation<'a> {
    pub key: &'a ForeignKey,
    pub target: &'a Table,
}

#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    primary_key: Option<String>,
    index_fields: Vec<String>,
    foreign_keys: Vec<ForeignKey>,
    records: Vec<Record>,
    indexes: HashMap<String, Index>,
    mode: MatchMode,
}

impl Table {
    /// Construct a table from its declaration and records, and build its
    /// indexes.
    pub fn new(schema: &TableSchema, records: Vec<Record>, mode: MatchMode) -> Self {
        let mut table = Self {
            name: schema.name.clone(),
            primary_key: schema.primary_key_field().map(str::to_string),
            index_fields: schema.index.clone(),
            foreign_keys: schema.foreign_keys.clone(),
            records,
            indexes: HashMap::new(),
            mode,
        };
        table.build_indexes();
        table
    }

    /// Build one index per distinct field in `{primary_key} ∪ index_fields`.
    /// Re-invoking replaces the existing indexes.
    pub fn build_indexes(&mut self) {
        let mut indexes = HashMap::new();
        let fields = self.primary_key.iter().chain(self.index_fields.iter());
        for field in fields {
            if indexes.contains_key(field) {
                continue;
            }
            let index = Index::build(&self.records, field, self.mode);
            tracing::info!(
                table = %self.name,
                field = %field,
                keys = index.key_count(),
                "built index"
            );
            indexes.insert(field.clone(), index);
        }
        self.indexes = indexes;
    }

    /// Records whose `field` equals `value`, projected.
    ///
    /// An index on `field` is authoritative: a key it does not hold yields no
    /// results, without falling back to a scan. Fields with no index are
    /// scanned. Searching for the empty string matches records where the field
    /// is absent, `null`, or `""`; since absent values are never indexed that
    /// lookup always scans.
    pub fn search(&self, field: &str, value: &str, projection: &Projection) -> Vec<Record> {
        let index = self.indexes.get(field).filter(|_| !value.is_empty());
        let matched: Vec<&Record> = match index {
            Some(index) => {
                tracing::debug!(table = %self.name, field, value, "index search");
                index
                    .lookup(value)
                    .unwrap_or_default()
                    .iter()
                    .map(|&position| &self.records[position])
                    .collect()
            }
            None => {
                tracing::debug!(table = %self.name, field, value, "sequential scan");
                self.scan(field, value).collect()
            }
        };

        tracing::debug!(table = %self.name, field, value, matches = matched.len(), "search complete");
        matched.into_iter().map(|r| projection.apply(r)).collect()
    }

    fn scan<'a>(&'a self, field: &'a str, value: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records
            .iter()
            .filter(move |record| match record.get(field).and_then(value_key) {
                Some(candidate) => self.mode.matches(&candidate, value),
                None => value.is_empty(),
            })
    }

    /// Enrich `records` with the results of each relationship.
    ///
    /// A record without `local_field` (or with it `null`) gets no key for that
    /// relationship; a record whose lookup finds nothing gets an empty list.
    /// Relationships are evaluated independently, and joined records are not
    /// themselves joined any further.
    pub fn join(&self, mut records: Vec<Record>, relations: &[Relation<'_>]) -> Vec<Record> {
        for record in records.iter_mut() {
            for relation in relations {
                let Some(value) = record.get(&relation.key.local_field).and_then(value_key) else {
                    continue;
                };
                let joined = relation.target.search(
                    &relation.key.foreign_field,
                    &value,
                    &relation.key.projection,
                );
                tracing::debug!(
                    table = %self.name,
                    target = %relation.target.name,
                    key = relation.key.output_key(),
                    matches = joined.len(),
                    "joined relationship"
                );
                record.insert(
                    relation.key.output_key().to_string(),
                    Value::Array(joined.into_iter().map(Value::Object).collect()),
                );
            }
        }
        records
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn index(&self, field: &str) -> Option<&Index> {
        self.indexes.get(field)
    }

    /// Indexed field names, sorted.
    pub fn indexed_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.indexes.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
