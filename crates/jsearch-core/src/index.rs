//! Exact-match index over one field of a table.
//!
//! Maps the string form of a field value to the positions of every record
//! holding it, in first-seen order.
//!
//! ```text
//! records: [{"_id": "71"}, {"_id": "52"}, {"_id": "52"}, {}]
//! index:   {"71": [0], "52": [1, 2]}
//! ```
//!
//! Records where the field is absent (or `null`) are never indexed, so a
//! lookup for "no value" cannot be answered here.

use crate::types::{value_key, MatchMode, Record};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Index {
    mode: MatchMode,
    references: HashMap<String, Vec<usize>>,
}

impl Index {
    /// Build the index for `field` over `records`. Positions are indices
    /// into `records`.
    pub fn build(records: &[Record], field: &str, mode: MatchMode) -> Self {
        let mut references: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            let Some(key) = record.get(field).and_then(value_key) else {
                continue;
            };
            references.entry(mode.fold(&key)).or_default().push(position);
        }
        Self { mode, references }
    }

    /// Positions holding `key`, or `None` when no record has that value.
    /// A present key always maps to a non-empty list.
    pub fn lookup(&self, key: &str) -> Option<&[usize]> {
        match self.mode {
            MatchMode::Exact => self.references.get(key),
            MatchMode::CaseInsensitive => self.references.get(&self.mode.fold(key)),
        }
        .map(Vec::as_slice)
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.references.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
