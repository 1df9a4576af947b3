//! Core types for jsearch-core.
//!
//! This module defines the data shapes shared by every layer: the loaded
//! [`Record`], the string form used for exact matching ([`value_key`]), the
//! [`MatchMode`] comparison policy, and the [`Projection`] applied to joined
//! records.

use serde::Deserialize;
use serde_json::Value;

/// One loaded entity instance.
///
/// Field order follows the snapshot file. Values are scalars or lists of
/// scalars when loaded; enrichment adds lists of records under relationship
/// keys.
pub type Record = serde_json::Map<String, Value>;

/// Normalise a field value to the string form used for index keys and scan
/// comparisons.
///
/// Strings are used verbatim, numbers and booleans use their JSON text, and
/// arrays/objects use compact JSON. `null` has no string form and is treated
/// exactly like an absent field.
pub fn value_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// How a stringified field value is compared against a query value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Case-sensitive string equality.
    #[default]
    Exact,
    /// Both sides are lower-cased before comparison.
    CaseInsensitive,
}

impl MatchMode {
    /// Fold a key into its comparable form under this mode.
    pub fn fold(self, key: &str) -> String {
        match self {
            MatchMode::Exact => key.to_string(),
            MatchMode::CaseInsensitive => key.to_lowercase(),
        }
    }

    pub fn matches(self, candidate: &str, query: &str) -> bool {
        match self {
            MatchMode::Exact => candidate == query,
            MatchMode::CaseInsensitive => candidate.to_lowercase() == query.to_lowercase(),
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::CaseInsensitive => write!(f, "case-insensitive"),
        }
    }
}

/// A single `{ field, alias }` projection rule: emit `field` renamed to `alias`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldAlias {
    pub field: String,
    pub alias: String,
}

impl FieldAlias {
    pub fn new(field: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            alias: alias.into(),
        }
    }
}

/// Which fields of a matched record are emitted, and under what names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Projection {
    /// Emit the full record.
    #[default]
    All,
    /// Emit only the listed fields, in list order, renamed to their alias.
    /// Fields absent on the record are omitted rather than emitted as null.
    Fields(Vec<FieldAlias>),
}

impl Projection {
    pub fn fields(aliases: impl IntoIterator<Item = FieldAlias>) -> Self {
        Projection::Fields(aliases.into_iter().collect())
    }

    pub fn apply(&self, record: &Record) -> Record {
        match self {
            Projection::All => record.clone(),
            Projection::Fields(aliases) => aliases
                .iter()
                .filter_map(|a| {
                    record
                        .get(&a.field)
                        .map(|value| (a.alias.clone(), value.clone()))
                })
                .collect(),
        }
    }
}

impl From<Option<Vec<FieldAlias>>> for Projection {
    fn from(aliases: Option<Vec<FieldAlias>>) -> Self {
        aliases.map(Projection::Fields).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
