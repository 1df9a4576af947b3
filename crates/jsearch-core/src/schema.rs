//! Declared table layouts: primary key, index fields, and foreign keys.
//!
//! A [`Schema`] is already-validated input to [`Database::load`](crate::Database::load).
//! It is normally produced by [`Config::schema`](crate::config::Config::schema)
//! but can be built directly with the fluent constructors below.

use crate::types::{FieldAlias, Projection};
use serde::{Deserialize, Deserializer};

/// A directed relationship from a field of this table to a field of another.
///
/// For each record carrying `local_field`, the target table is searched on
/// `foreign_field` and the (projected) matches are attached under
/// [`output_key`](ForeignKey::output_key).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForeignKey {
    pub local_field: String,
    pub foreign_field: String,
    /// Name of the target table. Resolved at search time, not at load time.
    pub target: String,
    /// Output key override. Defaults to the target table's name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "fields", deserialize_with = "deserialize_projection")]
    pub projection: Projection,
}

fn deserialize_projection<'de, D>(deserializer: D) -> Result<Projection, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<FieldAlias>>::deserialize(deserializer).map(Projection::from)
}

impl ForeignKey {
    pub fn new(
        local_field: impl Into<String>,
        target: impl Into<String>,
        foreign_field: impl Into<String>,
    ) -> Self {
        Self {
            local_field: local_field.into(),
            foreign_field: foreign_field.into(),
            target: target.into(),
            name: None,
            projection: Projection::All,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn project(mut self, aliases: impl IntoIterator<Item = FieldAlias>) -> Self {
        self.projection = Projection::fields(aliases);
        self
    }

    /// Key under which joined records are attached.
    pub fn output_key(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.target)
    }
}

/// Declaration of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableSchema {
    /// Filled in from the `[tables.<name>]` key; never read from the body.
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub primary_key: Option<String>,
    #[serde(default)]
    pub index: Vec<String>,
    /// Snapshot file name, relative to the data directory. Defaults to
    /// `<name>.json`.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn primary_key(mut self, field: impl Into<String>) -> Self {
        self.primary_key = Some(field.into());
        self
    }

    pub fn index<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    pub fn file_name(&self) -> String {
        self.file
            .clone()
            .unwrap_or_else(|| format!("{}.json", self.name))
    }

    /// The primary key, if set to a non-empty field name.
    pub fn primary_key_field(&self) -> Option<&str> {
        self.primary_key.as_deref().filter(|pk| !pk.is_empty())
    }
}

/// The full set of table declarations for one database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub name: String,
    pub tables: Vec<TableSchema>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    pub fn table(mut self, table: TableSchema) -> Self {
        self.tables.push(table);
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
