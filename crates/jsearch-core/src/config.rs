//! Configuration types for jsearch.
//!
//! [`Config::load`] reads `~/.config/jsearch/config.toml` (or an explicit
//! path), layered on top of the embedded defaults. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests). The `[tables.*]` blocks become the [`Schema`] handed to
//! [`Database::load`](crate::Database::load).

use crate::schema::{Schema, TableSchema};
use crate::types::MatchMode;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[database]
name = "zendesk"

[data]
dir = "resources"

[search]
case_insensitive = false

[display]
key_width   = 20
value_width = 50

[tables.users]
primary_key = "_id"
index       = ["_id", "organization_id"]

[[tables.users.foreign_keys]]
local_field   = "organization_id"
target        = "organizations"
foreign_field = "_id"
fields        = [{ field = "name", alias = "organization_name" }]

[[tables.users.foreign_keys]]
local_field   = "_id"
target        = "tickets"
foreign_field = "submitter_id"
fields        = [{ field = "subject", alias = "ticket_subject" }]

[tables.organizations]
primary_key = "_id"
index       = ["_id"]

[[tables.organizations.foreign_keys]]
local_field   = "_id"
target        = "users"
foreign_field = "organization_id"
fields        = [{ field = "name", alias = "user_name" }]

[tables.tickets]
primary_key = "_id"
index       = ["_id", "submitter_id", "assignee_id", "organization_id"]

[[tables.tickets.foreign_keys]]
local_field   = "submitter_id"
target        = "users"
foreign_field = "_id"
fields        = [
    { field = "name",  alias = "user_name" },
    { field = "email", alias = "user_email" },
]

[[tables.tickets.foreign_keys]]
local_field   = "assignee_id"
target        = "users"
foreign_field = "_id"
name          = "assignee"
fields        = [{ field = "name", alias = "assignee_name" }]

[[tables.tickets.foreign_keys]]
local_field   = "organization_id"
target        = "organizations"
foreign_field = "_id"
fields        = [{ field = "name", alias = "organization_name" }]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub tables: BTreeMap<String, TableSchema>,
}

/// `[database]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_name")]
    pub name: String,
}

fn default_database_name() -> String { "zendesk".to_string() }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { name: default_database_name() }
    }
}

/// `[data]` section: where snapshot files live.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf { PathBuf::from("resources") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { dir: default_data_dir() }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub case_insensitive: bool,
}

impl SearchConfig {
    pub fn match_mode(&self) -> MatchMode {
        if self.case_insensitive {
            MatchMode::CaseInsensitive
        } else {
            MatchMode::Exact
        }
    }
}

/// `[display]` section: column widths for rendered rows.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_key_width")]
    pub key_width: usize,
    #[serde(default = "default_value_width")]
    pub value_width: usize,
}

fn default_key_width() -> usize { 20 }
fn default_value_width() -> usize { 50 }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            key_width: default_key_width(),
            value_width: default_value_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `path`, or from `~/.config/jsearch/config.toml` when `None`,
    /// layered on top of the built-in defaults. The default location is
    /// created with the defaults if it does not exist; an explicit path must
    /// exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (config_path(), false),
        };

        if !required && !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
                .add_source(config::File::from(path.as_path()).required(required)),
        )
    }

    /// Parse a TOML document layered over the built-in defaults.
    pub fn from_toml(toml: &str) -> anyhow::Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
                .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
        )
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// The table declarations, with each table's name taken from its key.
    pub fn schema(&self) -> Schema {
        Schema {
            name: self.database.name.clone(),
            tables: self
                .tables
                .iter()
                .map(|(name, table)| TableSchema {
                    name: name.clone(),
                    ..table.clone()
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("jsearch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldAlias, Projection};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.database.name, "zendesk");
        assert_eq!(cfg.data.dir, PathBuf::from("resources"));
        assert_eq!(cfg.search.match_mode(), MatchMode::Exact);
        assert_eq!(cfg.display.key_width, 20);
        assert_eq!(cfg.display.value_width, 50);
    }

    #[test]
    fn default_schema_declares_zendesk_tables() {
        let schema = Config::defaults().schema();
        let names: Vec<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["organizations", "tickets", "users"]);

        let users = &schema.tables[2];
        assert_eq!(users.primary_key_field(), Some("_id"));
        assert_eq!(users.foreign_keys.len(), 2);
        assert_eq!(users.foreign_keys[0].target, "organizations");
        assert_eq!(
            users.foreign_keys[0].projection,
            Projection::fields([FieldAlias::new("name", "organization_name")])
        );

        let tickets = &schema.tables[1];
        assert_eq!(tickets.foreign_keys[1].output_key(), "assignee");
        assert_eq!(tickets.foreign_keys[0].output_key(), "users");
    }

    #[test]
    fn toml_overrides_layer_over_defaults() {
        let cfg = Config::from_toml(
            r#"
            [search]
            case_insensitive = true

            [data]
            dir = "/srv/snapshots"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.search.match_mode(), MatchMode::CaseInsensitive);
        assert_eq!(cfg.data.dir, PathBuf::from("/srv/snapshots"));
        assert_eq!(cfg.display.key_width, 20);
        assert_eq!(cfg.tables.len(), 3);
    }
}
