//! Error taxonomy for the engine.
//!
//! Only two things can go wrong once a [`Database`](crate::Database) exists:
//! an entity name that was never loaded, or (at load time) a snapshot that
//! could not be read. "No index" and "no match" are not errors; they yield an
//! empty result.

use std::path::PathBuf;

/// Errors surfaced by [`Database`](crate::Database) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entity is not in the database, either because it was never
    /// declared or because its snapshot was missing at load time.
    #[error("table `{0}` not found")]
    TableNotFound(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors raised by a [`RecordSource`](crate::source::RecordSource) while
/// reading a table's records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backing snapshot does not exist. Recovered by `Database::load`.
    #[error("no snapshot for table `{table}` at {}", .path.display())]
    Missing { table: String, path: PathBuf },

    #[error("failed to read snapshot for table `{table}` at {}", .path.display())]
    Io {
        table: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot for table `{table}` is not valid JSON")]
    Malformed {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot parsed, but is not an array of objects.
    #[error("snapshot for table `{table}` must be a JSON array of objects")]
    NotAnArray { table: String },
}

impl SourceError {
    pub fn table(&self) -> &str {
        match self {
            SourceError::Missing { table, .. }
            | SourceError::Io { table, .. }
            | SourceError::Malformed { table, .. }
            | SourceError::NotAnArray { table } => table,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SourceError::Missing { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
