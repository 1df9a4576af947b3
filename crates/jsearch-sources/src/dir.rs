//! Directory source — one `<table>.json` snapshot per table.

use crate::decode_records;
use jsearch_core::{Record, RecordSource, SourceError, TableSchema};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads each table from `dir/<file>`, where `<file>` is the table's declared
/// file name (default `<table>.json`).
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, table: &TableSchema) -> PathBuf {
        self.dir.join(table.file_name())
    }
}

impl RecordSource for JsonDirSource {
    fn read(&self, table: &TableSchema) -> Result<Vec<Record>, SourceError> {
        let path = self.path_for(table);
        tracing::debug!(table = %table.name, path = %path.display(), "reading snapshot");

        let bytes = std::fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::Missing {
                table: table.name.clone(),
                path: path.clone(),
            },
            _ => SourceError::Io {
                table: table.name.clone(),
                path: path.clone(),
                source,
            },
        })?;

        decode_records(&table.name, &bytes)
    }
}
