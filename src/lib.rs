//! jsearch — indexed search and joins over JSON entity snapshots.
//!
//! This crate ties the workspace together so the binary, the integration
//! harnesses, and the benches share one entry point.
//!
//! # Architecture
//!
//! ```text
//! Config ──► JsonDirSource ──► Database::load ──► Session ──► App
//!                                   │
//!                                   └──► Database::search ──► Renderer
//! ```

pub use jsearch_core::*;
pub use jsearch_shell as shell;
pub use jsearch_sources as sources;

use std::path::Path;

/// Load the database described by `config`, reading snapshots from
/// `data_dir` (or `[data] dir` when `None`).
pub fn open(config: &config::Config, data_dir: Option<&Path>) -> Result<Database> {
    let dir = data_dir.unwrap_or(&config.data.dir);
    tracing::info!(dir = %dir.display(), "opening database");
    let source = sources::JsonDirSource::new(dir);
    Database::load(&config.schema(), &source, config.search.match_mode())
}
