//! jsearch-core — indexed lookup and join engine.
//!
//! Read-only search over a small set of entity collections loaded from JSON
//! snapshots, enriched through declared foreign-key relationships.
//!
//! # Architecture
//!
//! ```text
//! Config ──► Schema ──► Database::load ──► Table ──► Index
//!                            ▲
//!                      RecordSource
//!
//! Database::search ──► Table::search (index or scan) ──► Table::join
//!                                                           │
//!                                  target Table::search ◄───┘
//! ```
//!
//! Nothing is mutated after load. A `Database` can be shared by reference
//! across threads without locking.

pub mod config;
pub mod database;
pub mod error;
pub mod index;
pub mod schema;
pub mod source;
pub mod table;
pub mod types;

pub use database::{Database, FieldInfo};
pub use error::{Error, Result, SourceError};
pub use index::Index;
pub use schema::{ForeignKey, Schema, TableSchema};
pub use source::RecordSource;
pub use table::{Relation, Table};
pub use types::{value_key, FieldAlias, MatchMode, Projection, Record};
