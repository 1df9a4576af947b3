//! Record sources — where a table's records come from at load time.
//!
//! The engine never touches the filesystem itself. [`Database::load`](crate::Database::load)
//! asks a [`RecordSource`] for each declared table and receives already-decoded
//! records. Concrete sources live in the `jsearch-sources` crate.

use crate::error::SourceError;
use crate::schema::TableSchema;
use crate::types::Record;

/// Trait implemented by each snapshot source.
pub trait RecordSource {
    /// Read every record of `table`, in snapshot order.
    ///
    /// Return [`SourceError::Missing`] when the table has no snapshot at all;
    /// the loader treats that as "skip this table" rather than a failure.
    fn read(&self, table: &TableSchema) -> Result<Vec<Record>, SourceError>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn read(&self, table: &TableSchema) -> Result<Vec<Record>, SourceError> {
        (**self).read(table)
    }
}
