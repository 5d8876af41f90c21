//! Repository trait definitions for data persistence

use depot_types::StoreError;

use crate::model::PersistedRow;

/// Append-only sink for computed productivity summaries
pub trait ProductivitySummaryRepository {
    /// Insert one row in a single statement; returns the new row id.
    ///
    /// The statement either commits fully or leaves nothing behind.
    fn append(&self, row: &PersistedRow) -> Result<i64, StoreError>;

    /// Number of rows stored so far
    fn count(&self) -> Result<u64, StoreError>;
}
