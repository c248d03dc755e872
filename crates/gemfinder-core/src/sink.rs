use std::future::Future;

use crate::place::PlaceRecord;

/// Append-only destination for search results.
///
/// Each call stores one independent copy of `record`. Implementations must
/// not deduplicate or upsert: running the same search twice stores every
/// record twice.
pub trait PlaceSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Appends one record.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if this record could not be stored. Callers treat
    /// the failure as local to the record.
    fn append(&self, record: &PlaceRecord) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
