//! One user-triggered search: fetch → persist → rank.
//!
//! Nothing in here fails the search as a whole. Provider failures truncate
//! the result set, malformed places are dropped, and storage failures are
//! collected per record while the remaining records are still written and
//! still returned for display.

use gemfinder_core::{rank_places, PlaceRecord, PlaceSink, SearchParams};

use crate::client::PlacesClient;
use crate::error::PersistenceWriteFailed;

/// Result of [`run_search`], ready for a display layer.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Records in display order (rating desc, review count asc).
    pub records: Vec<PlaceRecord>,
    /// Records successfully appended to the sink.
    pub persisted: usize,
    pub persist_failures: Vec<PersistenceWriteFailed>,
    pub pages_fetched: usize,
    pub dropped_malformed: usize,
    /// Why pagination stopped early, when it did.
    pub truncated_by: Option<String>,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated_by.is_some()
    }
}

/// Runs one search end to end.
///
/// Records are appended to `sink` in provider arrival order before ranking,
/// one append per record, with no deduplication. An empty result is a
/// normal outcome: the sink sees no calls and the returned list is empty.
pub async fn run_search<S>(
    client: &PlacesClient,
    sink: &S,
    params: &SearchParams,
    max_pages: usize,
) -> SearchOutcome
where
    S: PlaceSink + Sync,
{
    tracing::info!(
        query = %params.query(),
        min_rating = params.min_rating(),
        max_reviews = params.max_reviews(),
        "starting places search"
    );

    let fetched = client.fetch_filtered_places(params, max_pages).await;

    let mut persisted = 0usize;
    let mut persist_failures = Vec::new();
    for record in &fetched.records {
        match sink.append(record).await {
            Ok(()) => persisted += 1,
            Err(e) => {
                tracing::error!(
                    query = %params.query(),
                    place = %record.name,
                    error = %e,
                    "failed to persist place result"
                );
                persist_failures.push(PersistenceWriteFailed {
                    place_name: record.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let mut records = fetched.records;
    rank_places(&mut records);

    tracing::info!(
        query = %params.query(),
        results = records.len(),
        pages = fetched.pages_fetched,
        persisted,
        persist_failed = persist_failures.len(),
        dropped_malformed = fetched.dropped_malformed,
        truncated = fetched.stopped_by.is_some(),
        "places search finished"
    );

    SearchOutcome {
        records,
        persisted,
        persist_failures,
        pages_fetched: fetched.pages_fetched,
        dropped_malformed: fetched.dropped_malformed,
        truncated_by: fetched.stopped_by.map(|e| e.to_string()),
    }
}
