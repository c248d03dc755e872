//! Multi-page text search with per-page threshold filtering.

use chrono::Utc;
use gemfinder_core::{PlaceRecord, SearchParams};

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::normalize::{normalize_place, NormalizeContext};

/// Loosest floor ever sent to the provider. The provider-side filter is
/// only a coarse cut; the user's exact threshold is applied locally.
pub const SERVER_RATING_FLOOR: f64 = 4.5;

/// Records gathered by [`PlacesClient::fetch_filtered_places`].
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Filtered, normalized records in provider arrival order.
    pub records: Vec<PlaceRecord>,
    /// Pages that returned a successful response.
    pub pages_fetched: usize,
    /// Places that passed the thresholds but could not be normalized.
    pub dropped_malformed: usize,
    /// Request failure that ended pagination early, if any.
    pub stopped_by: Option<PlacesError>,
}

/// Rating floor to send to the provider for a user threshold.
///
/// Never higher than [`SERVER_RATING_FLOOR`] and never higher than the user's
/// own floor, rounded down to the provider's 0.5 step.
#[must_use]
pub fn server_rating_floor(min_rating: f64) -> f64 {
    let floor = SERVER_RATING_FLOOR.min(min_rating).clamp(0.0, 5.0);
    (floor * 2.0).floor() / 2.0
}

/// Returns `true` when a place meets both user thresholds.
///
/// A missing rating counts as 0 and a missing review count counts as 0, so
/// unrated places never pass a rating floor while places with no review
/// count always pass the review ceiling.
#[must_use]
pub fn passes_thresholds(
    rating: Option<f64>,
    review_count: Option<i64>,
    min_rating: f64,
    max_reviews: u32,
) -> bool {
    rating.unwrap_or(0.0) >= min_rating && review_count.unwrap_or(0) <= i64::from(max_reviews)
}

impl PlacesClient {
    /// Fetches every page for `params`, keeping only places that meet the
    /// user thresholds.
    ///
    /// Filtering happens page by page, so a failure part-way through still
    /// returns everything accepted from earlier pages.
    ///
    /// **Best-effort semantics**: a failed page request (non-2xx, transport,
    /// or decode error) ends pagination and is reported in
    /// [`FetchOutcome::stopped_by`] instead of being returned as an error.
    /// There is no retry. Pagination also ends after `max_pages` pages.
    pub async fn fetch_filtered_places(
        &self,
        params: &SearchParams,
        max_pages: usize,
    ) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();
        let mut page_token: Option<String> = None;
        let provider_floor = server_rating_floor(params.min_rating());

        loop {
            if outcome.pages_fetched >= max_pages {
                tracing::warn!(
                    query = %params.query(),
                    max_pages,
                    "page limit reached; stopping pagination"
                );
                break;
            }

            let page = match self
                .search_text_page(params.query(), provider_floor, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        query = %params.query(),
                        page = outcome.pages_fetched + 1,
                        kept = outcome.records.len(),
                        error = %e,
                        "places request failed; returning partial results"
                    );
                    outcome.stopped_by = Some(e);
                    break;
                }
            };
            outcome.pages_fetched += 1;

            let ctx = NormalizeContext {
                api_key: self.api_key(),
                query: params.query(),
                fetched_at: Utc::now(),
            };

            let received = page.places.len();
            let mut kept = 0usize;
            for raw in page.places {
                if !passes_thresholds(
                    raw.rating,
                    raw.user_rating_count,
                    params.min_rating(),
                    params.max_reviews(),
                ) {
                    continue;
                }
                match normalize_place(raw, &ctx) {
                    Ok(record) => {
                        kept += 1;
                        outcome.records.push(record);
                    }
                    Err(e) => {
                        tracing::warn!(
                            query = %params.query(),
                            error = %e,
                            "skipping place; normalization failed"
                        );
                        outcome.dropped_malformed += 1;
                    }
                }
            }

            tracing::debug!(
                query = %params.query(),
                page = outcome.pages_fetched,
                received,
                kept,
                "processed places page"
            );

            page_token = page.next_page_token.filter(|t| !t.is_empty());
            if page_token.is_none() {
                break;
            }
        }

        outcome
    }
}
