use axum::{
    extract::{Query, State},
    Extension, Json,
};
use gemfinder_core::{PlaceRecord, SearchParams, DEFAULT_MAX_REVIEWS, DEFAULT_MIN_RATING};
use gemfinder_db::PgPlaceSink;
use gemfinder_places::{run_search, SearchOutcome};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Raw search query string. Numbers arrive as text so a bad value becomes a
/// `validation_error` instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    pub q: Option<String>,
    pub min_rating: Option<String>,
    pub max_reviews: Option<String>,
}

impl SearchQuery {
    /// Parses and validates into [`SearchParams`], filling in defaults for
    /// absent or empty thresholds.
    pub(crate) fn to_params(&self) -> Result<SearchParams, String> {
        let min_rating = match non_empty(self.min_rating.as_deref()) {
            None => DEFAULT_MIN_RATING,
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|_| format!("min_rating must be a number, got \"{raw}\""))?,
        };
        let max_reviews = match non_empty(self.max_reviews.as_deref()) {
            None => DEFAULT_MAX_REVIEWS,
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                format!("max_reviews must be a non-negative whole number, got \"{raw}\"")
            })?,
        };

        SearchParams::new(self.q.as_deref().unwrap_or_default(), min_rating, max_reviews)
            .map_err(|e| e.to_string())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
pub(super) struct PersistFailureItem {
    pub place_name: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchData {
    pub query: String,
    pub min_rating: f64,
    pub max_reviews: u32,
    /// Ranked: rating desc, then review count asc.
    pub results: Vec<PlaceRecord>,
    pub persisted: usize,
    pub persist_failures: Vec<PersistFailureItem>,
    pub pages_fetched: usize,
    pub dropped_malformed: usize,
    pub truncated: bool,
    pub truncated_by: Option<String>,
}

impl SearchData {
    fn from_outcome(params: &SearchParams, outcome: SearchOutcome) -> Self {
        Self {
            query: params.query().to_string(),
            min_rating: params.min_rating(),
            max_reviews: params.max_reviews(),
            truncated: outcome.is_truncated(),
            results: outcome.records,
            persisted: outcome.persisted,
            persist_failures: outcome
                .persist_failures
                .into_iter()
                .map(|f| PersistFailureItem {
                    place_name: f.place_name,
                    reason: f.reason,
                })
                .collect(),
            pages_fetched: outcome.pages_fetched,
            dropped_malformed: outcome.dropped_malformed,
            truncated_by: outcome.truncated_by,
        }
    }
}

pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchData>>, ApiError> {
    let params = query
        .to_params()
        .map_err(|message| ApiError::new(req_id.0.clone(), "validation_error", message))?;

    let sink = PgPlaceSink::new(state.pool.clone());
    let outcome = run_search(&state.places, &sink, &params, state.max_pages).await;

    Ok(Json(ApiResponse {
        data: SearchData::from_outcome(&params, outcome),
        meta: ResponseMeta::new(req_id.0),
    }))
}
