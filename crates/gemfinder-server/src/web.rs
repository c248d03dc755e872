//! Browser page: search form plus result cards.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use gemfinder_core::{
    PlaceRecord, ReviewRecord, SearchParams, DEFAULT_MAX_REVIEWS, DEFAULT_MIN_RATING,
};
use gemfinder_db::PgPlaceSink;
use gemfinder_places::{run_search, SearchOutcome};
use serde::Serialize;

use crate::api::{AppState, SearchQuery};

#[derive(Debug, Serialize)]
pub(crate) struct PlaceCard {
    name: String,
    address: String,
    rating: String,
    review_count: String,
    category: String,
    price: String,
    maps_url: Option<String>,
    website_url: Option<String>,
    photos: Vec<String>,
    reviews: Vec<ReviewRecord>,
}

impl From<PlaceRecord> for PlaceCard {
    fn from(record: PlaceRecord) -> Self {
        Self {
            rating: record
                .rating
                .map_or_else(|| "n/a".to_string(), |r| format!("{r:.1}")),
            review_count: record
                .review_count
                .map_or_else(|| "n/a".to_string(), |c| c.to_string()),
            category: record.category_label().to_string(),
            price: record.price_level.to_string(),
            name: record.name,
            address: record.address,
            maps_url: record.maps_url,
            website_url: record.website_url,
            photos: record.photos,
            reviews: record.reviews,
        }
    }
}

/// Template context for `index.html`. Form fields echo what the user typed.
#[derive(Debug, Serialize)]
pub(crate) struct PageView {
    query: String,
    min_rating: String,
    max_reviews: String,
    searched: bool,
    error: Option<String>,
    truncated: bool,
    persist_failures: usize,
    places: Vec<PlaceCard>,
}

impl PageView {
    fn from_query(query: &SearchQuery) -> Self {
        Self {
            query: query.q.clone().unwrap_or_default(),
            min_rating: query
                .min_rating
                .clone()
                .unwrap_or_else(|| DEFAULT_MIN_RATING.to_string()),
            max_reviews: query
                .max_reviews
                .clone()
                .unwrap_or_else(|| DEFAULT_MAX_REVIEWS.to_string()),
            searched: false,
            error: None,
            truncated: false,
            persist_failures: 0,
            places: Vec::new(),
        }
    }

    /// Fills in results. Thresholds are replaced by the validated values so
    /// the summary line shows what was actually applied.
    fn with_outcome(mut self, params: &SearchParams, outcome: SearchOutcome) -> Self {
        self.min_rating = params.min_rating().to_string();
        self.max_reviews = params.max_reviews().to_string();
        self.searched = true;
        self.truncated = outcome.is_truncated();
        self.persist_failures = outcome.persist_failures.len();
        self.places = outcome.records.into_iter().map(PlaceCard::from).collect();
        self
    }
}

pub(crate) async fn index(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let mut view = PageView::from_query(&query);

    // No `q` at all means a fresh page load.
    if query.q.is_some() {
        match query.to_params() {
            Ok(params) => {
                let sink = PgPlaceSink::new(state.pool.clone());
                let outcome = run_search(&state.places, &sink, &params, state.max_pages).await;
                view = view.with_outcome(&params, outcome);
            }
            Err(message) => view.error = Some(message),
        }
    }

    match state.templates.render("index.html", &view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}
