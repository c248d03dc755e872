//! Append-only writes to the `place_results` table.

use chrono::{DateTime, Utc};
use gemfinder_core::{PlaceRecord, PlaceSink};
use sqlx::PgPool;

use crate::DbError;

/// Row shape for one stored search result.
///
/// Built from a borrowed [`PlaceRecord`]; the record itself is never
/// modified. Photos and reviews are stored as JSONB arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlaceResult {
    pub search_query: String,
    pub place_id: Option<String>,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub category: Option<String>,
    pub primary_type: Option<String>,
    pub types: Vec<String>,
    pub maps_url: Option<String>,
    pub website_url: Option<String>,
    /// `"$"`…`"$$$$"` or `"unknown"`.
    pub price_level: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photos: serde_json::Value,
    pub reviews: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
}

impl NewPlaceResult {
    /// Copies a record into row form.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if photos or reviews cannot be encoded
    /// as JSON.
    pub fn from_record(record: &PlaceRecord) -> Result<Self, serde_json::Error> {
        Ok(Self {
            search_query: record.query.clone(),
            place_id: record.place_id.clone(),
            name: record.name.clone(),
            address: record.address.clone(),
            rating: record.rating,
            review_count: record.review_count.map(i64::from),
            category: record.category.clone(),
            primary_type: record.primary_type.clone(),
            types: record.types.clone(),
            maps_url: record.maps_url.clone(),
            website_url: record.website_url.clone(),
            price_level: record.price_level.to_string(),
            latitude: record.location.map(|l| l.latitude),
            longitude: record.location.map(|l| l.longitude),
            photos: serde_json::to_value(&record.photos)?,
            reviews: serde_json::to_value(&record.reviews)?,
            fetched_at: record.fetched_at,
        })
    }
}

/// Insert one result row and return its generated `id`.
///
/// Always inserts; there is no conflict handling.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn insert_place_result(pool: &PgPool, row: &NewPlaceResult) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO place_results \
             (search_query, place_id, name, address, rating, review_count, category, \
              primary_type, types, maps_url, website_url, price_level, latitude, longitude, \
              photos, reviews, fetched_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
         RETURNING id",
    )
    .bind(&row.search_query)
    .bind(&row.place_id)
    .bind(&row.name)
    .bind(&row.address)
    .bind(row.rating)
    .bind(row.review_count)
    .bind(&row.category)
    .bind(&row.primary_type)
    .bind(&row.types)
    .bind(&row.maps_url)
    .bind(&row.website_url)
    .bind(&row.price_level)
    .bind(row.latitude)
    .bind(row.longitude)
    .bind(&row.photos)
    .bind(&row.reviews)
    .bind(row.fetched_at)
    .fetch_one(pool)
    .await
}

/// [`PlaceSink`] backed by the `place_results` table.
#[derive(Debug, Clone)]
pub struct PgPlaceSink {
    pool: PgPool,
}

impl PgPlaceSink {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PlaceSink for PgPlaceSink {
    type Error = DbError;

    async fn append(&self, record: &PlaceRecord) -> Result<(), DbError> {
        let row = NewPlaceResult::from_record(record)?;
        insert_place_result(&self.pool, &row).await?;
        Ok(())
    }
}
