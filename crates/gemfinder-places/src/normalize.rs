//! Normalization from raw Places API types to [`gemfinder_core::PlaceRecord`].

use chrono::{DateTime, Utc};
use gemfinder_core::{GeoPoint, PlaceRecord, PriceLevel, ReviewRecord};
use reqwest::Url;

use crate::error::PlacesError;
use crate::types::{LocalizedText, RawPhoto, RawPlace, RawReview};

const PHOTO_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/photo";

/// Width requested for every photo URL.
pub const PHOTO_MAX_WIDTH: u32 = 400;

const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Per-search values stamped onto every normalized record.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    /// Key embedded in photo URLs.
    pub api_key: &'a str,
    pub query: &'a str,
    pub fetched_at: DateTime<Utc>,
}

/// Normalizes a raw provider place into a [`PlaceRecord`].
///
/// # Errors
///
/// Returns [`PlacesError::MalformedRecord`] if the place has no display name
/// or no formatted address.
pub fn normalize_place(
    raw: RawPlace,
    ctx: &NormalizeContext<'_>,
) -> Result<PlaceRecord, PlacesError> {
    let Some(name) = localized(raw.display_name) else {
        return Err(PlacesError::MalformedRecord {
            place_id: raw.id,
            reason: "missing displayName".into(),
        });
    };

    let Some(address) = raw.formatted_address.filter(|s| !s.trim().is_empty()) else {
        return Err(PlacesError::MalformedRecord {
            place_id: raw.id,
            reason: format!("missing formattedAddress for \"{name}\""),
        });
    };

    let photos = photo_urls(&raw.photos, ctx.api_key);

    Ok(PlaceRecord {
        place_id: raw.id,
        name,
        address,
        rating: raw.rating,
        // Negative counts never come from the provider; treat as unknown.
        review_count: raw.user_rating_count.and_then(|c| u32::try_from(c).ok()),
        category: localized(raw.primary_type_display_name),
        primary_type: raw.primary_type.filter(|s| !s.is_empty()),
        types: raw.types,
        location: raw.location.map(|l| GeoPoint {
            latitude: l.latitude,
            longitude: l.longitude,
        }),
        maps_url: raw.google_maps_uri.filter(|s| !s.is_empty()),
        website_url: raw.website_uri.filter(|s| !s.is_empty()),
        price_level: map_price_level(raw.price_level.as_deref()),
        photos,
        reviews: normalize_reviews(raw.reviews),
        query: ctx.query.to_owned(),
        fetched_at: ctx.fetched_at,
    })
}

/// Maps the provider's price enum to a [`PriceLevel`].
///
/// Unrecognized values, including `PRICE_LEVEL_FREE` and
/// `PRICE_LEVEL_UNSPECIFIED`, map to [`PriceLevel::Unknown`].
#[must_use]
pub fn map_price_level(raw: Option<&str>) -> PriceLevel {
    match raw {
        Some("PRICE_LEVEL_INEXPENSIVE") => PriceLevel::Inexpensive,
        Some("PRICE_LEVEL_MODERATE") => PriceLevel::Moderate,
        Some("PRICE_LEVEL_EXPENSIVE") => PriceLevel::Expensive,
        Some("PRICE_LEVEL_VERY_EXPENSIVE") => PriceLevel::VeryExpensive,
        _ => PriceLevel::Unknown,
    }
}

/// Returns `true` if the review carries displayable text.
///
/// Whitespace-only text counts as missing: such a review would render as an
/// empty quote, so it is dropped together with rating-only reviews.
#[must_use]
pub fn has_review_text(review: &RawReview) -> bool {
    review
        .text
        .as_ref()
        .and_then(|t| t.text.as_deref())
        .is_some_and(|t| !t.trim().is_empty())
}

/// Keeps reviews that have text, in provider order.
#[must_use]
pub fn normalize_reviews(raw: Vec<RawReview>) -> Vec<ReviewRecord> {
    raw.into_iter()
        .filter(has_review_text)
        .filter_map(|review| {
            let text = review.text.and_then(|t| t.text)?;
            let (author_name, author_photo_url) = match review.author_attribution {
                Some(author) => (
                    author
                        .display_name
                        .filter(|s| !s.trim().is_empty())
                        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
                    author.photo_uri.filter(|s| !s.is_empty()),
                ),
                None => (ANONYMOUS_AUTHOR.to_string(), None),
            };
            Some(ReviewRecord {
                text,
                rating: review.rating.and_then(star_rating),
                author_name,
                author_photo_url,
                relative_publish_time: review
                    .relative_publish_time_description
                    .filter(|s| !s.is_empty()),
            })
        })
        .collect()
}

/// Builds a photo retrieval URL from a photo resource name such as
/// `places/ChIJ.../photos/AUc7tXV...`.
///
/// Returns `None` if the name has no trailing reference segment.
#[must_use]
pub fn photo_url(photo_name: &str, api_key: &str) -> Option<String> {
    let reference = photo_name.rsplit('/').next().filter(|s| !s.is_empty())?;
    let width = PHOTO_MAX_WIDTH.to_string();
    Url::parse_with_params(
        PHOTO_ENDPOINT,
        &[
            ("maxwidth", width.as_str()),
            ("photo_reference", reference),
            ("key", api_key),
        ],
    )
    .ok()
    .map(String::from)
}

fn photo_urls(photos: &[RawPhoto], api_key: &str) -> Vec<String> {
    photos
        .iter()
        .filter_map(|p| p.name.as_deref())
        .filter_map(|name| photo_url(name, api_key))
        .collect()
}

fn localized(text: Option<LocalizedText>) -> Option<String> {
    text.and_then(|t| t.text).filter(|s| !s.trim().is_empty())
}

/// Whole-star value in `1..=5`, otherwise `None`.
// In range and integral, so the cast is exact.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn star_rating(raw: f64) -> Option<u8> {
    if raw.fract() != 0.0 || !(1.0..=5.0).contains(&raw) {
        return None;
    }
    Some(raw as u8)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
