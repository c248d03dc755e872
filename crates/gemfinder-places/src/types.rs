//! Wire types for the Places API `places:searchText` endpoint.
//!
//! Only the fields named in the request field mask are modelled. Everything
//! is optional on the way in: the provider omits fields it has no data for
//! rather than sending `null`, and required-ness is enforced during
//! normalization instead of deserialization so that one bad place cannot
//! fail a whole page.
//!
//! ### `displayName` / `primaryTypeDisplayName`
//! Localized text objects: `{ "text": "Lilia", "languageCode": "en" }`.
//!
//! ### `priceLevel`
//! Enum string such as `"PRICE_LEVEL_MODERATE"`. Absent for many places.
//!
//! ### `photos[].name`
//! Resource name `places/{place_id}/photos/{reference}`. Only the trailing
//! segment is used to build a retrieval URL.
//!
//! ### `reviews[].text`
//! Optional: rating-only reviews carry no text object at all.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/places:searchText`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest<'a> {
    pub text_query: &'a str,
    pub min_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<&'a str>,
}

/// One page of results.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextResponse {
    /// Absent entirely (not `[]`) when the query matches nothing.
    #[serde(default)]
    pub places: Vec<RawPlace>,

    /// Present only when another page exists.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub display_name: Option<LocalizedText>,

    #[serde(default)]
    pub formatted_address: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub user_rating_count: Option<i64>,

    #[serde(default)]
    pub google_maps_uri: Option<String>,

    #[serde(default)]
    pub website_uri: Option<String>,

    #[serde(default)]
    pub price_level: Option<String>,

    #[serde(default)]
    pub photos: Vec<RawPhoto>,

    #[serde(default)]
    pub reviews: Vec<RawReview>,

    #[serde(default)]
    pub location: Option<RawLatLng>,

    #[serde(default)]
    pub primary_type_display_name: Option<LocalizedText>,

    #[serde(default)]
    pub primary_type: Option<String>,

    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhoto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub width_px: Option<u32>,
    #[serde(default)]
    pub height_px: Option<u32>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    #[serde(default)]
    pub text: Option<LocalizedText>,

    /// Star rating. Sent as a JSON number; whole values 1–5 in practice.
    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub author_attribution: Option<AuthorAttribution>,

    #[serde(default)]
    pub relative_publish_time_description: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAttribution {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub photo_uri: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLatLng {
    pub latitude: f64,
    pub longitude: f64,
}
