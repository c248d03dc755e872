use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One venue returned by a search, normalized for display and storage.
///
/// Built once per search by the places normalizer and never mutated
/// afterwards. Persistence writes its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Provider place ID, e.g. `"ChIJN1t_tDeuEmsRUsoyG83frY4"`.
    pub place_id: Option<String>,
    pub name: String,
    /// Provider-formatted single-line address.
    pub address: String,
    /// Average rating in `[1.0, 5.0]`; `None` when the provider has none.
    pub rating: Option<f64>,
    /// Total number of user ratings; `None` when the provider has none.
    pub review_count: Option<u32>,
    /// Localized label for the primary type, e.g. `"Italian Restaurant"`.
    pub category: Option<String>,
    /// Machine type code, e.g. `"italian_restaurant"`.
    pub primary_type: Option<String>,
    /// Secondary type tags in provider order.
    pub types: Vec<String>,
    pub location: Option<GeoPoint>,
    pub maps_url: Option<String>,
    pub website_url: Option<String>,
    pub price_level: PriceLevel,
    /// Photo retrieval URLs, ready to use as `<img src>`.
    pub photos: Vec<String>,
    pub reviews: Vec<ReviewRecord>,
    /// Free-text query that produced this record.
    pub query: String,
    pub fetched_at: DateTime<Utc>,
}

impl PlaceRecord {
    /// Category label for display, `"unknown"` when the provider sent none.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("unknown")
    }
}

/// A single user review attached to a [`PlaceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub text: String,
    /// Star rating 1–5; `None` when missing or out of range.
    pub rating: Option<u8>,
    pub author_name: String,
    pub author_photo_url: Option<String>,
    /// Provider-supplied relative time, e.g. `"2 months ago"`.
    pub relative_publish_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Price bucket for a venue, serialized as its dollar-sign symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceLevel {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "$")]
    Inexpensive,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
    #[serde(rename = "$$$$")]
    VeryExpensive,
}

impl PriceLevel {
    /// Dollar-sign symbol, or `None` for [`PriceLevel::Unknown`].
    #[must_use]
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            PriceLevel::Unknown => None,
            PriceLevel::Inexpensive => Some("$"),
            PriceLevel::Moderate => Some("$$"),
            PriceLevel::Expensive => Some("$$$"),
            PriceLevel::VeryExpensive => Some("$$$$"),
        }
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol().unwrap_or("unknown"))
    }
}
