//! HTTP client for the Places API `places:searchText` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{SearchTextRequest, SearchTextResponse};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/";

const SEARCH_TEXT_PATH: &str = "v1/places:searchText";

/// Fields requested from the provider. Anything not listed here is omitted
/// from the response.
pub const FIELD_MASK: &str = "nextPageToken,places.id,places.displayName,\
places.formattedAddress,places.rating,places.userRatingCount,places.googleMapsUri,\
places.priceLevel,places.photos,places.reviews,places.location,\
places.primaryTypeDisplayName,places.primaryType,places.types,places.websiteUri";

/// Error bodies are logged and carried in errors; cap them so a provider
/// HTML error page does not flood the logs.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for one page of a Places text search.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    search_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("gemfinder/0.1")
            .build()?;

        let search_url = Self::search_url(base_url)?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
        })
    }

    /// API key used for provider requests and photo URLs.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Requests one page of text-search results.
    ///
    /// `min_rating` is sent as the provider-side floor; callers still apply
    /// their own threshold to what comes back.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ProviderRequestFailed`] for any non-2xx status.
    /// - [`PlacesError::Http`] on network or TLS failure.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search_text_page(
        &self,
        query: &str,
        min_rating: f64,
        page_token: Option<&str>,
    ) -> Result<SearchTextResponse, PlacesError> {
        let request = SearchTextRequest {
            text_query: query,
            min_rating,
            page_token,
        };

        let response = self
            .client
            .post(self.search_url.clone())
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body is diagnostic only; a failure to read it should not
            // mask the status.
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::ProviderRequestFailed {
                status: status.as_u16(),
                body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<SearchTextResponse>(&body).map_err(|e| PlacesError::Deserialize {
            context: format!("searchText page for \"{query}\""),
            source: e,
        })
    }

    /// Resolves the `places:searchText` URL against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute URL.
    fn search_url(base_url: &str) -> Result<Url, PlacesError> {
        // A trailing slash makes `join` append rather than replace the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        base.join(SEARCH_TEXT_PATH)
            .map_err(|e| invalid(e.to_string()))
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_owned(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
