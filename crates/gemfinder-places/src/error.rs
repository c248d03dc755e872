use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("places provider returned HTTP {status}: {body}")]
    ProviderRequestFailed { status: u16, body: String },

    #[error("malformed place {}: {reason}", place_id.as_deref().unwrap_or("<no id>"))]
    MalformedRecord {
        place_id: Option<String>,
        reason: String,
    },

    #[error("invalid places base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// A single record that could not be appended to the result sink.
#[derive(Debug, Clone, Error)]
#[error("persistence write failed for \"{place_name}\": {reason}")]
pub struct PersistenceWriteFailed {
    pub place_name: String,
    pub reason: String,
}
