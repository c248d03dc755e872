pub mod app_config;
pub mod config;
pub mod params;
pub mod place;
pub mod query_state;
pub mod rank;
pub mod sink;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use params::{SearchParams, DEFAULT_MAX_REVIEWS, DEFAULT_MIN_RATING};
pub use place::{GeoPoint, PlaceRecord, PriceLevel, ReviewRecord};
pub use query_state::{QueryPhase, QueryState};
pub use rank::rank_places;
pub use sink::PlaceSink;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid search: {0}")]
    InvalidSearch(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
