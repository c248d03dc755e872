pub mod client;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use client::PlacesClient;
pub use error::{PersistenceWriteFailed, PlacesError};
pub use fetch::{passes_thresholds, server_rating_floor, FetchOutcome};
pub use normalize::{map_price_level, normalize_place, NormalizeContext};
pub use pipeline::{run_search, SearchOutcome};
pub use types::{RawPlace, SearchTextResponse};
