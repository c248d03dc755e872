use crate::CoreError;

/// Rating floor pre-filled in the CLI and the search page.
pub const DEFAULT_MIN_RATING: f64 = 4.7;

/// Review ceiling pre-filled in the CLI and the search page.
pub const DEFAULT_MAX_REVIEWS: u32 = 100;

const RATING_BOUNDS: (f64, f64) = (1.0, 5.0);

/// Validated user input for one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    query: String,
    min_rating: f64,
    max_reviews: u32,
}

impl SearchParams {
    /// Validates and builds search parameters. The query is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSearch`] if the query is blank or
    /// `min_rating` is not a finite value within `[1.0, 5.0]`.
    pub fn new(query: &str, min_rating: f64, max_reviews: u32) -> Result<Self, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::InvalidSearch("query must not be empty".into()));
        }

        let (low, high) = RATING_BOUNDS;
        if !min_rating.is_finite() || min_rating < low || min_rating > high {
            return Err(CoreError::InvalidSearch(format!(
                "min rating must be between {low} and {high}, got {min_rating}"
            )));
        }

        Ok(Self {
            query: query.to_owned(),
            min_rating,
            max_reviews,
        })
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    #[must_use]
    pub fn max_reviews(&self) -> u32 {
        self.max_reviews
    }
}
