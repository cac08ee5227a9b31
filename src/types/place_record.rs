use serde::Deserialize;

pub const UNKNOWN_TITLE: &str = "title unknown";
pub const NO_PHONE: &str = "no phone number";
pub const UNKNOWN_ADDRESS: &str = "address unknown";
pub const NO_RATING: &str = "no rating";
pub const NO_REVIEW_COUNT: &str = "review count unknown";

/// One business from the results list. `title`, `phone` and `address` hold
/// either the value reported by the API or a placeholder, never an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub title: String,
    pub phone: String,
    pub address: String,
    pub stats: PlaceStats,
}

/// Rating fields of a place entry. A mistyped field leaves both unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PlaceStats {
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u64>,
}

impl PlaceStats {
    pub fn describe(&self) -> String {
        match (self.rating, self.reviews) {
            (None, _) => NO_RATING.to_string(),
            (Some(rating), Some(reviews)) => format!("{} ({} reviews)", rating, reviews),
            (Some(rating), None) => format!("{} ({})", rating, NO_REVIEW_COUNT),
        }
    }
}
