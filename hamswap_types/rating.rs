use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A star rating left for a user after a sale. The store enforces at most
/// one rating per (listing, rater) pair with a uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub rater_id: Uuid,
    pub rated_id: Uuid,
    /// 1 to 5.
    pub stars: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    /// The rated user may publish exactly one response.
    pub response: Option<String>,
    pub response_at: Option<DateTime<Utc>>,
}

/// Payload for inserting a new rating.
#[derive(Debug, Clone)]
pub struct NewRating {
    pub listing_id: Uuid,
    pub rater_id: Uuid,
    pub rated_id: Uuid,
    pub stars: u8,
    pub comment: Option<String>,
}

/// Ordering for the reputation feed, independent of listing sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingSort {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
}
