use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// An active listing joined with its seller's profile columns. Discovery
/// never reads listings without the seller attached, so the join is baked
/// into the row shape.
#[derive(Debug, Clone, FromRow)]
pub struct ListingRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub category: String,
    pub condition: String,
    pub price: f64,
    pub currency: String,
    pub created_at: Option<DateTime<Utc>>,
    pub seller_callsign: Option<String>,
    pub seller_display_name: Option<String>,
    pub seller_city: Option<String>,
    pub seller_country: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RatingRow {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub rater_user_id: Uuid,
    pub rated_user_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub response: Option<String>,
    pub response_at: Option<DateTime<Utc>>,
}
