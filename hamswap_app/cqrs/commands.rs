use uuid::Uuid;

use crate::cqrs::Command;

/// Leave a star rating for the counterparty of a sale. At most one rating
/// per (listing, rater) pair; a second attempt fails with a duplicate error.
#[derive(Debug, Clone)]
pub struct RateUser {
    pub listing_id: Uuid,
    pub rater_id: Uuid,
    pub rated_id: Uuid,
    pub stars: u8,
    pub comment: Option<String>,
}

impl Command for RateUser {}

/// Attach the rated user's single public response to a rating.
#[derive(Debug, Clone)]
pub struct RespondToRating {
    pub rating_id: Uuid,
    pub rated_id: Uuid,
    pub response: String,
}

impl Command for RespondToRating {}
