use thiserror::Error;
use uuid::Uuid;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Rating with ID {0} not found")]
    RatingNotFound(Uuid),

    #[error("Listing {listing_id} was already rated by user {rater_id}")]
    DuplicateRating { listing_id: Uuid, rater_id: Uuid },

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
