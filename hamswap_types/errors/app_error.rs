use thiserror::Error;
use uuid::Uuid;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("You have already rated this user for this listing")]
    AlreadyRated { listing_id: Uuid },

    #[error("A rating must be between 1 and 5 stars, got {0}")]
    InvalidStars(u8),

    #[error("Only the rated user can respond to rating {0}")]
    NotRatingSubject(Uuid),

    #[error("Rating {0} already has a response")]
    ResponseAlreadyGiven(Uuid),
}
