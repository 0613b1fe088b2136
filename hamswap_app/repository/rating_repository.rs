use uuid::Uuid;

use hamswap_types::errors::ApplicationError;
use hamswap_types::rating::{NewRating, Rating, RatingSort};

#[async_trait::async_trait]
pub trait RatingRepository: Send + Sync {
    /// Total number of ratings left for a subject, ignoring any filter.
    async fn count_for_subject(&self, subject_id: Uuid) -> Result<u64, ApplicationError>;

    /// One filtered, sorted page of a subject's ratings plus the filtered
    /// total count.
    async fn page_for_subject(
        &self,
        subject_id: Uuid,
        star_filter: Option<u8>,
        sort: RatingSort,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Rating>, u64), ApplicationError>;

    /// Whether a rating already exists for this (listing, rater) pair.
    async fn exists(&self, listing_id: Uuid, rater_id: Uuid) -> Result<bool, ApplicationError>;

    /// Insert a rating. A uniqueness violation on (listing, rater) surfaces
    /// as `DbError::DuplicateRating`, not as a generic database error.
    async fn insert(&self, rating: &NewRating) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, rating_id: Uuid) -> Result<Rating, ApplicationError>;

    /// Store the rated user's response text on an existing rating.
    async fn set_response(
        &self,
        rating_id: Uuid,
        rated_id: Uuid,
        response: &str,
    ) -> Result<(), ApplicationError>;
}
