mod listing_repository;
mod rating_repository;

pub use listing_repository::PostgresListingRepository;
pub use rating_repository::PostgresRatingRepository;
