mod listing_repository;
mod rating_repository;

pub use listing_repository::ListingRepository;
pub use rating_repository::RatingRepository;
