mod browse_listings;
mod get_reputation_feed;
mod has_rated_listing;

pub use browse_listings::BrowseListingsHandler;
pub use get_reputation_feed::GetReputationFeedHandler;
pub use has_rated_listing::HasRatedListingHandler;
