use hamswap_types::errors::ApplicationError;
use hamswap_types::listing::Listing;

#[async_trait::async_trait]
pub trait ListingRepository: Send + Sync {
    /// One page of active listings, newest first. `search` is the optional
    /// server-side free-text predicate on title and description. Returns the
    /// page items plus the total count matching the predicate.
    async fn active_page(
        &self,
        search: Option<&str>,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Listing>, u64), ApplicationError>;
}
