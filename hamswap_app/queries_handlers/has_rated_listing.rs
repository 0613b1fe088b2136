use async_trait::async_trait;
use std::sync::Arc;

use hamswap_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::HasRatedListing},
    uow::UnitOfWork,
};

/// UX pre-check behind the "rate user" action. The store's uniqueness
/// constraint remains the authoritative guard against the race.
pub struct HasRatedListingHandler {}

impl HasRatedListingHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<HasRatedListing> for HasRatedListingHandler {
    async fn handle(
        &self,
        query: HasRatedListing,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<HasRatedListing as Query>::Output, ApplicationError> {
        uow.ratings()
            .exists(query.listing_id, query.rater_id)
            .await
    }
}
