use async_trait::async_trait;
use std::sync::Arc;

use hamswap_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{BrowseListings, ListingPage},
    },
    uow::UnitOfWork,
};

pub struct BrowseListingsHandler {}

impl BrowseListingsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<BrowseListings> for BrowseListingsHandler {
    async fn handle(
        &self,
        query: BrowseListings,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<BrowseListings as Query>::Output, ApplicationError> {
        let repo = uow.listings();

        // Clamp to sensible defaults to avoid invalid offsets.
        let page = query.page.max(1);
        let per_page = if query.per_page < 1 {
            config.listings_per_page
        } else {
            query.per_page
        };
        // Widen before multiplying; an absurd page number saturates instead
        // of overflowing and simply lands beyond the last row.
        let offset = u32::try_from(u64::from(page - 1) * u64::from(per_page)).unwrap_or(u32::MAX);

        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let (items, total_count) = repo.active_page(search, offset, per_page).await?;
        let total_pages = total_count.div_ceil(u64::from(per_page)) as u32;

        Ok(ListingPage {
            items,
            total_count,
            page,
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hamswap_types::Result;

    use super::*;
    use crate::{
        cqrs::queries::BrowseListings,
        test_utils::tests::{MockUnitOfWork, listing_fixture},
        uow::UnitOfWork,
    };

    #[tokio::test]
    async fn test_browse_listings_paginates_and_counts() -> Result<()> {
        let mock_uow = MockUnitOfWork::new();
        for i in 0..7 {
            mock_uow
                .listing_repo()
                .add_listing(listing_fixture(&format!("Listing {i}"), 100.0 + i as f64));
        }
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        let config = Arc::new(Config::from_env());
        let handler = BrowseListingsHandler::new();

        let page = handler
            .handle(
                BrowseListings {
                    page: 2,
                    per_page: 5,
                    search: None,
                },
                &uow,
                &config,
            )
            .await?;

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_count, 7);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_absurd_page_number_yields_an_empty_page() -> Result<()> {
        let mock_uow = MockUnitOfWork::new();
        mock_uow
            .listing_repo()
            .add_listing(listing_fixture("FT-991A", 1200.0));
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        let config = Arc::new(Config::from_env());
        let handler = BrowseListingsHandler::new();

        let page = handler
            .handle(
                BrowseListings {
                    page: u32::MAX,
                    per_page: u32::MAX,
                    search: None,
                },
                &uow,
                &config,
            )
            .await?;

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_server_side_search_narrows_page_and_total() -> Result<()> {
        let mock_uow = MockUnitOfWork::new();
        mock_uow
            .listing_repo()
            .add_listing(listing_fixture("Yaesu FT-991A", 1200.0));
        mock_uow
            .listing_repo()
            .add_listing(listing_fixture("Icom IC-7300", 1000.0));
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        let config = Arc::new(Config::from_env());
        let handler = BrowseListingsHandler::new();

        let page = handler
            .handle(
                BrowseListings {
                    page: 1,
                    per_page: 20,
                    search: Some("yaesu".to_string()),
                },
                &uow,
                &config,
            )
            .await?;

        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].title, "Yaesu FT-991A");

        Ok(())
    }
}
