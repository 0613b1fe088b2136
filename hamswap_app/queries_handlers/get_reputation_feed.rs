use async_trait::async_trait;
use std::sync::Arc;

use hamswap_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{GetReputationFeed, ReputationPage},
    },
    reputation::{FeedParams, fetch_feed},
    uow::UnitOfWork,
};

pub struct GetReputationFeedHandler {}

impl GetReputationFeedHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetReputationFeed> for GetReputationFeedHandler {
    async fn handle(
        &self,
        query: GetReputationFeed,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<GetReputationFeed as Query>::Output, ApplicationError> {
        let page = query.page.max(1);
        let per_page = if query.per_page < 1 {
            config.ratings_per_page
        } else {
            query.per_page
        };

        let params = FeedParams {
            subject_id: query.subject_id,
            page,
            star_filter: query.star_filter,
            sort: query.sort,
        };
        let snapshot = fetch_feed(&params, per_page, uow).await?;

        Ok(ReputationPage {
            total_unfiltered: snapshot.total_unfiltered,
            ratings: snapshot.ratings,
            total_filtered: snapshot.total_filtered,
            page,
            total_pages: snapshot.total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use uuid::Uuid;

    use hamswap_types::Result;
    use hamswap_types::rating::RatingSort;

    use super::*;
    use crate::{
        cqrs::queries::GetReputationFeed,
        test_utils::tests::{MockUnitOfWork, rating_fixture},
        uow::UnitOfWork,
    };

    #[tokio::test]
    async fn test_star_filter_page_beyond_end_is_empty_with_correct_totals() -> Result<()> {
        let subject_id = Uuid::new_v4();
        let mock_uow = MockUnitOfWork::new();
        for day in 1..=3 {
            mock_uow
                .rating_repo()
                .add_rating(rating_fixture(subject_id, 5, day));
        }
        mock_uow
            .rating_repo()
            .add_rating(rating_fixture(subject_id, 2, 4));
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        let config = Arc::new(Config::from_env());
        let handler = GetReputationFeedHandler::new();

        let feed = handler
            .handle(
                GetReputationFeed {
                    subject_id,
                    page: 2,
                    per_page: 5,
                    star_filter: Some(5),
                    sort: RatingSort::Newest,
                },
                &uow,
                &config,
            )
            .await?;

        assert!(feed.ratings.is_empty());
        assert_eq!(feed.total_filtered, 3);
        assert_eq!(feed.total_unfiltered, 4);
        assert_eq!(feed.total_pages, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_absurd_page_number_does_not_overflow_the_offset() -> Result<()> {
        let subject_id = Uuid::new_v4();
        let mock_uow = MockUnitOfWork::new();
        mock_uow
            .rating_repo()
            .add_rating(rating_fixture(subject_id, 5, 1));
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        let config = Arc::new(Config::from_env());
        let handler = GetReputationFeedHandler::new();

        let feed = handler
            .handle(
                GetReputationFeed {
                    subject_id,
                    page: u32::MAX,
                    per_page: u32::MAX,
                    star_filter: None,
                    sort: RatingSort::Newest,
                },
                &uow,
                &config,
            )
            .await?;

        assert!(feed.ratings.is_empty());
        assert_eq!(feed.total_unfiltered, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_sorted_first_page() -> Result<()> {
        let subject_id = Uuid::new_v4();
        let mock_uow = MockUnitOfWork::new();
        mock_uow
            .rating_repo()
            .add_rating(rating_fixture(subject_id, 3, 1));
        mock_uow
            .rating_repo()
            .add_rating(rating_fixture(subject_id, 5, 2));
        mock_uow
            .rating_repo()
            .add_rating(rating_fixture(subject_id, 4, 3));
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        let config = Arc::new(Config::from_env());
        let handler = GetReputationFeedHandler::new();

        let feed = handler
            .handle(
                GetReputationFeed {
                    subject_id,
                    page: 1,
                    per_page: 2,
                    star_filter: None,
                    sort: RatingSort::Highest,
                },
                &uow,
                &config,
            )
            .await?;

        assert_eq!(feed.ratings.len(), 2);
        assert_eq!(feed.ratings[0].stars, 5);
        assert_eq!(feed.ratings[1].stars, 4);
        assert_eq!(feed.total_pages, 2);

        Ok(())
    }
}
