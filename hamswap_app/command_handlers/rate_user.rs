use std::sync::Arc;
use tracing::info;

use hamswap_types::Result;
use hamswap_types::errors::{AppError, ApplicationError, DbError};
use hamswap_types::rating::NewRating;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::RateUser},
    uow::UnitOfWork,
};

pub struct RateUserCommandHandler {}

impl Default for RateUserCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RateUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RateUser> for RateUserCommandHandler {
    async fn handle(
        &self,
        command: RateUser,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let rating_repo = uow.ratings();

        if !(1..=5).contains(&command.stars) {
            return Err(AppError::InvalidStars(command.stars).into());
        }

        // UX pre-check. The store's uniqueness constraint still guards the
        // race where two submissions slip past this.
        if rating_repo
            .exists(command.listing_id, command.rater_id)
            .await?
        {
            return Err(AppError::AlreadyRated {
                listing_id: command.listing_id,
            }
            .into());
        }

        let rating = NewRating {
            listing_id: command.listing_id,
            rater_id: command.rater_id,
            rated_id: command.rated_id,
            stars: command.stars,
            comment: command.comment,
        };

        match rating_repo.insert(&rating).await {
            Ok(()) => {
                info!(listing_id = %command.listing_id, stars = command.stars, "Rating submitted");
                Ok(())
            }
            Err(ApplicationError::Db(DbError::DuplicateRating { listing_id, .. })) => {
                Err(AppError::AlreadyRated { listing_id }.into())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use uuid::Uuid;

    use hamswap_types::Result;
    use hamswap_types::errors::{AppError, ApplicationError};

    use super::*;
    use crate::{
        config::Config, cqrs::commands::RateUser, test_utils::tests::MockUnitOfWork,
        uow::UnitOfWork,
    };

    fn command() -> RateUser {
        RateUser {
            listing_id: Uuid::new_v4(),
            rater_id: Uuid::new_v4(),
            rated_id: Uuid::new_v4(),
            stars: 5,
            comment: Some("Great seller, fast shipping".to_string()),
        }
    }

    #[tokio::test]
    async fn test_rate_user_success() -> Result<()> {
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::from_env());
        let handler = RateUserCommandHandler::new();
        let command = command();

        handler.handle(command.clone(), &uow, &config).await?;

        assert!(
            uow.ratings()
                .exists(command.listing_id, command.rater_id)
                .await?
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_second_rating_for_same_pair_is_rejected_as_duplicate() -> Result<()> {
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::from_env());
        let handler = RateUserCommandHandler::new();
        let command = command();

        handler.handle(command.clone(), &uow, &config).await?;

        let err = handler
            .handle(command.clone(), &uow, &config)
            .await
            .expect_err("duplicate rating must be rejected");
        assert!(matches!(
            err,
            ApplicationError::App(AppError::AlreadyRated { listing_id })
                if listing_id == command.listing_id
        ));

        // The first rating is untouched, never silently overwritten.
        let (ratings, total) = uow
            .ratings()
            .page_for_subject(command.rated_id, None, Default::default(), 0, 10)
            .await?;
        assert_eq!(total, 1);
        assert_eq!(ratings[0].stars, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_unique_violation_race_surfaces_duplicate_error() -> Result<()> {
        // Simulate the pre-check passing on both sides of a race by writing
        // the conflicting row directly, bypassing the handler's pre-check.
        let mock_uow = MockUnitOfWork::new();
        let config = Arc::new(Config::from_env());
        let handler = RateUserCommandHandler::new();
        let command = command();

        mock_uow.rating_repo().suppress_precheck();
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        handler.handle(command.clone(), &uow, &config).await?;

        // Second insert hits the store constraint even though the pre-check
        // was raced past.
        let err = handler
            .handle(command.clone(), &uow, &config)
            .await
            .expect_err("constraint violation must surface as duplicate");
        assert!(matches!(
            err,
            ApplicationError::App(AppError::AlreadyRated { .. })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_stars_out_of_range_is_rejected() {
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::from_env());
        let handler = RateUserCommandHandler::new();

        let mut command = command();
        command.stars = 6;

        let err = handler
            .handle(command, &uow, &config)
            .await
            .expect_err("six stars is invalid");
        assert!(matches!(
            err,
            ApplicationError::App(AppError::InvalidStars(6))
        ));
    }
}
