use std::sync::Arc;
use tracing::info;

use hamswap_types::Result;
use hamswap_types::errors::AppError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::RespondToRating},
    uow::UnitOfWork,
};

pub struct RespondToRatingCommandHandler {}

impl Default for RespondToRatingCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RespondToRatingCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RespondToRating> for RespondToRatingCommandHandler {
    async fn handle(
        &self,
        command: RespondToRating,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let rating_repo = uow.ratings();

        let rating = rating_repo.get_by_id(command.rating_id).await?;
        if rating.rated_id != command.rated_id {
            return Err(AppError::NotRatingSubject(command.rating_id).into());
        }
        if rating.response.is_some() {
            return Err(AppError::ResponseAlreadyGiven(command.rating_id).into());
        }

        rating_repo
            .set_response(command.rating_id, command.rated_id, &command.response)
            .await?;

        info!(rating_id = %command.rating_id, "Response published");
        Ok(())
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
        config::Config,
        cqrs::commands::RespondToRating,
        test_utils::tests::{MockUnitOfWork, rating_fixture},
        uow::UnitOfWork,
    };

    #[tokio::test]
    async fn test_subject_responds_once() -> Result<()> {
        let subject_id = Uuid::new_v4();
        let rating = rating_fixture(subject_id, 4, 1);
        let rating_id = rating.id;

        let mock_uow = MockUnitOfWork::new();
        mock_uow.rating_repo().add_rating(rating);
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        let config = Arc::new(Config::from_env());
        let handler = RespondToRatingCommandHandler::new();

        handler
            .handle(
                RespondToRating {
                    rating_id,
                    rated_id: subject_id,
                    response: "Thanks, 73!".to_string(),
                },
                &uow,
                &config,
            )
            .await?;

        let stored = uow.ratings().get_by_id(rating_id).await?;
        assert_eq!(stored.response.as_deref(), Some("Thanks, 73!"));
        assert!(stored.response_at.is_some());

        // A second response is rejected.
        let err = handler
            .handle(
                RespondToRating {
                    rating_id,
                    rated_id: subject_id,
                    response: "Again".to_string(),
                },
                &uow,
                &config,
            )
            .await
            .expect_err("response cannot be overwritten");
        assert!(matches!(
            err,
            ApplicationError::App(AppError::ResponseAlreadyGiven(id)) if id == rating_id
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_only_the_rated_user_may_respond() -> Result<()> {
        let subject_id = Uuid::new_v4();
        let rating = rating_fixture(subject_id, 4, 1);
        let rating_id = rating.id;

        let mock_uow = MockUnitOfWork::new();
        mock_uow.rating_repo().add_rating(rating);
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);
        let config = Arc::new(Config::from_env());
        let handler = RespondToRatingCommandHandler::new();

        let err = handler
            .handle(
                RespondToRating {
                    rating_id,
                    rated_id: Uuid::new_v4(),
                    response: "Not mine to answer".to_string(),
                },
                &uow,
                &config,
            )
            .await
            .expect_err("stranger cannot respond");
        assert!(matches!(
            err,
            ApplicationError::App(AppError::NotRatingSubject(id)) if id == rating_id
        ));

        Ok(())
    }
}
