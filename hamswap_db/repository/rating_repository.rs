use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use hamswap_app::repository::RatingRepository;
use hamswap_types::errors::{ApplicationError, DbError, Result};
use hamswap_types::rating::{NewRating, Rating, RatingSort};

use crate::models::{self as db_models};

// Postgres unique_violation; raised by the (listing_id, rater_user_id) index.
const UNIQUE_VIOLATION: &str = "23505";

// Only an absent row means the rating does not exist; everything else stays
// a generic store failure.
fn rating_fetch_error(e: sqlx::Error, rating_id: Uuid) -> ApplicationError {
    match e {
        sqlx::Error::RowNotFound => ApplicationError::Db(DbError::RatingNotFound(rating_id)),
        other => ApplicationError::Db(DbError::Database(other)),
    }
}

/// Implements RatingRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresRatingRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresRatingRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> RatingRepository for PostgresRatingRepository<'a> {
    async fn count_for_subject(&self, subject_id: Uuid) -> Result<u64, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let count: i64 = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM ratings
            WHERE rated_user_id = $1
            "#,
        )
        .bind(subject_id)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(count.max(0) as u64)
    }

    async fn page_for_subject(
        &self,
        subject_id: Uuid,
        star_filter: Option<u8>,
        sort: RatingSort,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Rating>, u64), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let stars = star_filter.map(i16::from);

        // The sort key is one of four fixed clauses, never user input.
        let order_by = match sort {
            RatingSort::Newest => "created_at DESC",
            RatingSort::Oldest => "created_at ASC",
            RatingSort::Highest => "rating DESC, created_at DESC",
            RatingSort::Lowest => "rating ASC, created_at DESC",
        };

        let sql = format!(
            r#"
            SELECT id, listing_id, rater_user_id, rated_user_id, rating,
                   comment, created_at, response, response_at
            FROM ratings
            WHERE rated_user_id = $1
              AND ($2::smallint IS NULL OR rating = $2)
            ORDER BY {order_by}
            LIMIT $3 OFFSET $4
            "#
        );

        let rows = sqlx::query_as::<_, db_models::RatingRow>(&sql)
            .bind(subject_id)
            .bind(stars)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let total: i64 = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM ratings
            WHERE rated_user_id = $1
              AND ($2::smallint IS NULL OR rating = $2)
            "#,
        )
        .bind(subject_id)
        .bind(stars)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let ratings = rows.into_iter().map(|r| r.into()).collect();
        Ok((ratings, total.max(0) as u64))
    }

    async fn exists(&self, listing_id: Uuid, rater_id: Uuid) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let exists: bool = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM ratings
                WHERE listing_id = $1 AND rater_user_id = $2
            )
            "#,
        )
        .bind(listing_id)
        .bind(rater_id)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(exists)
    }

    async fn insert(&self, rating: &NewRating) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO ratings (
                id, listing_id, rater_user_id, rated_user_id, rating, comment
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(rating.listing_id)
        .bind(rating.rater_id)
        .bind(rating.rated_id)
        .bind(i16::from(rating.stars))
        .bind(rating.comment.as_deref())
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| {
            let is_duplicate = e
                .as_database_error()
                .and_then(|d| d.code())
                .is_some_and(|code| code == UNIQUE_VIOLATION);
            if is_duplicate {
                ApplicationError::Db(DbError::DuplicateRating {
                    listing_id: rating.listing_id,
                    rater_id: rating.rater_id,
                })
            } else {
                ApplicationError::Db(DbError::Database(e))
            }
        })?;

        Ok(())
    }

    async fn get_by_id(&self, rating_id: Uuid) -> Result<Rating, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::RatingRow>(
            r#"
            SELECT id, listing_id, rater_user_id, rated_user_id, rating,
                   comment, created_at, response, response_at
            FROM ratings
            WHERE id = $1
            "#,
        )
        .bind(rating_id)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| rating_fetch_error(e, rating_id))?;

        Ok(row.into())
    }

    async fn set_response(
        &self,
        rating_id: Uuid,
        rated_id: Uuid,
        response: &str,
    ) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query(
            r#"
            UPDATE ratings
            SET response = $3, response_at = NOW()
            WHERE id = $1 AND rated_user_id = $2
            "#,
        )
        .bind(rating_id)
        .bind(rated_id)
        .bind(response)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::RatingNotFound(rating_id)));
        }

        Ok(())
    }
}
