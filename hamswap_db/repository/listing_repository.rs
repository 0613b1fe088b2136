use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use hamswap_app::repository::ListingRepository;
use hamswap_types::errors::{ApplicationError, DbError, Result};
use hamswap_types::listing::{Listing, ListingStatus};

use crate::models::{self as db_models};

/// Implements ListingRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresListingRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresListingRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> ListingRepository for PostgresListingRepository<'a> {
    async fn active_page(
        &self,
        search: Option<&str>,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Listing>, u64), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::ListingRow>(
            r#"
            SELECT l.id, l.title, l.description, l.manufacturer, l.model,
                   l.category, l.condition, l.price, l.currency, l.created_at,
                   p.callsign AS seller_callsign,
                   p.display_name AS seller_display_name,
                   p.location_city AS seller_city,
                   p.location_country AS seller_country
            FROM listings l
            LEFT JOIN profiles p ON p.user_id = l.seller_id
            WHERE l.status = $4
              AND ($1::text IS NULL
                   OR l.title ILIKE '%' || $1 || '%'
                   OR l.description ILIKE '%' || $1 || '%')
            ORDER BY l.created_at DESC NULLS LAST
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search)
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .bind(ListingStatus::Active.as_str())
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let total: i64 = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM listings l
            WHERE l.status = $2
              AND ($1::text IS NULL
                   OR l.title ILIKE '%' || $1 || '%'
                   OR l.description ILIKE '%' || $1 || '%')
            "#,
        )
        .bind(search)
        .bind(ListingStatus::Active.as_str())
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let listings = rows.into_iter().map(|r| r.into()).collect();
        Ok((listings, total.max(0) as u64))
    }
}
