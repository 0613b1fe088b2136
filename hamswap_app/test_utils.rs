#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    };
    use uuid::Uuid;

    use chrono::{TimeZone, Utc};
    use hamswap_types::{
        errors::{ApplicationError, DbError},
        listing::{Category, Condition, Currency, Listing},
        rating::{NewRating, Rating, RatingSort},
    };

    use crate::{
        repository::{ListingRepository, RatingRepository},
        reputation::compare_ratings,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// A minimal active listing for tests. Timestamps are spaced out so
    /// newest-first ordering is deterministic.
    pub fn listing_fixture(title: &str, price: f64) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: Some(format!("{title} in tested, working order")),
            manufacturer: None,
            model: None,
            category: Category::TransceiverHf,
            condition: Condition::Good,
            price,
            currency: Currency::Eur,
            created_at: Some(Utc::now()),
            seller: None,
        }
    }

    pub fn rating_fixture(rated_id: Uuid, stars: u8, day: u32) -> Rating {
        Rating {
            id: Uuid::new_v4(),
            listing_id: Uuid::new_v4(),
            rater_id: Uuid::new_v4(),
            rated_id,
            stars,
            comment: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
            response: None,
            response_at: None,
        }
    }

    #[derive(Default, Clone)]
    pub struct MockListingRepository {
        listings: Arc<Mutex<Vec<Listing>>>,
    }

    impl MockListingRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_listing(&self, listing: Listing) {
            self.listings.lock().unwrap().push(listing);
        }
    }

    #[async_trait]
    impl ListingRepository for MockListingRepository {
        async fn active_page(
            &self,
            search: Option<&str>,
            offset: u32,
            limit: u32,
        ) -> Result<(Vec<Listing>, u64), ApplicationError> {
            let listings = self.listings.lock().unwrap().clone();

            // Mirror the server-side predicate: title or description only.
            let mut matching: Vec<Listing> = listings
                .into_iter()
                .filter(|l| match search {
                    Some(q) => {
                        let q = q.to_lowercase();
                        l.title.to_lowercase().contains(&q)
                            || l.description
                                .as_deref()
                                .unwrap_or("")
                                .to_lowercase()
                                .contains(&q)
                    }
                    None => true,
                })
                .collect();
            matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

            let total = matching.len() as u64;
            let page = matching
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();

            Ok((page, total))
        }
    }

    #[derive(Default, Clone)]
    pub struct MockRatingRepository {
        ratings: Arc<Mutex<Vec<Rating>>>,
        // When set, `exists` always reports false, simulating the pre-check
        // racing past a concurrent insert.
        precheck_suppressed: Arc<AtomicBool>,
    }

    impl MockRatingRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_rating(&self, rating: Rating) {
            self.ratings.lock().unwrap().push(rating);
        }

        pub fn suppress_precheck(&self) {
            self.precheck_suppressed.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl RatingRepository for MockRatingRepository {
        async fn count_for_subject(&self, subject_id: Uuid) -> Result<u64, ApplicationError> {
            let ratings = self.ratings.lock().unwrap();
            Ok(ratings.iter().filter(|r| r.rated_id == subject_id).count() as u64)
        }

        async fn page_for_subject(
            &self,
            subject_id: Uuid,
            star_filter: Option<u8>,
            sort: RatingSort,
            offset: u32,
            limit: u32,
        ) -> Result<(Vec<Rating>, u64), ApplicationError> {
            let ratings = self.ratings.lock().unwrap().clone();

            let mut matching: Vec<Rating> = ratings
                .into_iter()
                .filter(|r| r.rated_id == subject_id)
                .filter(|r| star_filter.is_none_or(|stars| r.stars == stars))
                .collect();
            matching.sort_by(|a, b| compare_ratings(a, b, sort));

            let total = matching.len() as u64;
            let page = matching
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();

            Ok((page, total))
        }

        async fn exists(
            &self,
            listing_id: Uuid,
            rater_id: Uuid,
        ) -> Result<bool, ApplicationError> {
            if self.precheck_suppressed.load(Ordering::SeqCst) {
                return Ok(false);
            }
            let ratings = self.ratings.lock().unwrap();
            Ok(ratings
                .iter()
                .any(|r| r.listing_id == listing_id && r.rater_id == rater_id))
        }

        async fn insert(&self, rating: &NewRating) -> Result<(), ApplicationError> {
            let mut ratings = self.ratings.lock().unwrap();

            // The uniqueness constraint, enforced the way the store would.
            if ratings
                .iter()
                .any(|r| r.listing_id == rating.listing_id && r.rater_id == rating.rater_id)
            {
                return Err(ApplicationError::Db(DbError::DuplicateRating {
                    listing_id: rating.listing_id,
                    rater_id: rating.rater_id,
                }));
            }

            ratings.push(Rating {
                id: Uuid::new_v4(),
                listing_id: rating.listing_id,
                rater_id: rating.rater_id,
                rated_id: rating.rated_id,
                stars: rating.stars,
                comment: rating.comment.clone(),
                created_at: Utc::now(),
                response: None,
                response_at: None,
            });
            Ok(())
        }

        async fn get_by_id(&self, rating_id: Uuid) -> Result<Rating, ApplicationError> {
            let ratings = self.ratings.lock().unwrap();
            ratings
                .iter()
                .find(|r| r.id == rating_id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::RatingNotFound(rating_id)))
        }

        async fn set_response(
            &self,
            rating_id: Uuid,
            rated_id: Uuid,
            response: &str,
        ) -> Result<(), ApplicationError> {
            let mut ratings = self.ratings.lock().unwrap();
            let rating = ratings
                .iter_mut()
                .find(|r| r.id == rating_id && r.rated_id == rated_id)
                .ok_or(ApplicationError::Db(DbError::RatingNotFound(rating_id)))?;

            rating.response = Some(response.to_string());
            rating.response_at = Some(Utc::now());
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        listings: MockListingRepository,
        ratings: MockRatingRepository,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn listing_repo(&self) -> &MockListingRepository {
            &self.listings
        }

        pub fn rating_repo(&self) -> &MockRatingRepository {
            &self.ratings
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn listings(&self) -> Arc<dyn ListingRepository + 'a> {
            Arc::new(self.listings.clone())
        }

        fn ratings(&self) -> Arc<dyn RatingRepository + 'a> {
            Arc::new(self.ratings.clone())
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    /// Provider handing out clones that share the same in-memory tables, so
    /// state survives across `AppBus` dispatches.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        uow: MockUnitOfWork,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn uow(&self) -> &MockUnitOfWork {
            &self.uow
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            Ok(Box::new(self.uow.clone()))
        }
    }
}
