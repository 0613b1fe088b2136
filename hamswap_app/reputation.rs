//! Paginated, filterable reputation feed for one subject.
//!
//! The feed is re-fetched whenever its parameters change. The two store
//! requests (unfiltered total, filtered page) run concurrently, and stale
//! responses are fenced out by a sequence number rather than cancelled: a
//! response produced under superseded parameters is simply discarded.

use std::cmp::Ordering;

use uuid::Uuid;

use hamswap_types::errors::ApplicationError;
use hamswap_types::rating::{Rating, RatingSort};

use crate::uow::UnitOfWork;

/// Feed ordering. `Highest`/`Lowest` break star ties on recency (newest
/// first); the time sorts use the timestamp alone.
pub fn compare_ratings(a: &Rating, b: &Rating, sort: RatingSort) -> Ordering {
    match sort {
        RatingSort::Newest => b.created_at.cmp(&a.created_at),
        RatingSort::Oldest => a.created_at.cmp(&b.created_at),
        RatingSort::Highest => b
            .stars
            .cmp(&a.stars)
            .then_with(|| b.created_at.cmp(&a.created_at)),
        RatingSort::Lowest => a
            .stars
            .cmp(&b.stars)
            .then_with(|| b.created_at.cmp(&a.created_at)),
    }
}

/// The parameter set a fetch was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedParams {
    pub subject_id: Uuid,
    pub page: u32,
    pub star_filter: Option<u8>,
    pub sort: RatingSort,
}

/// Handle for one in-flight fetch: the parameters that produced it plus the
/// fence sequence number they were current at.
#[derive(Debug, Clone)]
pub struct FeedTicket {
    pub params: FeedParams,
    seq: u64,
}

/// Combined result of the two concurrent store requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedSnapshot {
    pub total_unfiltered: u64,
    pub ratings: Vec<Rating>,
    pub total_filtered: u64,
    pub total_pages: u32,
}

/// Outcome of handing a fetched snapshot back to the controller.
#[derive(Debug)]
pub enum FeedApply {
    /// The snapshot is now the visible state.
    Applied,
    /// The parameters changed while the fetch was in flight; the snapshot
    /// was dropped.
    Discarded,
    /// The requested page fell beyond the filtered total; the controller
    /// reset to page 1 and a new fetch is required.
    Refetch(FeedTicket),
}

/// Issue both feed requests for one parameter set. Safe to call outside the
/// controller (the query handler uses it too).
pub async fn fetch_feed(
    params: &FeedParams,
    per_page: u32,
    uow: &Box<dyn UnitOfWork<'_> + '_>,
) -> Result<FeedSnapshot, ApplicationError> {
    let ratings_repo = uow.ratings();
    let per_page = per_page.max(1);
    let page = params.page.max(1);
    // Widen before multiplying so an absurd page number saturates instead of
    // overflowing.
    let offset = u32::try_from(u64::from(page - 1) * u64::from(per_page)).unwrap_or(u32::MAX);

    let (total_unfiltered, page_result) = tokio::join!(
        ratings_repo.count_for_subject(params.subject_id),
        ratings_repo.page_for_subject(
            params.subject_id,
            params.star_filter,
            params.sort,
            offset,
            per_page,
        ),
    );

    let total_unfiltered = total_unfiltered?;
    let (ratings, total_filtered) = page_result?;
    let total_pages = total_filtered.div_ceil(u64::from(per_page)) as u32;

    Ok(FeedSnapshot {
        total_unfiltered,
        ratings,
        total_filtered,
        total_pages,
    })
}

/// Owner of the feed's filter/sort/page state and the fencing sequence.
/// All mutation happens on the UI thread; only the fetches are async.
pub struct ReputationFeedController {
    params: FeedParams,
    per_page: u32,
    seq: u64,
    loading: bool,
    snapshot: Option<FeedSnapshot>,
}

impl ReputationFeedController {
    pub fn new(subject_id: Uuid, per_page: u32) -> Self {
        Self {
            params: FeedParams {
                subject_id,
                page: 1,
                star_filter: None,
                sort: RatingSort::Newest,
            },
            per_page: per_page.max(1),
            seq: 0,
            loading: false,
            snapshot: None,
        }
    }

    pub fn params(&self) -> &FeedParams {
        &self.params
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last applied snapshot, if any fetch has completed.
    pub fn snapshot(&self) -> Option<&FeedSnapshot> {
        self.snapshot.as_ref()
    }

    /// Whether the reviews section renders at all: only once a snapshot
    /// shows the subject has ever been rated.
    pub fn has_reviews(&self) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|s| s.total_unfiltered > 0)
    }

    fn issue(&mut self) -> FeedTicket {
        self.seq += 1;
        self.loading = true;
        FeedTicket {
            params: self.params.clone(),
            seq: self.seq,
        }
    }

    /// Ticket for the current parameters (initial mount, or a manual
    /// refresh).
    pub fn request(&mut self) -> FeedTicket {
        self.issue()
    }

    /// Changing the star filter resets to page 1.
    pub fn set_star_filter(&mut self, star_filter: Option<u8>) -> FeedTicket {
        self.params.star_filter = star_filter;
        self.params.page = 1;
        self.issue()
    }

    /// Changing the sort resets to page 1.
    pub fn set_sort(&mut self, sort: RatingSort) -> FeedTicket {
        self.params.sort = sort;
        self.params.page = 1;
        self.issue()
    }

    pub fn set_page(&mut self, page: u32) -> FeedTicket {
        self.params.page = page.max(1);
        self.issue()
    }

    /// Hand a fetched snapshot back. Responses from superseded tickets are
    /// discarded; an out-of-range page resets to 1 and asks for a refetch.
    pub fn apply(&mut self, ticket: &FeedTicket, snapshot: FeedSnapshot) -> FeedApply {
        if ticket.seq != self.seq {
            tracing::warn!(
                subject_id = %self.params.subject_id,
                "Discarding stale reputation feed response"
            );
            return FeedApply::Discarded;
        }

        if snapshot.total_pages >= 1 && self.params.page > snapshot.total_pages {
            self.params.page = 1;
            return FeedApply::Refetch(self.issue());
        }

        self.loading = false;
        self.snapshot = Some(snapshot);
        FeedApply::Applied
    }

    /// Serial fetch-and-apply path: issue a request for the current
    /// parameters, await it, apply it, and follow at most one page reset.
    pub async fn refresh(
        &mut self,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<(), ApplicationError> {
        let mut ticket = self.request();
        loop {
            let snapshot = fetch_feed(&ticket.params, self.per_page, uow).await?;
            match self.apply(&ticket, snapshot) {
                FeedApply::Refetch(next) => ticket = next,
                _ => return Ok(()),
            }
        }
    }
}
