use uuid::Uuid;

use hamswap_types::{
    listing::Listing,
    rating::{Rating, RatingSort},
};

use crate::cqrs::Query;

/// One server page of active listings, newest first, optionally narrowed by
/// a server-side free-text predicate. The discovery controller refines this
/// page in memory; it never re-queries the store for facet changes.
pub struct BrowseListings {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListingPage {
    pub items: Vec<Listing>,
    pub total_count: u64,
    pub page: u32,
    pub total_pages: u32,
}

impl Query for BrowseListings {
    type Output = ListingPage;
}

/// Fetch one page of a subject's reputation feed, plus the unfiltered total
/// used to decide whether the reviews section renders at all.
pub struct GetReputationFeed {
    pub subject_id: Uuid,
    pub page: u32,
    pub per_page: u32,
    pub star_filter: Option<u8>,
    pub sort: RatingSort,
}

#[derive(Debug, Clone)]
pub struct ReputationPage {
    pub total_unfiltered: u64,
    pub ratings: Vec<Rating>,
    pub total_filtered: u64,
    pub page: u32,
    pub total_pages: u32,
}

impl Query for GetReputationFeed {
    type Output = ReputationPage;
}

/// UX pre-check before showing a "rate user" action. The uniqueness
/// constraint in the store remains the authoritative guard.
pub struct HasRatedListing {
    pub listing_id: Uuid,
    pub rater_id: Uuid,
}

impl Query for HasRatedListing {
    type Output = bool;
}
