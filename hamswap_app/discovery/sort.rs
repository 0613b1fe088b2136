use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use hamswap_types::listing::{Listing, SortKey};

fn created_at_or_epoch(listing: &Listing) -> DateTime<Utc> {
    // A listing without a timestamp sorts as the oldest possible.
    listing.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Pure comparator over two listings for one sort key. Price keys have no
/// secondary key; ties keep their input order under a stable sort.
pub fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => created_at_or_epoch(b).cmp(&created_at_or_epoch(a)),
        SortKey::Oldest => created_at_or_epoch(a).cmp(&created_at_or_epoch(b)),
        SortKey::PriceLow => a.price.total_cmp(&b.price),
        SortKey::PriceHigh => b.price.total_cmp(&a.price),
    }
}

/// A sorted copy of `listings`. The input is never reordered in place.
pub fn sorted(listings: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut result = listings.to_vec();
    result.sort_by(|a, b| compare(a, b, key));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::listing_fixture;
    use chrono::TimeZone;

    fn priced(title: &str, price: f64) -> Listing {
        listing_fixture(title, price)
    }

    #[test]
    fn test_price_sorts_are_exact_reversals_without_ties() {
        let listings = vec![priced("A", 30.0), priced("B", 10.0), priced("C", 20.0)];

        let low = sorted(&listings, SortKey::PriceLow);
        let mut high = sorted(&listings, SortKey::PriceHigh);
        high.reverse();

        assert_eq!(low, high);
        assert_eq!(
            low.iter().map(|l| l.title.as_str()).collect::<Vec<_>>(),
            vec!["B", "C", "A"]
        );
    }

    #[test]
    fn test_missing_timestamp_sorts_oldest() {
        let mut dated = priced("dated", 1.0);
        dated.created_at = Some(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap());
        let mut undated = priced("undated", 1.0);
        undated.created_at = None;

        let newest = sorted(&[undated.clone(), dated.clone()], SortKey::Newest);
        assert_eq!(newest[0].title, "dated");

        let oldest = sorted(&[dated, undated], SortKey::Oldest);
        assert_eq!(oldest[0].title, "undated");
    }

    #[test]
    fn test_sorting_does_not_mutate_the_input() {
        let listings = vec![priced("A", 30.0), priced("B", 10.0)];
        let before = listings.clone();
        let _ = sorted(&listings, SortKey::PriceLow);
        assert_eq!(listings, before);
    }

    #[test]
    fn test_equal_prices_keep_input_order() {
        let first = priced("first", 50.0);
        let second = priced("second", 50.0);
        let result = sorted(&[first, second], SortKey::PriceLow);
        assert_eq!(result[0].title, "first");
        assert_eq!(result[1].title, "second");
    }
}
