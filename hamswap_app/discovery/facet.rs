use hamswap_types::listing::{Category, Condition, Listing};

/// All active facets of the listing filter. The empty (default) state is the
/// identity filter and matches every listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: Option<Category>,
    pub conditions: Vec<Condition>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub country: String,
    pub city: String,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl FilterState {
    pub fn is_identity(&self) -> bool {
        *self == FilterState::default()
    }

    /// Parse a raw minimum-price input. Non-numeric input is treated as an
    /// unset bound, never as an error.
    pub fn set_min_price_input(&mut self, raw: &str) {
        self.min_price = raw.trim().parse::<f64>().ok().filter(|p| p.is_finite());
    }

    pub fn set_max_price_input(&mut self, raw: &str) {
        self.max_price = raw.trim().parse::<f64>().ok().filter(|p| p.is_finite());
    }

    /// Add or remove one condition from the selected set.
    pub fn toggle_condition(&mut self, condition: Condition) {
        if let Some(pos) = self.conditions.iter().position(|c| *c == condition) {
            self.conditions.remove(pos);
        } else {
            self.conditions.push(condition);
        }
    }

    /// Whether one listing satisfies every active facet. Facets are ANDed;
    /// missing listing fields are treated as empty strings.
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            let matches_search = contains_ci(&listing.title, &query)
                || contains_ci(listing.description.as_deref().unwrap_or(""), &query)
                || contains_ci(listing.manufacturer.as_deref().unwrap_or(""), &query)
                || contains_ci(listing.model.as_deref().unwrap_or(""), &query);

            if !matches_search {
                return false;
            }
        }

        if let Some(category) = self.category {
            if listing.category != category {
                return false;
            }
        }

        if !self.conditions.is_empty() && !self.conditions.contains(&listing.condition) {
            return false;
        }

        // Both price bounds are inclusive. A min above max simply matches
        // nothing.
        if let Some(min) = self.min_price {
            if listing.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if listing.price > max {
                return false;
            }
        }

        // A listing without location data fails any non-empty location facet.
        if !self.country.is_empty() {
            let listing_country = listing
                .seller
                .as_ref()
                .and_then(|s| s.location_country.as_deref())
                .unwrap_or("");
            if !contains_ci(listing_country, &self.country.to_lowercase()) {
                return false;
            }
        }

        if !self.city.is_empty() {
            let listing_city = listing
                .seller
                .as_ref()
                .and_then(|s| s.location_city.as_deref())
                .unwrap_or("");
            if !contains_ci(listing_city, &self.city.to_lowercase()) {
                return false;
            }
        }

        true
    }

    /// The subset of `listings` matching this filter, in input order.
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        listings
            .iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tests::listing_fixture;
    use hamswap_types::listing::SellerSummary;

    #[test]
    fn test_identity_filter_matches_everything() {
        let listings = vec![
            listing_fixture("Yaesu FT-991A", 1200.0),
            listing_fixture("Icom IC-7300", 1000.0),
        ];
        let filter = FilterState::default();

        assert!(filter.is_identity());
        assert_eq!(filter.apply(&listings), listings);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut listing = listing_fixture("HF rig", 500.0);
        listing.manufacturer = Some("Yaesu".to_string());
        listing.model = Some("FT-891".to_string());

        let mut filter = FilterState::default();
        filter.search = "yaesu".to_string();
        assert!(filter.matches(&listing));

        filter.search = "ft-891".to_string();
        assert!(filter.matches(&listing));

        filter.search = "kenwood".to_string();
        assert!(!filter.matches(&listing));
    }

    #[test]
    fn test_search_tolerates_missing_optional_fields() {
        let mut listing = listing_fixture("Bare listing", 10.0);
        listing.description = None;
        listing.manufacturer = None;
        listing.model = None;

        let mut filter = FilterState::default();
        filter.search = "bare".to_string();
        assert!(filter.matches(&listing));

        filter.search = "absent".to_string();
        assert!(!filter.matches(&listing));
    }

    #[test]
    fn test_condition_set_membership() {
        let mut listing = listing_fixture("Rig", 100.0);
        listing.condition = Condition::Good;

        let mut filter = FilterState::default();
        assert!(filter.matches(&listing));

        filter.conditions = vec![Condition::New, Condition::Excellent];
        assert!(!filter.matches(&listing));

        filter.toggle_condition(Condition::Good);
        assert!(filter.matches(&listing));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let listing = listing_fixture("Rig", 250.0);

        let mut filter = FilterState::default();
        filter.min_price = Some(250.0);
        filter.max_price = Some(250.0);
        assert!(filter.matches(&listing));

        filter.min_price = Some(250.01);
        assert!(!filter.matches(&listing));
    }

    #[test]
    fn test_min_above_max_matches_nothing() {
        let listings = vec![
            listing_fixture("A", 10.0),
            listing_fixture("B", 500.0),
            listing_fixture("C", 10_000.0),
        ];

        let mut filter = FilterState::default();
        filter.min_price = Some(1000.0);
        filter.max_price = Some(20.0);
        assert!(filter.apply(&listings).is_empty());
    }

    #[test]
    fn test_invalid_price_input_unsets_the_bound() {
        let mut filter = FilterState::default();
        filter.set_min_price_input("150");
        assert_eq!(filter.min_price, Some(150.0));

        filter.set_min_price_input("abc");
        assert_eq!(filter.min_price, None);

        filter.set_max_price_input("");
        assert_eq!(filter.max_price, None);
    }

    #[test]
    fn test_location_filter_fails_without_seller_data() {
        let mut with_location = listing_fixture("Rig", 100.0);
        with_location.seller = Some(SellerSummary {
            callsign: "YU1ABC".to_string(),
            display_name: None,
            location_city: Some("Belgrade".to_string()),
            location_country: Some("Serbia".to_string()),
        });
        let mut without_location = listing_fixture("Rig", 100.0);
        without_location.seller = None;

        let mut filter = FilterState::default();
        filter.country = "serb".to_string();
        assert!(filter.matches(&with_location));
        assert!(!filter.matches(&without_location));

        filter.country.clear();
        filter.city = "BELGRADE".to_string();
        assert!(filter.matches(&with_location));
    }
}
