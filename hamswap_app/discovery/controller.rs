use hamswap_types::listing::{Category, Condition, Listing, SortKey};

use crate::cqrs::queries::ListingPage;
use crate::discovery::{FilterState, PageStripItem, has_next, has_previous, page_strip, sorted};
use crate::prefs::{ViewMode, ViewModePrefs};

/// In-memory refinement of one server page of active listings.
///
/// The controller never talks to the store: it is handed a page that was
/// already narrowed server-side (status, optional free-text predicate,
/// offset/limit) and applies the facet evaluator and sort comparator to it.
/// Every state change re-derives the visible list synchronously.
pub struct DiscoveryController {
    page: ListingPage,
    filter: FilterState,
    sort: SortKey,
    prefs: ViewModePrefs,
    visible: Vec<Listing>,
}

impl DiscoveryController {
    pub fn mount(page: ListingPage, mut prefs: ViewModePrefs) -> Self {
        prefs.hydrate();
        let mut controller = Self {
            page,
            filter: FilterState::default(),
            sort: SortKey::default(),
            prefs,
            visible: Vec::new(),
        };
        controller.refresh();
        controller
    }

    fn refresh(&mut self) {
        let filtered = self.filter.apply(&self.page.items);
        self.visible = sorted(&filtered, self.sort);
    }

    /// The server page held no listings at all; the view renders its empty
    /// state and no further computation happens.
    pub fn is_empty(&self) -> bool {
        self.page.items.is_empty()
    }

    /// The current filtered-and-sorted subset, render-ready.
    pub fn visible(&self) -> &[Listing] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> u64 {
        self.page.total_count
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search = query.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.filter.category = category;
        self.refresh();
    }

    pub fn toggle_condition(&mut self, condition: Condition) {
        self.filter.toggle_condition(condition);
        self.refresh();
    }

    pub fn set_min_price_input(&mut self, raw: &str) {
        self.filter.set_min_price_input(raw);
        self.refresh();
    }

    pub fn set_max_price_input(&mut self, raw: &str) {
        self.filter.set_max_price_input(raw);
        self.refresh();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.filter.country = country.into();
        self.refresh();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.filter.city = city.into();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.refresh();
    }

    /// Reset every facet to its identity value and the sort back to newest.
    /// View mode is left untouched.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.sort = SortKey::Newest;
        self.refresh();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.prefs.view_mode()
    }

    /// Persisted through the preference store; the only field that survives
    /// a remount.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.prefs.set_view_mode(view_mode);
    }

    pub fn page_strip(&self) -> Vec<PageStripItem> {
        page_strip(self.page.page, self.page.total_pages)
    }

    pub fn has_previous_page(&self) -> bool {
        has_previous(self.page.page)
    }

    pub fn has_next_page(&self) -> bool {
        has_next(self.page.page, self.page.total_pages)
    }
}
