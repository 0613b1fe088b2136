mod controller;
mod facet;
mod pagination;
mod sort;

pub use controller::DiscoveryController;
pub use facet::FilterState;
pub use pagination::{PageStripItem, has_next, has_previous, page_strip};
pub use sort::{compare, sorted};
