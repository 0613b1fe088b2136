pub mod catalog;
pub mod errors;
pub mod listing;
pub mod rating;

pub use errors::Result;
