//! Client-side result management.
//!
//! This layer owns the records returned by the last successful search and
//! derives everything the renderer needs from them without touching the
//! network.
//!
//! # Modules
//!
//! - [`store`]: The owned result set with its letter facet and current page
//! - [`view`]: Pure filtering and page slicing
//! - [`pagination`]: Page bounds and navigation against a fixed page size
//! - [`alphabet`]: First-letter facet derived from the display-name field

pub mod alphabet;
pub mod pagination;
pub mod store;
pub mod view;

pub use alphabet::AlphabetFilter;
pub use pagination::{page_count, Pagination, PAGE_SIZE};
pub use store::ResultStore;
