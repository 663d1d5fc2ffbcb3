//! Product catalog module.
//!
//! Contains the product and review types, the loaded product list, and
//! review submission.

mod catalog;
mod product;
mod reviews;

pub use catalog::{Catalog, CatalogHandle};
pub use product::{Product, Review, DEFAULT_IMAGES_BASE};
pub use reviews::{ReviewAggregator, ReviewListing, NO_REVIEWS};
