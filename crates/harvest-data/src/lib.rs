//! Catalog data access for The Daily Harvest.
//!
//! This crate provides:
//! - `ProductSource` - Where product data comes from
//! - `FetchClient` - HTTP source with timeout/retry
//! - `FileSource` - Data files on local disk
//! - `CatalogLoader` - Concurrent fetch-and-publish of the catalog
//! - `TimeoutConfig` / `RetryPolicy` - Fetch policies

mod client;
mod loader;
mod retry;
mod source;
mod timeout;

pub use client::*;
pub use loader::*;
pub use retry::*;
pub use source::*;
pub use timeout::*;
