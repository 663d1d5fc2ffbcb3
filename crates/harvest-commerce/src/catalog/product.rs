//! Product and review types.

use crate::ids::ProductId;
use crate::money::Money;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Default base path for product images.
pub const DEFAULT_IMAGES_BASE: &str = "products/productImages";

/// A product in the catalog.
///
/// Parsed from one `{id}.json` data file. Everything but `reviews` is fixed
/// for the lifetime of a load cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, also the fetch key and cart key.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Short description for listings.
    pub description: String,
    /// Image file name, relative to the images base path.
    pub image: String,
    /// Reviews in submission order.
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Whether the product can be added to the cart.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Create an in-stock product with no reviews.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            image: image.into(),
            reviews: Vec::new(),
            in_stock: true,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set stock availability.
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Image path under `images_base`.
    pub fn image_path(&self, images_base: &str) -> String {
        format!("{}/{}", images_base.trim_end_matches('/'), self.image)
    }
}

/// A shopper review. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Reviewer name.
    pub author: String,
    /// Review text.
    pub comment: String,
    /// ISO-8601 submission timestamp.
    pub date: String,
}

impl Review {
    /// Create a review stamped with the current time.
    pub fn now(author: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            comment: comment.into(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
