//! Review submission and the "product under review" selection.

use tracing::debug;

use crate::catalog::{CatalogHandle, Product, Review};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Text shown for a product with no reviews.
pub const NO_REVIEWS: &str = "No reviews yet.";

/// How a product's review list should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewListing<'a> {
    /// Nothing submitted yet.
    Empty,
    /// Reviews in submission order.
    Reviews(&'a [Review]),
}

impl<'a> ReviewListing<'a> {
    /// Build the listing for a product.
    pub fn of(product: &'a Product) -> Self {
        if product.reviews.is_empty() {
            ReviewListing::Empty
        } else {
            ReviewListing::Reviews(&product.reviews)
        }
    }
}

/// Appends reviews to catalog products and tracks which product, if any,
/// has its review panel open.
#[derive(Debug, Clone)]
pub struct ReviewAggregator {
    catalog: CatalogHandle,
    selected_product_id: Option<ProductId>,
}

impl ReviewAggregator {
    /// Create an aggregator over a catalog.
    pub fn new(catalog: CatalogHandle) -> Self {
        Self {
            catalog,
            selected_product_id: None,
        }
    }

    /// Currently selected product id.
    pub fn selected_product_id(&self) -> Option<&ProductId> {
        self.selected_product_id.as_ref()
    }

    /// Snapshot of the selected product, including its current reviews.
    pub fn selected_product(&self) -> Option<Product> {
        self.selected_product_id
            .as_ref()
            .and_then(|id| self.catalog.product(id))
    }

    /// Open the review panel for a product.
    pub fn open(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        if self.catalog.product(product_id).is_none() {
            return Err(CommerceError::ProductNotFound(product_id.to_string()));
        }
        self.selected_product_id = Some(product_id.clone());
        Ok(())
    }

    /// Close the review panel.
    pub fn close(&mut self) {
        self.selected_product_id = None;
    }

    /// Append a review stamped with the current time and close the panel.
    ///
    /// Author and comment must be non-blank. On error the selection is left
    /// as it was.
    pub fn submit_review(
        &mut self,
        product_id: &ProductId,
        author: &str,
        comment: &str,
    ) -> Result<Review, CommerceError> {
        let author = author.trim();
        let comment = comment.trim();
        if author.is_empty() || comment.is_empty() {
            return Err(CommerceError::ValidationError(
                "review needs an author and a comment".to_string(),
            ));
        }

        let review = Review::now(author, comment);
        self.catalog.append_review(product_id, review.clone())?;
        debug!(product_id = %product_id, author, "review submitted");

        self.selected_product_id = None;
        Ok(review)
    }
}
