//! Commerce error types.

use thiserror::Error;

/// Diagnostic raised when a cart-dependent view is built without a cart handle.
pub const CART_CONTEXT_MISSING: &str = "CartContext must be used within a CartProvider";

/// Diagnostic raised when a catalog-dependent view is built without a catalog handle.
pub const CATALOG_CONTEXT_MISSING: &str = "CatalogContext must be used within a CatalogProvider";

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// A view was constructed outside the scope of a required handle.
    #[error("{0}")]
    ContextUnavailable(&'static str),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product cannot be added because it is out of stock.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// Checkout was started with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Login mismatch.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CommerceError {
    /// Check if this is a programmer/integration error rather than user input.
    pub fn is_context_error(&self) -> bool {
        matches!(self, CommerceError::ContextUnavailable(_))
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
