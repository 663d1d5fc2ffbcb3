//! Storefront domain types and logic for The Daily Harvest.
//!
//! - **Catalog**: products, reviews, and the shared catalog handle
//! - **Cart**: the session cart store and its handle
//! - **Checkout**: the confirm-then-clear checkout flow and order snapshots
//! - **Admin**: login gate and store-wide sale
//! - **Pages**: text views for every route, plus the router
//!
//! # Example
//!
//! ```rust
//! use harvest_commerce::prelude::*;
//!
//! let cart = CartHandle::new();
//! let apple = Product::new("apple", "Apple", Money::from_decimal(1.25), "apple.jpg");
//! cart.add_to_cart(apple.clone());
//! cart.add_to_cart(apple);
//!
//! let items = cart.cart_items();
//! assert_eq!(items[0].quantity, 2);
//! assert_eq!(calculate_total(&items).display(), "$2.50");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod validate;

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod pages;
pub mod routes;

pub use error::CommerceError;
pub use ids::*;
pub use money::{calculate_total, format_price, LineTotal, Money};
pub use validate::{parse_percent, validate_email};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{calculate_total, format_price, LineTotal, Money};
    pub use crate::validate::validate_email;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogHandle, Product, Review, ReviewAggregator};

    // Cart
    pub use crate::cart::{CartHandle, CartItem, CartStore};

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CheckoutStep, OrderSnapshot};

    // Admin
    pub use crate::admin::{AdminSession, Credentials, LoginForm, Sale, SaleConsole};

    // Pages and routing
    pub use crate::pages::{AdminPage, CartPage, ContactPage, HomePage, LoginPage, ProductsPage};
    pub use crate::routes::{AppContext, Route, Router, View};
}
