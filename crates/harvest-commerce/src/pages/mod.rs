//! Storefront pages.
//!
//! Each page owns the handles it needs, takes user actions as methods, and
//! renders itself to text between the shared header and footer.

pub mod admin;
pub mod cart;
pub mod contact;
pub mod home;
pub mod layout;
pub mod login;
pub mod products;

pub use admin::AdminPage;
pub use cart::CartPage;
pub use contact::{ContactForm, ContactPage};
pub use home::HomePage;
pub use login::LoginPage;
pub use products::{render_review_panel, ProductsPage};
