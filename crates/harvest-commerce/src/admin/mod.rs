//! Admin module.
//!
//! Contains the login gate and the store-wide sale console.

mod login;
mod sale;

pub use login::{AdminSession, Credentials, LoginForm, INVALID_CREDENTIALS};
pub use sale::{Sale, SaleConsole, INVALID_PERCENT, NO_SALE};
