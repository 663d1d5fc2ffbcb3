//! Shopping cart module.
//!
//! Contains the cart store, its line items, and the shared cart handle.

mod cart;

pub use cart::{CartHandle, CartItem, CartStore};
