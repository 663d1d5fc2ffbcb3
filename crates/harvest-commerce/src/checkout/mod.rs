//! Checkout module.
//!
//! Contains the checkout state machine and the order snapshot it produces.

mod flow;
mod order;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::OrderSnapshot;
