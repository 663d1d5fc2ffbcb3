//! Checkout flow state machine.

use crate::cart::CartHandle;
use crate::checkout::OrderSnapshot;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Cart review, checkout not started.
    Browsing,
    /// Confirmation prompt open.
    Confirming,
    /// Order placed. Terminal.
    Processed,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Browsing => "browsing",
            CheckoutStep::Confirming => "confirming",
            CheckoutStep::Processed => "processed",
        }
    }
}

/// One checkout attempt against the live cart.
///
/// `Browsing -> Confirming -> Processed`, with `Confirming -> Browsing` on
/// cancel. Confirming snapshots the cart before clearing it.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    cart: CartHandle,
    step: CheckoutStep,
    order: Option<OrderSnapshot>,
}

impl CheckoutFlow {
    /// Create a new checkout flow over the session cart.
    pub fn new(cart: CartHandle) -> Self {
        Self {
            cart,
            step: CheckoutStep::Browsing,
            order: None,
        }
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The placed order, once processed.
    pub fn order(&self) -> Option<&OrderSnapshot> {
        self.order.as_ref()
    }

    /// Whether the checkout action is available.
    pub fn can_checkout(&self) -> bool {
        self.step == CheckoutStep::Browsing && !self.cart.is_empty()
    }

    /// Open the confirmation prompt. Leaves the cart untouched.
    pub fn begin_checkout(&mut self) -> Result<CheckoutStep, CommerceError> {
        if self.step != CheckoutStep::Browsing {
            return Err(self.invalid(CheckoutStep::Confirming));
        }
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        self.step = CheckoutStep::Confirming;
        Ok(self.step)
    }

    /// Dismiss the confirmation prompt. Leaves the cart untouched.
    pub fn cancel(&mut self) -> Result<CheckoutStep, CommerceError> {
        if self.step != CheckoutStep::Confirming {
            return Err(self.invalid(CheckoutStep::Browsing));
        }
        self.step = CheckoutStep::Browsing;
        Ok(self.step)
    }

    /// Place the order: snapshot the cart, then clear it.
    pub fn confirm(&mut self) -> Result<&OrderSnapshot, CommerceError> {
        if self.step != CheckoutStep::Confirming {
            return Err(self.invalid(CheckoutStep::Processed));
        }

        let order = OrderSnapshot::capture(self.cart.cart_items());
        self.cart.clear_cart();
        info!(
            order_id = %order.id,
            lines = order.items.len(),
            total = %order.total,
            "checkout processed"
        );

        self.step = CheckoutStep::Processed;
        Ok(self.order.insert(order))
    }

    /// Check if checkout is complete.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Processed
    }

    fn invalid(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;
    use crate::ProductId;

    fn filled_cart() -> CartHandle {
        let cart = CartHandle::new();
        let first = Product::new("1", "Test Product 1", Money::from_decimal(29.99), "test1.jpg");
        cart.add_to_cart(first.clone());
        cart.add_to_cart(first);
        cart.add_to_cart(Product::new("2", "Test Product 2", Money::from_decimal(49.99), "test2.jpg"));
        cart
    }

    #[test]
    fn test_checkout_creation() {
        let flow = CheckoutFlow::new(filled_cart());
        assert_eq!(flow.step(), CheckoutStep::Browsing);
        assert!(flow.can_checkout());
        assert!(flow.order().is_none());
    }

    #[test]
    fn test_empty_cart_cannot_checkout() {
        let mut flow = CheckoutFlow::new(CartHandle::new());
        assert!(!flow.can_checkout());
        assert_eq!(flow.begin_checkout(), Err(CommerceError::EmptyCart));
        assert_eq!(flow.step(), CheckoutStep::Browsing);
    }

    #[test]
    fn test_confirm_snapshots_then_clears() {
        let cart = filled_cart();
        let before = cart.cart_items();
        let mut flow = CheckoutFlow::new(cart.clone());

        flow.begin_checkout().unwrap();
        assert_eq!(cart.cart_items(), before);

        let order = flow.confirm().unwrap().clone();
        assert_eq!(order.items, before);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[1].quantity, 1);
        assert!(cart.is_empty());
        assert!(flow.is_complete());
    }

    #[test]
    fn test_cancel_leaves_cart_untouched() {
        let cart = filled_cart();
        let before = cart.cart_items();
        let mut flow = CheckoutFlow::new(cart.clone());

        for _ in 0..2 {
            flow.begin_checkout().unwrap();
            flow.cancel().unwrap();
            assert_eq!(flow.step(), CheckoutStep::Browsing);
        }
        assert_eq!(cart.cart_items(), before);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_cart_changes() {
        let cart = filled_cart();
        let mut flow = CheckoutFlow::new(cart.clone());
        flow.begin_checkout().unwrap();
        flow.confirm().unwrap();

        cart.add_to_cart(Product::new("3", "Late", Money::new(100), "late.jpg"));
        let order = flow.order().unwrap();
        assert_eq!(order.items.len(), 2);
        assert!(order.items.iter().all(|i| i.id() != &ProductId::new("3")));
    }

    #[test]
    fn test_invalid_transitions() {
        let mut flow = CheckoutFlow::new(filled_cart());
        assert!(flow.confirm().is_err());
        assert!(flow.cancel().is_err());

        flow.begin_checkout().unwrap();
        assert!(flow.begin_checkout().is_err());
        flow.confirm().unwrap();

        assert!(flow.begin_checkout().is_err());
        assert!(flow.cancel().is_err());
        assert!(flow.confirm().is_err());
    }
}
