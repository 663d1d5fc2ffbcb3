//! Cart page with the checkout prompt.

use crate::cart::{CartHandle, CartItem};
use crate::catalog::DEFAULT_IMAGES_BASE;
use crate::checkout::{CheckoutFlow, CheckoutStep, OrderSnapshot};
use crate::error::CommerceError;
use crate::money::calculate_total;
use crate::pages::layout::render_layout;

pub const HEADING: &str = "Your Cart";
pub const EMPTY_CART: &str = "Your cart is empty.";
pub const CHECKOUT: &str = "Checkout";
pub const CONFIRM_TITLE: &str = "Are you sure?";
pub const CONFIRM_PROMPT: &str = "Do you want to proceed with the checkout?";
pub const ORDER_PROCESSED: &str = "Your order has been processed!";

#[derive(Debug, Clone)]
pub struct CartPage {
    cart: CartHandle,
    checkout: CheckoutFlow,
    images_base: String,
}

impl CartPage {
    /// Build the page. Fails with [`CommerceError::ContextUnavailable`]
    /// without a cart handle.
    pub fn new(cart: Option<&CartHandle>) -> Result<Self, CommerceError> {
        let cart = CartHandle::require(cart)?;
        Ok(Self {
            checkout: CheckoutFlow::new(cart.clone()),
            cart,
            images_base: DEFAULT_IMAGES_BASE.to_string(),
        })
    }

    pub fn with_images_base(mut self, images_base: impl Into<String>) -> Self {
        self.images_base = images_base.into();
        self
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    /// Press the checkout button.
    pub fn begin_checkout(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.checkout.begin_checkout()
    }

    pub fn cancel_checkout(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.checkout.cancel()
    }

    pub fn confirm_checkout(&mut self) -> Result<&OrderSnapshot, CommerceError> {
        self.checkout.confirm()
    }

    pub fn render(&self) -> String {
        let body = match (self.checkout.step(), self.checkout.order()) {
            (CheckoutStep::Processed, Some(order)) => self.render_processed(order),
            _ => self.render_cart(),
        };
        render_layout(&body)
    }

    fn render_cart(&self) -> String {
        let items = self.cart.cart_items();
        let mut out = format!("{HEADING}\n");
        if items.is_empty() {
            out.push_str(&format!("{EMPTY_CART}\n"));
            return out;
        }

        for item in &items {
            out.push_str(&self.render_item(item));
        }
        out.push_str(&format!("\nTotal: {}\n", calculate_total(&items).display()));
        if self.checkout.can_checkout() {
            out.push_str(&format!("[{CHECKOUT}]\n"));
        }
        if self.checkout.step() == CheckoutStep::Confirming {
            out.push_str(&format!(
                "\n{CONFIRM_TITLE}\n{CONFIRM_PROMPT}\n[Confirm] [Cancel]\n"
            ));
        }
        out
    }

    fn render_processed(&self, order: &OrderSnapshot) -> String {
        let mut out = format!("{ORDER_PROCESSED}\nOrder {}\n", order.id);
        for item in &order.items {
            out.push_str(&self.render_item(item));
        }
        out.push_str(&format!("\nTotal: {}\n", order.total.display()));
        out
    }

    fn render_item(&self, item: &CartItem) -> String {
        format!(
            "\n{}\n  Image: {}\n  Price: {}\n  Quantity: {}\n",
            item.product.name,
            item.product.image_path(&self.images_base),
            item.product.price.display(),
            item.quantity
        )
    }
}
