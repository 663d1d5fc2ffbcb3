//! Cart store and line item types.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::catalog::Product;
use crate::error::{CommerceError, CART_CONTEXT_MISSING};
use crate::ids::ProductId;
use crate::money::{calculate_total, LineTotal, Money};
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product as it was when first added.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, at least 1 while the item is in the cart.
    pub quantity: i64,
}

impl CartItem {
    /// Create a line with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Product id, the cart key.
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }
}

impl LineTotal for CartItem {
    fn unit_price(&self) -> Money {
        self.product.price
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// The shopper's in-memory cart.
///
/// Holds at most one item per product id, in order of first add.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, merging with an existing line.
    pub fn add_to_cart(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem::new(product));
    }

    /// Set a line's quantity.
    ///
    /// A quantity <= 0 removes the line. Unknown ids are ignored; this never
    /// creates a line.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == id) {
            item.quantity = quantity;
        }
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.items.retain(|i| &i.product.id != id);
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    /// Current lines in order of first add.
    pub fn cart_items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line by product id.
    pub fn get_item(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Money {
        calculate_total(&self.items)
    }
}

/// Shared handle to the session's cart store.
///
/// Views receive this handle at construction instead of looking the cart up
/// at render time. All mutation goes through the store's operations.
#[derive(Debug, Clone, Default)]
pub struct CartHandle(Rc<RefCell<CartStore>>);

impl CartHandle {
    /// Create a handle around an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an optional handle, failing when the view is out of scope.
    pub fn require(handle: Option<&CartHandle>) -> Result<CartHandle, CommerceError> {
        handle
            .cloned()
            .ok_or(CommerceError::ContextUnavailable(CART_CONTEXT_MISSING))
    }

    /// Borrow the store for reading.
    pub fn read(&self) -> Ref<'_, CartStore> {
        self.0.borrow()
    }

    /// Snapshot of the current lines.
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.0.borrow().cart_items().to_vec()
    }

    /// See [`CartStore::add_to_cart`].
    pub fn add_to_cart(&self, product: Product) {
        self.0.borrow_mut().add_to_cart(product);
    }

    /// See [`CartStore::update_quantity`].
    pub fn update_quantity(&self, id: &ProductId, quantity: i64) {
        self.0.borrow_mut().update_quantity(id, quantity);
    }

    /// See [`CartStore::remove_from_cart`].
    pub fn remove_from_cart(&self, id: &ProductId) {
        self.0.borrow_mut().remove_from_cart(id);
    }

    /// See [`CartStore::clear_cart`].
    pub fn clear_cart(&self) {
        self.0.borrow_mut().clear_cart();
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Product {
        Product::new("apple", "Apple", Money::from_decimal(1.25), "apple.jpg")
    }

    fn grape() -> Product {
        Product::new("grape", "Grape", Money::from_decimal(2.5), "grape.jpg")
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = CartStore::new();
        cart.add_to_cart(apple());

        assert_eq!(cart.cart_items().len(), 1);
        assert_eq!(cart.get_item(&ProductId::new("apple")).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = CartStore::new();
        for _ in 0..5 {
            cart.add_to_cart(apple());
        }

        assert_eq!(cart.cart_items().len(), 1);
        assert_eq!(cart.cart_items()[0].quantity, 5);
    }

    #[test]
    fn test_add_keeps_first_add_order() {
        let mut cart = CartStore::new();
        cart.add_to_cart(apple());
        cart.add_to_cart(grape());
        cart.add_to_cart(apple());

        let ids: Vec<_> = cart.cart_items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["apple", "grape"]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartStore::new();
        cart.add_to_cart(apple());
        cart.update_quantity(&ProductId::new("apple"), 5);

        assert_eq!(cart.cart_items().len(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = CartStore::new();
        cart.add_to_cart(apple());
        cart.update_quantity(&ProductId::new("apple"), 0);
        assert!(cart.is_empty());

        cart.add_to_cart(apple());
        cart.update_quantity(&ProductId::new("apple"), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_never_creates() {
        let mut cart = CartStore::new();
        cart.add_to_cart(grape());
        cart.update_quantity(&ProductId::new("apple"), 4);

        assert_eq!(cart.cart_items().len(), 1);
        assert!(cart.get_item(&ProductId::new("apple")).is_none());
    }

    #[test]
    fn test_remove_from_cart() {
        let mut cart = CartStore::new();
        cart.add_to_cart(apple());
        cart.add_to_cart(grape());
        cart.remove_from_cart(&ProductId::new("apple"));
        cart.remove_from_cart(&ProductId::new("missing"));

        assert_eq!(cart.cart_items().len(), 1);
        assert!(cart.get_item(&ProductId::new("apple")).is_none());
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = CartStore::new();
        cart.add_to_cart(apple());
        cart.add_to_cart(grape());
        cart.clear_cart();
        assert!(cart.is_empty());

        cart.clear_cart();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = CartStore::new();
        cart.add_to_cart(grape());
        cart.add_to_cart(grape());
        cart.add_to_cart(apple());

        assert_eq!(cart.total().amount_cents, 625);
    }

    #[test]
    fn test_require_without_handle() {
        let err = CartHandle::require(None).unwrap_err();
        assert_eq!(err.to_string(), "CartContext must be used within a CartProvider");
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let value = serde_json::to_value(CartItem::new(apple())).unwrap();
        assert_eq!(value["id"], "apple");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["inStock"], true);
    }
}
