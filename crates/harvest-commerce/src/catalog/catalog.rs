//! Loaded product list and its shared handle.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::catalog::{Product, Review};
use crate::error::{CommerceError, CATALOG_CONTEXT_MISSING};
use crate::ids::ProductId;

/// The product list produced by one load cycle.
///
/// Products are read-only to consumers; only review lists grow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    loading: bool,
}

impl Catalog {
    /// Create an empty, idle catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog that already holds `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            loading: false,
        }
    }

    /// True only while a load cycle has fetches in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Products in identifier order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of loaded products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Enter the loading state.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the product list and leave the loading state.
    pub fn finish_load(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loading = false;
    }

    /// Append a review to a product.
    pub fn append_review(&mut self, id: &ProductId, review: Review) -> Result<(), CommerceError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        product.reviews.push(review);
        Ok(())
    }
}

/// Shared handle to the session's catalog.
///
/// The storefront runs on a single event thread, so the handle is a plain
/// reference-counted cell. Borrows must never be held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct CatalogHandle(Rc<RefCell<Catalog>>);

impl CatalogHandle {
    /// Create a handle around an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle around an existing catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self(Rc::new(RefCell::new(catalog)))
    }

    /// Resolve an optional handle, failing when the view is out of scope.
    pub fn require(handle: Option<&CatalogHandle>) -> Result<CatalogHandle, CommerceError> {
        handle
            .cloned()
            .ok_or(CommerceError::ContextUnavailable(CATALOG_CONTEXT_MISSING))
    }

    /// Borrow the catalog for reading.
    pub fn read(&self) -> Ref<'_, Catalog> {
        self.0.borrow()
    }

    /// Check the loading flag.
    pub fn is_loading(&self) -> bool {
        self.0.borrow().is_loading()
    }

    /// Clone a product out of the catalog.
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.0.borrow().product(id).cloned()
    }

    /// Enter the loading state.
    pub fn begin_load(&self) {
        self.0.borrow_mut().begin_load();
    }

    /// Publish a finished load cycle.
    pub fn finish_load(&self, products: Vec<Product>) {
        self.0.borrow_mut().finish_load(products);
    }

    /// Append a review to a product.
    pub fn append_review(&self, id: &ProductId, review: Review) -> Result<(), CommerceError> {
        self.0.borrow_mut().append_review(id, review)
    }
}
