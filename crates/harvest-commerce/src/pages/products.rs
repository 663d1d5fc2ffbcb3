//! Product listing with add-to-cart and the review panel.

use crate::admin::Sale;
use crate::cart::CartHandle;
use crate::catalog::{
    CatalogHandle, Product, Review, ReviewAggregator, ReviewListing, DEFAULT_IMAGES_BASE,
};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::pages::layout::render_layout;

pub const LOADING: &str = "Loading products...";
pub const HEADING: &str = "Our Products";
pub const ADD_TO_CART: &str = "Add to Cart";
pub const OUT_OF_STOCK: &str = "Out of Stock";

/// The products page. Needs both the cart and the catalog.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    cart: CartHandle,
    catalog: CatalogHandle,
    reviews: ReviewAggregator,
    sale: Sale,
    images_base: String,
}

impl ProductsPage {
    /// Build the page from the session handles.
    ///
    /// Fails with [`CommerceError::ContextUnavailable`] when either handle is
    /// missing. The cart is checked first.
    pub fn new(
        cart: Option<&CartHandle>,
        catalog: Option<&CatalogHandle>,
    ) -> Result<Self, CommerceError> {
        let cart = CartHandle::require(cart)?;
        let catalog = CatalogHandle::require(catalog)?;
        Ok(Self {
            cart,
            reviews: ReviewAggregator::new(catalog.clone()),
            catalog,
            sale: Sale::default(),
            images_base: DEFAULT_IMAGES_BASE.to_string(),
        })
    }

    pub fn with_sale(mut self, sale: Sale) -> Self {
        self.sale = sale;
        self
    }

    pub fn with_images_base(mut self, images_base: impl Into<String>) -> Self {
        self.images_base = images_base.into();
        self
    }

    /// Add one unit of a listed product to the cart.
    pub fn add_to_cart(&self, id: &ProductId) -> Result<(), CommerceError> {
        let product = self
            .catalog
            .product(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        if !product.in_stock {
            return Err(CommerceError::OutOfStock(id.to_string()));
        }
        self.cart.add_to_cart(product);
        Ok(())
    }

    /// Open the review panel for a product.
    pub fn open_reviews(&mut self, id: &ProductId) -> Result<(), CommerceError> {
        self.reviews.open(id)
    }

    pub fn close_reviews(&mut self) {
        self.reviews.close();
    }

    /// Submit a review for the product whose panel is open.
    pub fn submit_review(&mut self, author: &str, comment: &str) -> Result<Review, CommerceError> {
        let id = self.reviews.selected_product_id().cloned().ok_or_else(|| {
            CommerceError::ValidationError("no product selected for review".to_string())
        })?;
        self.reviews.submit_review(&id, author, comment)
    }

    pub fn reviews(&self) -> &ReviewAggregator {
        &self.reviews
    }

    pub fn render(&self) -> String {
        let catalog = self.catalog.read();
        if catalog.is_loading() {
            return render_layout(LOADING);
        }

        let mut body = format!("{HEADING}\n");
        if self.sale.is_active() {
            body.push_str(&format!("{}\n", self.sale.message()));
        }
        for product in catalog.products() {
            body.push('\n');
            body.push_str(&self.render_product(product));
        }
        drop(catalog);

        if let Some(product) = self.reviews.selected_product() {
            body.push('\n');
            body.push_str(&render_review_panel(&product));
        }
        render_layout(&body)
    }

    fn render_product(&self, product: &Product) -> String {
        let sale_price = self.sale.apply(product.price);
        let price = if sale_price != product.price {
            format!("{} (was {})", sale_price.display(), product.price.display())
        } else {
            product.price.display()
        };
        let action = if product.in_stock {
            format!("[{ADD_TO_CART}]")
        } else {
            format!("[{OUT_OF_STOCK}] (disabled)")
        };

        let description = if product.description.is_empty() {
            String::new()
        } else {
            format!("  {}\n", product.description)
        };
        format!(
            "{}\n  {price}\n  Image: {}\n{description}  {action}\n",
            product.name,
            product.image_path(&self.images_base),
        )
    }
}

/// Render the review panel for one product.
pub fn render_review_panel(product: &Product) -> String {
    let mut out = format!("Reviews for {}\n", product.name);
    match ReviewListing::of(product) {
        ReviewListing::Empty => out.push_str(&format!("  {}\n", crate::catalog::NO_REVIEWS)),
        ReviewListing::Reviews(reviews) => {
            for review in reviews {
                out.push_str(&format!(
                    "  {} ({})\n    {}\n",
                    review.author, review.date, review.comment
                ));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{Credentials, LoginForm, SaleConsole};
    use crate::catalog::Catalog;
    use crate::error::{CART_CONTEXT_MISSING, CATALOG_CONTEXT_MISSING};
    use crate::money::Money;

    fn catalog() -> CatalogHandle {
        CatalogHandle::from_catalog(Catalog::with_products(vec![
            Product::new("apple", "Apple", Money::new(125), "apple.jpg")
                .with_description("Crisp and sweet."),
            Product::new("grapes", "Grapes", Money::new(350), "grapes.jpg").with_in_stock(false),
        ]))
    }

    #[test]
    fn test_requires_handles() {
        let cart = CartHandle::new();
        let catalog = catalog();

        let err = ProductsPage::new(None, Some(&catalog)).unwrap_err();
        assert_eq!(err, CommerceError::ContextUnavailable(CART_CONTEXT_MISSING));
        assert_eq!(err.to_string(), "CartContext must be used within a CartProvider");

        let err = ProductsPage::new(Some(&cart), None).unwrap_err();
        assert_eq!(err, CommerceError::ContextUnavailable(CATALOG_CONTEXT_MISSING));
    }

    #[test]
    fn test_loading_then_listing() {
        let cart = CartHandle::new();
        let catalog = CatalogHandle::new();
        let page = ProductsPage::new(Some(&cart), Some(&catalog)).unwrap();

        catalog.begin_load();
        let loading = page.render();
        assert!(loading.contains("Loading products..."));
        assert!(!loading.contains("Our Products"));

        catalog.finish_load(vec![Product::new("apple", "Apple", Money::new(125), "apple.jpg")]);
        let listing = page.render();
        assert!(!listing.contains("Loading products..."));
        assert!(listing.contains("Our Products"));
        assert!(listing.contains("Apple"));
        assert!(listing.contains("$1.25"));
        assert!(listing.contains("products/productImages/apple.jpg"));
    }

    #[test]
    fn test_add_to_cart_and_out_of_stock() {
        let cart = CartHandle::new();
        let page = ProductsPage::new(Some(&cart), Some(&catalog())).unwrap();

        page.add_to_cart(&ProductId::new("apple")).unwrap();
        assert_eq!(cart.cart_items().len(), 1);
        assert_eq!(cart.cart_items()[0].product.name, "Apple");

        let err = page.add_to_cart(&ProductId::new("grapes")).unwrap_err();
        assert_eq!(err, CommerceError::OutOfStock("grapes".to_string()));
        let err = page.add_to_cart(&ProductId::new("kiwi")).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("kiwi".to_string()));
        assert_eq!(cart.cart_items().len(), 1);

        let listing = page.render();
        assert!(listing.contains("[Add to Cart]"));
        assert!(listing.contains("[Out of Stock] (disabled)"));
    }

    #[test]
    fn test_review_panel() {
        let catalog = catalog();
        let mut page = ProductsPage::new(Some(&CartHandle::new()), Some(&catalog)).unwrap();

        page.open_reviews(&ProductId::new("apple")).unwrap();
        let rendered = page.render();
        assert!(rendered.contains("Reviews for Apple"));
        assert!(rendered.contains("No reviews yet."));

        page.submit_review("Taylor", "Excellent fruit.").unwrap();
        assert!(page.reviews().selected_product_id().is_none());
        let apple = catalog.product(&ProductId::new("apple")).unwrap();
        assert_eq!(apple.reviews.len(), 1);
        assert_eq!(apple.reviews[0].comment, "Excellent fruit.");

        page.open_reviews(&ProductId::new("apple")).unwrap();
        assert!(page.render().contains("Excellent fruit."));

        page.close_reviews();
        assert!(page.reviews().selected_product_id().is_none());
        assert!(!page.render().contains("Reviews for Apple"));
    }

    #[test]
    fn test_submit_review_without_selection() {
        let mut page = ProductsPage::new(Some(&CartHandle::new()), Some(&catalog())).unwrap();
        assert!(matches!(
            page.submit_review("Taylor", "Nice"),
            Err(CommerceError::ValidationError(_))
        ));
    }

    #[test]
    fn test_sale_prices() {
        let page = ProductsPage::new(Some(&CartHandle::new()), Some(&catalog()))
            .unwrap()
            .with_sale(Sale::new(20.0));
        let rendered = page.render();
        assert!(rendered.contains("All products are 20% off!"));
        assert!(rendered.contains("$1.00 (was $1.25)"));
    }

    #[test]
    fn test_extreme_sale_renders() {
        let mut form = LoginForm::new(Credentials::default());
        form.set_username("admin");
        form.set_password("admin");
        let mut console = SaleConsole::new(form.submit().unwrap());
        console.set_input("-1e300");
        let sale = console.submit().unwrap();

        let page = ProductsPage::new(Some(&CartHandle::new()), Some(&catalog()))
            .unwrap()
            .with_sale(sale);
        let rendered = page.render();
        assert!(rendered.contains("$1.25"));
        assert!(!rendered.contains("(was"));

        let rendered = page.with_sale(Sale::new(150.0)).render();
        assert!(rendered.contains("$0.00 (was $1.25)"));
        assert!(!rendered.contains("-$"));
    }
}
