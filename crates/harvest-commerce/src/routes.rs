//! Route table for the storefront.

use crate::admin::{AdminSession, Credentials, Sale};
use crate::cart::CartHandle;
use crate::catalog::{CatalogHandle, DEFAULT_IMAGES_BASE};
use crate::error::CommerceError;
use crate::pages::layout::render_layout;
use crate::pages::{AdminPage, CartPage, ContactPage, HomePage, LoginPage, ProductsPage};
use serde::{Deserialize, Serialize};

pub const NOT_FOUND: &str = "Page not found.";

/// Every navigable location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Products,
    Login,
    Admin,
    Cart,
    Contact,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Products,
        Route::Login,
        Route::Admin,
        Route::Cart,
        Route::Contact,
    ];

    /// Resolve a path. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match trimmed {
            "/" | "" => Route::Home,
            "/products" => Route::Products,
            "/login" => Route::Login,
            "/admin" => Route::Admin,
            "/cart" => Route::Cart,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Products => "/products",
            Route::Login => "/login",
            Route::Admin => "/admin",
            Route::Cart => "/cart",
            Route::Contact => "/contact",
            Route::NotFound => "*",
        }
    }
}

/// Session state the router hands to page constructors.
///
/// The cart and catalog are optional so that a view built outside their
/// scope surfaces [`CommerceError::ContextUnavailable`].
#[derive(Debug, Clone)]
pub struct AppContext {
    pub cart: Option<CartHandle>,
    pub catalog: Option<CatalogHandle>,
    pub admin_session: Option<AdminSession>,
    pub sale: Sale,
    pub credentials: Credentials,
    pub images_base: String,
}

impl AppContext {
    /// A fresh session with an empty cart and catalog.
    pub fn new() -> Self {
        Self {
            cart: Some(CartHandle::new()),
            catalog: Some(CatalogHandle::new()),
            admin_session: None,
            sale: Sale::default(),
            credentials: Credentials::default(),
            images_base: DEFAULT_IMAGES_BASE.to_string(),
        }
    }

    /// A context with no cart or catalog in scope.
    pub fn detached() -> Self {
        Self {
            cart: None,
            catalog: None,
            ..Self::new()
        }
    }

    pub fn with_catalog(mut self, catalog: CatalogHandle) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_images_base(mut self, images_base: impl Into<String>) -> Self {
        self.images_base = images_base.into();
        self
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The page a route resolved to.
#[derive(Debug, Clone)]
pub enum View {
    Home(HomePage),
    Products(ProductsPage),
    Login(LoginPage),
    Admin(AdminPage),
    Cart(CartPage),
    Contact(ContactPage),
    NotFound,
}

impl View {
    pub fn render(&self) -> String {
        match self {
            View::Home(page) => page.render(),
            View::Products(page) => page.render(),
            View::Login(page) => page.render(),
            View::Admin(page) => page.render(),
            View::Cart(page) => page.render(),
            View::Contact(page) => page.render(),
            View::NotFound => render_layout(NOT_FOUND),
        }
    }

    /// The route this view is shown for.
    pub fn route(&self) -> Route {
        match self {
            View::Home(_) => Route::Home,
            View::Products(_) => Route::Products,
            View::Login(_) => Route::Login,
            View::Admin(_) => Route::Admin,
            View::Cart(_) => Route::Cart,
            View::Contact(_) => Route::Contact,
            View::NotFound => Route::NotFound,
        }
    }
}

pub struct Router;

impl Router {
    /// Build the view for a route.
    ///
    /// `/admin` without an admin session resolves to the login page.
    pub fn dispatch(route: Route, ctx: &AppContext) -> Result<View, CommerceError> {
        let view = match route {
            Route::Home => View::Home(HomePage),
            Route::Products => View::Products(
                ProductsPage::new(ctx.cart.as_ref(), ctx.catalog.as_ref())?
                    .with_sale(ctx.sale)
                    .with_images_base(&ctx.images_base),
            ),
            Route::Login => View::Login(LoginPage::new(ctx.credentials.clone())),
            Route::Admin => match &ctx.admin_session {
                Some(session) => View::Admin(AdminPage::new(session.clone()).with_sale(ctx.sale)),
                None => View::Login(LoginPage::new(ctx.credentials.clone())),
            },
            Route::Cart => View::Cart(
                CartPage::new(ctx.cart.as_ref())?.with_images_base(&ctx.images_base),
            ),
            Route::Contact => View::Contact(ContactPage::new()),
            Route::NotFound => View::NotFound,
        };
        Ok(view)
    }

    /// Resolve a path and build its view.
    pub fn navigate(path: &str, ctx: &AppContext) -> Result<View, CommerceError> {
        Self::dispatch(Route::from_path(path), ctx)
    }
}
