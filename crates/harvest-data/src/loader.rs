//! Concurrent catalog loading.

use futures::future::join_all;
use harvest_commerce::catalog::{CatalogHandle, Product};
use harvest_commerce::{CommerceError, ProductId};
use tracing::{error, info};

use crate::client::FetchError;
use crate::source::ProductSource;

/// Identifiers fetched when none are configured.
pub const DEFAULT_PRODUCT_IDS: [&str; 4] = ["apple", "grapes", "orange", "pear"];

/// Errors that stop a load cycle before it starts.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Context(#[from] CommerceError),

    #[error("could not open product source: {0}")]
    Source(#[from] FetchError),
}

/// Outcome of one load cycle, in identifier order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<ProductId>,
    pub failed: Vec<(ProductId, FetchError)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetches a fixed set of products concurrently and publishes them to a catalog.
pub struct CatalogLoader {
    source: Box<dyn ProductSource>,
    product_ids: Vec<ProductId>,
}

impl CatalogLoader {
    pub fn new(source: Box<dyn ProductSource>, product_ids: Vec<ProductId>) -> Self {
        Self {
            source,
            product_ids,
        }
    }

    /// Loader over [`DEFAULT_PRODUCT_IDS`].
    pub fn with_default_ids(source: Box<dyn ProductSource>) -> Self {
        let ids = DEFAULT_PRODUCT_IDS.iter().copied().map(ProductId::new).collect();
        Self::new(source, ids)
    }

    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }

    /// Issue every fetch at once and wait for all of them to settle.
    ///
    /// Failed items are logged and left out. Successful products keep the
    /// order of `product_ids`, whatever order the fetches complete in.
    pub async fn fetch_all(&self) -> (Vec<Product>, LoadReport) {
        let fetches = self
            .product_ids
            .iter()
            .map(|id| self.source.fetch_product(id));
        let results = join_all(fetches).await;

        let mut products = Vec::with_capacity(results.len());
        let mut report = LoadReport::default();
        for (id, result) in self.product_ids.iter().zip(results) {
            match result {
                Ok(product) => {
                    report.loaded.push(id.clone());
                    products.push(product);
                }
                Err(err) => {
                    error!(
                        product_id = %id,
                        source = %self.source.describe(),
                        error = %err,
                        "failed to load product"
                    );
                    report.failed.push((id.clone(), err));
                }
            }
        }
        (products, report)
    }

    /// Run one load cycle against the catalog.
    ///
    /// The loading flag is raised before any fetch starts and cleared only
    /// after every fetch has settled.
    pub async fn load(&self, catalog: &CatalogHandle) -> LoadReport {
        catalog.begin_load();
        let (products, report) = self.fetch_all().await;
        catalog.finish_load(products);
        info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "catalog loaded"
        );
        report
    }

    /// Like [`load`](Self::load), for a catalog that may be out of scope.
    pub async fn load_into(&self, catalog: Option<&CatalogHandle>) -> Result<LoadReport, LoadError> {
        let catalog = CatalogHandle::require(catalog)?;
        Ok(self.load(&catalog).await)
    }
}
