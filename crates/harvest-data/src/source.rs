//! Where product data comes from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use harvest_commerce::catalog::Product;
use harvest_commerce::ProductId;

use crate::client::{FetchClient, FetchError, FetchPolicy};

/// Produces one product per identifier.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, FetchError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Reads `{dir}/{id}.json` from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn product_path(&self, id: &ProductId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

#[async_trait]
impl ProductSource for FileSource {
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        let path = self.product_path(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FetchError::NotFound(path.display().to_string()));
            }
            Err(source) => {
                return Err(FetchError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(format!("{}: {e}", path.display())))
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Transport for a products base location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    File,
}

impl SourceKind {
    /// `http://` and `https://` bases are fetched over HTTP, anything else is a directory.
    pub fn detect(base: &str) -> Self {
        if base.starts_with("http://") || base.starts_with("https://") {
            SourceKind::Http
        } else {
            SourceKind::File
        }
    }

    /// Build the source for `base`.
    pub fn open(self, base: &str, policy: FetchPolicy) -> Result<Box<dyn ProductSource>, FetchError> {
        Ok(match self {
            SourceKind::Http => Box::new(FetchClient::new(base, policy)?),
            SourceKind::File => Box::new(FileSource::new(base)),
        })
    }
}
