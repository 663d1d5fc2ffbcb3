//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use harvest_commerce::admin::Credentials;
use harvest_commerce::catalog::DEFAULT_IMAGES_BASE;
use harvest_commerce::ProductId;
use harvest_data::{FetchPolicy, DEFAULT_PRODUCT_IDS};
use serde::{Deserialize, Serialize};

/// File names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["harvest.toml", ".harvest.toml", "harvest.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where product data and images live.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Fetch timeouts and retries.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Admin login.
    #[serde(default)]
    pub admin: AdminConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy::from_settings(
            self.fetch.timeout_ms,
            self.fetch.max_retries,
            self.fetch.backoff_ms,
        )
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.admin.username, &self.admin.password)
    }

    pub fn product_ids(&self) -> Vec<ProductId> {
        self.catalog.product_ids.iter().map(ProductId::new).collect()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL or directory holding `{id}.json` files.
    #[serde(default = "default_products_base")]
    pub products_base: String,

    /// Base path joined with each product's image name.
    #[serde(default = "default_images_base")]
    pub images_base: String,

    /// Products fetched on every load.
    #[serde(default = "default_product_ids")]
    pub product_ids: Vec<String>,
}

fn default_products_base() -> String {
    "products".to_string()
}

fn default_images_base() -> String {
    DEFAULT_IMAGES_BASE.to_string()
}

fn default_product_ids() -> Vec<String> {
    DEFAULT_PRODUCT_IDS.iter().map(|id| id.to_string()).collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products_base: default_products_base(),
            images_base: default_images_base(),
            product_ids: default_product_ids(),
        }
    }
}

/// Fetch settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Total time per attempt, in milliseconds. `0` waits indefinitely.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base backoff between retries, in milliseconds.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

fn default_timeout_ms() -> u64 {
    0
}

fn default_max_retries() -> u32 {
    1
}

fn default_backoff_ms() -> u64 {
    100
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin")]
    pub username: String,

    #[serde(default = "default_admin")]
    pub password: String,
}

fn default_admin() -> String {
    "admin".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin(),
            password: default_admin(),
        }
    }
}

/// Generate a default harvest.toml config file.
pub fn generate_default_config() -> String {
    r#"# The Daily Harvest storefront configuration

[catalog]
# Directory or http(s) URL serving {id}.json product files
products_base = "products"
images_base = "products/productImages"
product_ids = ["apple", "grapes", "orange", "pear"]

[fetch]
# Per-attempt timeout in milliseconds; 0 waits indefinitely
timeout_ms = 0
max_retries = 1
backoff_ms = 100

[admin]
username = "admin"
password = "admin"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: CliConfig = toml::from_str(
            r#"
[catalog]
products_base = "https://shop.example/products"

[fetch]
max_retries = 3
"#,
        )
        .unwrap();
        assert_eq!(parsed.catalog.products_base, "https://shop.example/products");
        assert_eq!(parsed.catalog.images_base, "products/productImages");
        assert_eq!(parsed.catalog.product_ids.len(), 4);
        assert_eq!(parsed.fetch.max_retries, 3);
        assert_eq!(parsed.fetch.timeout_ms, 0);
        assert_eq!(parsed.credentials(), Credentials::default());
    }

    #[test]
    fn test_json_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harvest.json");
        let mut config = CliConfig::default();
        config.admin.password = "hunter2".to_string();

        config.save(&path).unwrap();
        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded.admin.password, "hunter2");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_fetch_policy_from_config() {
        let policy = CliConfig::default().fetch_policy();
        assert_eq!(policy.retry.max_retries, 1);
        assert!(!policy.timeout.is_bounded());

        let mut config = CliConfig::default();
        config.fetch.timeout_ms = 5000;
        let total = config.fetch_policy().timeout.total.unwrap();
        assert_eq!(total.as_millis(), 5000);
    }
}
