//! HTTP fetch client with timeout and retry policy.

use async_trait::async_trait;
use harvest_commerce::catalog::Product;
use harvest_commerce::ProductId;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::retry::{BackoffStrategy, RetryPolicy};
use crate::source::ProductSource;
use crate::timeout::TimeoutConfig;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Fetch policy combining timeout and retry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Timeout configuration.
    pub timeout: TimeoutConfig,
    /// Retry policy.
    pub retry: RetryPolicy,
}

impl FetchPolicy {
    pub fn new(timeout: TimeoutConfig, retry: RetryPolicy) -> Self {
        Self { timeout, retry }
    }

    /// Build from the flat `[fetch]` settings.
    pub fn from_settings(timeout_ms: u64, max_retries: u32, backoff_ms: u64) -> Self {
        Self {
            timeout: TimeoutConfig::from_millis(timeout_ms),
            retry: RetryPolicy::new(max_retries)
                .with_backoff(BackoffStrategy::exponential_from_millis(backoff_ms)),
        }
    }
}

/// Fetches product data files from `{base_url}/{id}.json`.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    base_url: String,
    policy: FetchPolicy,
}

impl FetchClient {
    /// Create a client for `base_url` with the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, policy: FetchPolicy) -> Result<Self, FetchError> {
        let mut builder =
            Client::builder().user_agent(concat!("harvest/", env!("CARGO_PKG_VERSION")));
        if let Some(total) = policy.timeout.total {
            builder = builder.timeout(total);
        }
        if let Some(connect) = policy.timeout.connect {
            builder = builder.connect_timeout(connect);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            policy,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// URL of one product's data file.
    pub fn product_url(&self, id: &ProductId) -> String {
        format!("{}/{}.json", self.base_url, id)
    }

    /// GET `url` and decode the JSON body, retrying per the policy.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let mut attempt = 0;
        loop {
            match self.get_once(url).await {
                Ok(value) => return Ok(value),
                Err(err) if self.policy.retry.should_retry(&err, attempt) => {
                    let delay = self.policy.retry.backoff.delay_for_attempt(attempt);
                    warn!(url, attempt = attempt + 1, ?delay, error = %err, "retrying fetch");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "fetch response");
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(format!("{url}: {e}")))
    }
}

#[async_trait]
impl ProductSource for FetchClient {
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.get_json(&self.product_url(id)).await
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_product_url_trims_slash() {
        let client = FetchClient::new("http://localhost:8080/products/", FetchPolicy::default())
            .unwrap();
        assert_eq!(
            client.product_url(&ProductId::new("apple")),
            "http://localhost:8080/products/apple.json"
        );
    }

    #[test]
    fn test_policy_from_settings() {
        let policy = FetchPolicy::from_settings(2000, 3, 50);
        assert_eq!(policy.timeout.total, Some(Duration::from_millis(2000)));
        assert_eq!(policy.retry.max_retries, 3);
        assert_eq!(policy.retry.backoff.delay_for_attempt(1), Duration::from_millis(100));

        let policy = FetchPolicy::from_settings(0, 1, 100);
        assert!(!policy.timeout.is_bounded());
    }

    #[test]
    fn test_default_policy_has_no_timeout() {
        assert!(!FetchPolicy::default().timeout.is_bounded());
    }
}
