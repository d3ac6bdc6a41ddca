//! HTTP catalog client.
//!
//! Configuration is via environment variables:
//! - `COURSEPLAN_CATALOG_URL` - Base URL (default: `http://localhost:8000/api`)
//! - `COURSEPLAN_CATALOG_TIMEOUT_SECS` - Request timeout (default: 10)
//!
//! Records are read from `GET {base}/catalogs/{catalog_year}/courses`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::debug;

use super::{CatalogError, CatalogPayload, CatalogSource};
use crate::models::Catalog;

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:8000/api";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`HttpCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogConfig {
    /// Base URL of the catalog API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpCatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpCatalogConfig {
    /// Reads configuration from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("COURSEPLAN_CATALOG_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let timeout = std::env::var("COURSEPLAN_CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url,
            timeout: Duration::from_secs(timeout),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Catalog source backed by the catalog HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: Client,
}

impl HttpCatalog {
    /// Creates a client with explicit configuration.
    pub fn new(config: HttpCatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::new(HttpCatalogConfig::from_env())
    }

    /// URL of the course listing for a catalog year.
    pub fn courses_url(&self, catalog_year: &str) -> Result<Url, CatalogError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["catalogs", catalog_year, "courses"]);
        Ok(url)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch(&self, catalog_year: &str) -> Result<Catalog, CatalogError> {
        let url = self.courses_url(catalog_year)?;
        debug!(%url, "fetching catalog");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::NOT_FOUND => CatalogError::NotFound(catalog_year.to_string()),
                _ => CatalogError::Server(format!("{}: {}", status, body)),
            });
        }

        let payload: CatalogPayload = response.json().await.map_err(|e| {
            if e.is_decode() {
                CatalogError::Decode(e.to_string())
            } else {
                CatalogError::Http(e)
            }
        })?;
        Ok(payload.into_catalog())
    }
}
