//! Catalog metadata sources.
//!
//! The optimizer fetches the catalog for the selected catalog year once,
//! before scheduling. Any failure here is recoverable: the caller logs it
//! and schedules from plan text alone.

mod http;

pub use http::{HttpCatalog, HttpCatalogConfig};

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{Catalog, CatalogRecord};

/// Catalog retrieval errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode catalog: {0}")]
    Decode(String),
}

/// A source of catalog records keyed by catalog year.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches every record for a catalog year.
    async fn fetch(&self, catalog_year: &str) -> Result<Catalog, CatalogError>;
}

/// Accepted catalog payload shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogPayload {
    List(Vec<CatalogRecord>),
    Wrapped { courses: Vec<CatalogRecord> },
}

impl CatalogPayload {
    pub(crate) fn into_catalog(self) -> Catalog {
        match self {
            CatalogPayload::List(records) | CatalogPayload::Wrapped { courses: records } => {
                Catalog::from_records(records)
            }
        }
    }
}

/// In-memory catalogs keyed by catalog year.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    years: HashMap<String, Catalog>,
}

impl StaticCatalog {
    /// Creates a source with no catalogs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the catalog for a year.
    pub fn with_year(mut self, catalog_year: impl Into<String>, catalog: Catalog) -> Self {
        self.years.insert(catalog_year.into(), catalog);
        self
    }

    /// Parses a JSON payload (record array or `{"courses": [...]}`).
    pub fn from_json(catalog_year: impl Into<String>, json: &str) -> Result<Self, CatalogError> {
        let payload: CatalogPayload =
            serde_json::from_str(json).map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(Self::new().with_year(catalog_year, payload.into_catalog()))
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self, catalog_year: &str) -> Result<Catalog, CatalogError> {
        self.years
            .get(catalog_year)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(catalog_year.to_string()))
    }
}
