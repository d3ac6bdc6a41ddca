//! Catalog metadata model.
//!
//! Catalog records are the system of record for per-course metadata.
//! The optimizer only consults them when plan text yields nothing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Term;
use crate::prereq::canonicalize_code;

/// Per-course catalog metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Course code, e.g. "CPTS 121".
    pub code: String,
    /// Credit hours.
    #[serde(default)]
    pub credits: Option<u32>,
    /// Terms the course is offered in.
    #[serde(default)]
    pub offered_terms: Vec<Term>,
    /// Prerequisite codes (each an independent requirement).
    #[serde(default)]
    pub prerequisite_codes: Vec<String>,
    /// May be taken concurrently with its prerequisites.
    #[serde(default)]
    pub allow_concurrent: bool,
    /// Free-text catalog notes (standing requirements and the like).
    #[serde(default)]
    pub notes: Option<String>,
}

impl CatalogRecord {
    /// Creates a record with only a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            credits: None,
            offered_terms: Vec::new(),
            prerequisite_codes: Vec::new(),
            allow_concurrent: false,
            notes: None,
        }
    }

    /// Sets credits.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Sets offered terms.
    pub fn with_offered_terms(mut self, terms: Vec<Term>) -> Self {
        self.offered_terms = terms;
        self
    }

    /// Sets prerequisite codes.
    pub fn with_prerequisites(mut self, codes: Vec<String>) -> Self {
        self.prerequisite_codes = codes;
        self
    }

    /// Marks the course as allowing concurrent enrollment.
    pub fn with_concurrent(mut self, allow: bool) -> Self {
        self.allow_concurrent = allow;
        self
    }

    /// Sets notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Catalog for one catalog year, keyed by canonical course code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: HashMap<String, CatalogRecord>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records. Later duplicates replace earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = CatalogRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Adds a record under its canonical code.
    pub fn insert(&mut self, record: CatalogRecord) {
        let key = canonicalize_code(&record.code).unwrap_or_else(|| record.code.trim().to_uppercase());
        self.records.insert(key, record);
    }

    /// Looks up a record by course key.
    pub fn get(&self, key: &str) -> Option<&CatalogRecord> {
        self.records.get(key)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
