//! Autocomplete predictions while the user types

use crate::matcher::normalize;
use schemescope_core::{Catalog, CatalogEntry};
use std::sync::Arc;

/// Default number of predictions shown
pub const DEFAULT_PREDICTION_LIMIT: usize = 5;

/// Queries shorter than this (after trimming) produce no predictions
pub const MIN_PREDICTION_CHARS: usize = 2;

/// Ranks catalog entries against a partial query
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    catalog: Arc<Catalog>,
}

impl PredictionEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Entries whose name or abbreviation contains the query, or with a word
    /// starting with it; catalog order, truncated to `limit`
    pub fn predict(&self, query: &str, limit: usize) -> Vec<&CatalogEntry> {
        let normalized = normalize(query);
        if normalized.chars().count() < MIN_PREDICTION_CHARS {
            return Vec::new();
        }

        self.catalog
            .iter()
            .filter(|entry| {
                entry.lower().contains(normalized.as_str())
                    || entry
                        .abbreviation()
                        .is_some_and(|abbr| abbr.contains(normalized.as_str()))
                    || entry.words().any(|w| w.starts_with(normalized.as_str()))
            })
            .take(limit)
            .collect()
    }
}
