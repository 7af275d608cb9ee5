//! Query resolution against the scheme catalog
//!
//! Resolution tries, in order, and returns on the first hit:
//! 1. exact name or parenthetical abbreviation (case-insensitive)
//! 2. the name with its parenthetical suffix dropped
//! 3. the first entry whose name contains the query
//!
//! When nothing resolves, [`Matcher::suggest`] offers entries sharing a word
//! prefix with the query.

use schemescope_core::{Catalog, CatalogEntry, Error, Result};
use std::sync::Arc;
use tracing::debug;

/// Default number of suggestions offered for an unresolved query
pub const DEFAULT_SUGGESTION_LIMIT: usize = 4;

/// How a query was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Full name or abbreviation
    Exact,
    /// Name without its parenthetical suffix
    BaseName,
    /// Query is a substring of the name
    Substring,
}

/// Resolves free-text queries to catalog entries
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<Catalog>,
}

impl Matcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a query to a catalog entry, or [`Error::NotFound`]
    pub fn resolve(&self, query: &str) -> Result<&CatalogEntry> {
        self.resolve_with_kind(query)
            .map(|(entry, _)| entry)
            .ok_or_else(|| Error::not_found(query))
    }

    /// Resolve a query and report which rule matched
    pub fn resolve_with_kind(&self, query: &str) -> Option<(&CatalogEntry, MatchKind)> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }

        let entries = self.catalog.entries();

        let hit = entries
            .iter()
            .find(|e| e.lower() == normalized || e.abbreviation() == Some(normalized.as_str()))
            .map(|e| (e, MatchKind::Exact))
            .or_else(|| {
                entries
                    .iter()
                    .find(|e| e.base_name() == normalized)
                    .map(|e| (e, MatchKind::BaseName))
            })
            .or_else(|| {
                entries
                    .iter()
                    .find(|e| e.lower().contains(normalized.as_str()))
                    .map(|e| (e, MatchKind::Substring))
            });

        if let Some((entry, kind)) = hit {
            debug!("Resolved {:?} to '{}' ({:?})", query, entry, kind);
        }
        hit
    }

    /// Entries sharing a word prefix with the query, in catalog order
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&CatalogEntry> {
        let normalized = normalize(query);
        let words: Vec<&str> = normalized
            .split_whitespace()
            .filter(|w| w.chars().count() > 1)
            .collect();

        if words.is_empty() {
            return Vec::new();
        }

        self.catalog
            .iter()
            .filter(|entry| {
                words
                    .iter()
                    .any(|word| entry.words().any(|candidate| candidate.starts_with(word)))
            })
            .take(limit)
            .collect()
    }
}

/// Trimmed, lowercased query text
pub(crate) fn normalize(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> Matcher {
        Matcher::new(Arc::new(Catalog::bundled()))
    }

    #[test]
    fn test_exact_match_any_case() {
        let matcher = matcher();
        let name = "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)";

        let exact = matcher.resolve(name).unwrap();
        let lower = matcher.resolve(&name.to_lowercase()).unwrap();
        assert_eq!(exact.name(), name);
        assert_eq!(exact, lower);
    }

    #[test]
    fn test_abbreviation_match() {
        let matcher = matcher();
        let (entry, kind) = matcher.resolve_with_kind("pmay").unwrap();
        assert_eq!(entry.name(), "Pradhan Mantri Awas Yojana (PMAY)");
        assert_eq!(kind, MatchKind::Exact);

        let entry = matcher.resolve("  PM-KISAN ").unwrap();
        assert_eq!(entry.name(), "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)");
    }

    #[test]
    fn test_base_name_match() {
        let matcher = matcher();
        let (entry, kind) = matcher.resolve_with_kind("National Health Mission").unwrap();
        assert_eq!(entry.name(), "National Health Mission (NHM)");
        assert_eq!(kind, MatchKind::BaseName);
    }

    #[test]
    fn test_base_name_beats_earlier_substring() {
        // "alpha beta" is a substring of the first entry and the base name of the second.
        let catalog = Catalog::new(["Alpha Beta Plus", "Alpha Beta (AB)"]).unwrap();
        let matcher = Matcher::new(Arc::new(catalog));
        let (entry, kind) = matcher.resolve_with_kind("alpha beta").unwrap();
        assert_eq!(entry.name(), "Alpha Beta (AB)");
        assert_eq!(kind, MatchKind::BaseName);
    }

    #[test]
    fn test_substring_fallback() {
        let matcher = matcher();
        let (entry, kind) = matcher.resolve_with_kind("awas").unwrap();
        assert!(entry.name().contains("Awas"));
        assert_eq!(kind, MatchKind::Substring);

        let entry = matcher.resolve("ayushman").unwrap();
        assert_eq!(
            entry.name(),
            "Ayushman Bharat Pradhan Mantri Jan Arogya Yojana (AB-PMJAY)"
        );
    }

    #[test]
    fn test_exact_beats_earlier_substring() {
        // "yojana" is a substring of the first entry and an exact match of the second.
        let catalog = Catalog::new(["Alpha Yojana Plus", "Yojana"]).unwrap();
        let matcher = Matcher::new(Arc::new(catalog));
        assert_eq!(matcher.resolve("yojana").unwrap().name(), "Yojana");
    }

    #[test]
    fn test_empty_query_not_found() {
        let matcher = matcher();
        assert!(matches!(matcher.resolve(""), Err(Error::NotFound { .. })));
        assert!(matches!(matcher.resolve("   "), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_unknown_query_not_found() {
        let matcher = matcher();
        assert!(matcher.resolve("space elevator subsidy").is_err());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let matcher = matcher();
        let first = matcher.resolve("mudra").unwrap().clone();
        let second = matcher.resolve("mudra").unwrap();
        assert_eq!(&first, second);
    }

    #[test]
    fn test_suggest_respects_limit_and_prefix_rule() {
        let matcher = matcher();
        let suggestions = matcher.suggest("kisan samman", 2);
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 2);
        for entry in suggestions {
            assert!(entry
                .words()
                .any(|w| w.starts_with("kisan") || w.starts_with("samman")));
        }
    }

    #[test]
    fn test_suggest_preserves_catalog_order() {
        let matcher = matcher();
        let suggestions: Vec<&str> = matcher
            .suggest("pradhan xyz", DEFAULT_SUGGESTION_LIMIT)
            .into_iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(
            suggestions,
            vec![
                "Ayushman Bharat Pradhan Mantri Jan Arogya Yojana (AB-PMJAY)",
                "Pradhan Mantri Matru Vandana Yojana (PMMVY)",
                "Pradhan Mantri Awas Yojana (PMAY)",
                "Pradhan Mantri Gram Sadak Yojana (PMGSY)",
            ]
        );
    }

    #[test]
    fn test_suggest_ignores_single_letter_words() {
        let matcher = matcher();
        assert!(matcher.suggest("a b c", DEFAULT_SUGGESTION_LIMIT).is_empty());
        assert!(matcher.suggest("   ", DEFAULT_SUGGESTION_LIMIT).is_empty());
    }
}
