//! Scheme catalog and keyword map
//!
//! Both are built once at startup and shared read-only across searches.
//! A catalog can come from the bundled data or from a YAML file:
//!
//! ```yaml
//! schemes:
//!   - name: "Pradhan Mantri Awas Yojana (PMAY)"
//!     keyword: "PMAY"
//!   - name: "Startup India"
//! ```

use crate::data::BUNDLED_SCHEMES;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// A canonical scheme name, with its lowercased forms cached for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    name: String,
    lower: String,
    abbreviation: Option<String>,
    base: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let lower = name.to_lowercase();
        let abbreviation = extract_abbreviation(&name).map(str::to_lowercase);
        let base = name
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        Self {
            name,
            lower,
            abbreviation,
            base,
        }
    }

    /// Canonical name exactly as catalogued
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased full name
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Lowercased contents of the first parenthetical group, if any
    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    /// Lowercased text preceding the first `(`, trimmed
    pub fn base_name(&self) -> &str {
        &self.base
    }

    /// Whitespace-delimited words of the lowercased name
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lower.split_whitespace()
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for CatalogEntry {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Text inside the first `(...)` group of a name
pub fn extract_abbreviation(name: &str) -> Option<&str> {
    let open = name.find('(')?;
    let rest = &name[open + 1..];
    let close = rest.find(')')?;
    Some(&rest[..close])
}

/// Ordered, duplicate-free list of canonical scheme names
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for name in names {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(Error::config(format!("duplicate catalog entry '{name}'")));
            }
            entries.push(CatalogEntry::new(name));
        }

        Ok(Self { entries })
    }

    /// Catalog shipped with the application
    pub fn bundled() -> Self {
        Self {
            entries: BUNDLED_SCHEMES
                .iter()
                .map(|(name, _)| CatalogEntry::new(*name))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Look up an entry by its exact canonical name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps a canonical scheme name to the keyword used against the comment source
#[derive(Debug, Clone, Default)]
pub struct KeywordMap {
    keywords: HashMap<String, String>,
}

impl KeywordMap {
    pub fn new(keywords: HashMap<String, String>) -> Self {
        Self { keywords }
    }

    /// Keyword map shipped with the application
    pub fn bundled() -> Self {
        Self {
            keywords: BUNDLED_SCHEMES
                .iter()
                .map(|(name, keyword)| (name.to_string(), keyword.to_string()))
                .collect(),
        }
    }

    /// Search keyword for a scheme; unmapped schemes and empty keywords
    /// search by the scheme's own name
    pub fn keyword_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.keywords
            .get(name)
            .map(String::as_str)
            .filter(|keyword| !keyword.trim().is_empty())
            .unwrap_or(name)
    }

    /// Check that every mapped name is a catalog entry
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        let mut orphans: Vec<&str> = self
            .keywords
            .keys()
            .filter(|name| !catalog.contains(name))
            .map(String::as_str)
            .collect();

        if orphans.is_empty() {
            return Ok(());
        }

        orphans.sort_unstable();
        Err(Error::config(format!(
            "keywords reference unknown schemes: {}",
            orphans.join(", ")
        )))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Catalog file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub schemes: Vec<SchemeSpec>,
}

/// A single scheme in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeSpec {
    /// Canonical name, optionally with a parenthetical abbreviation
    pub name: String,

    /// Search keyword (defaults to the name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl CatalogConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading catalog file {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Build and validate the catalog and keyword map
    pub fn build(self) -> Result<(Catalog, KeywordMap)> {
        let keywords: HashMap<String, String> = self
            .schemes
            .iter()
            .filter_map(|s| s.keyword.clone().map(|k| (s.name.clone(), k)))
            .collect();

        let catalog = Catalog::new(self.schemes.into_iter().map(|s| s.name))?;
        let keywords = KeywordMap::new(keywords);
        keywords.validate(&catalog)?;

        info!(
            "Loaded catalog with {} schemes ({} keywords)",
            catalog.len(),
            keywords.len()
        );
        Ok((catalog, keywords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_derived_forms() {
        let entry = CatalogEntry::new("Pradhan Mantri Awas Yojana (PMAY)");
        assert_eq!(entry.lower(), "pradhan mantri awas yojana (pmay)");
        assert_eq!(entry.abbreviation(), Some("pmay"));
        assert_eq!(entry.base_name(), "pradhan mantri awas yojana");
    }

    #[test]
    fn test_entry_without_abbreviation() {
        let entry = CatalogEntry::new("Startup India");
        assert_eq!(entry.abbreviation(), None);
        assert_eq!(entry.base_name(), "startup india");
    }

    #[test]
    fn test_abbreviation_in_middle() {
        let entry = CatalogEntry::new("One Stop Centre (OSC) Scheme");
        assert_eq!(entry.abbreviation(), Some("osc"));
        assert_eq!(entry.base_name(), "one stop centre");
    }

    #[test]
    fn test_unclosed_parenthesis() {
        assert_eq!(extract_abbreviation("Broken (name"), None);
        assert_eq!(extract_abbreviation("Empty ()"), Some(""));
    }

    #[test]
    fn test_bundled_catalog_is_consistent() {
        let catalog = Catalog::bundled();
        let keywords = KeywordMap::bundled();
        assert_eq!(catalog.len(), 46);
        assert!(keywords.validate(&catalog).is_ok());
        assert!(Catalog::new(catalog.iter().map(|e| e.name().to_string())).is_ok());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Catalog::new(["A", "B", "A"]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_keyword_fallback() {
        let keywords = KeywordMap::bundled();
        assert_eq!(
            keywords.keyword_for("Ayushman Bharat Pradhan Mantri Jan Arogya Yojana (AB-PMJAY)"),
            "Ayushman Bharat"
        );
        assert_eq!(keywords.keyword_for("Unmapped Scheme"), "Unmapped Scheme");
    }

    #[test]
    fn test_empty_keyword_falls_back_to_name() {
        let yaml = r#"
schemes:
  - name: "Startup India"
    keyword: ""
  - name: "Stand-Up India"
    keyword: "  "
"#;
        let (_, keywords) = CatalogConfig::from_yaml(yaml).unwrap().build().unwrap();
        assert_eq!(keywords.keyword_for("Startup India"), "Startup India");
        assert_eq!(keywords.keyword_for("Stand-Up India"), "Stand-Up India");
    }

    #[test]
    fn test_orphan_keyword_rejected() {
        let yaml = r#"
schemes:
  - name: "Startup India"
"#;
        let (catalog, _) = CatalogConfig::from_yaml(yaml).unwrap().build().unwrap();

        let mut map = HashMap::new();
        map.insert("Missing Scheme".to_string(), "missing".to_string());
        let err = KeywordMap::new(map).validate(&catalog).unwrap_err();
        assert!(err.to_string().contains("Missing Scheme"));
    }

    #[test]
    fn test_catalog_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(
            &path,
            r#"
schemes:
  - name: "Pradhan Mantri Awas Yojana (PMAY)"
    keyword: "PMAY"
  - name: "Startup India"
"#,
        )
        .unwrap();

        let (catalog, keywords) = CatalogConfig::from_file(&path).unwrap().build().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(keywords.keyword_for("Pradhan Mantri Awas Yojana (PMAY)"), "PMAY");
        assert_eq!(keywords.keyword_for("Startup India"), "Startup India");
    }
}
