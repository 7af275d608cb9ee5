//! SchemeScope Core
//!
//! Core types, catalog data, and error handling shared across SchemeScope
//! components.
//!
//! This crate provides:
//! - The scheme catalog and keyword map (bundled or loaded from YAML)
//! - Comment and sentiment label types
//! - Beneficiary persona derivation
//! - Error types and result handling

pub mod catalog;
mod data;
pub mod error;
pub mod types;

pub use catalog::{Catalog, CatalogConfig, CatalogEntry, KeywordMap, SchemeSpec};
pub use error::{Error, ErrorKind, Result};
pub use types::{scheme_description, BeneficiaryPersona, ClassifiedComment, Comment, SentimentLabel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogEntry, KeywordMap};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::types::{ClassifiedComment, Comment, SentimentLabel};
}
