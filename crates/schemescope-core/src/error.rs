//! Error types for SchemeScope

use serde::{Deserialize, Serialize};

/// Result type alias using SchemeScope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for SchemeScope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Query did not resolve to any catalog entry
    #[error("no scheme matches query {query:?}")]
    NotFound { query: String },

    /// Comment source unreachable or returned a non-success response
    #[error("comment fetch failed: {0}")]
    Fetch(String),

    /// Text generation service failure
    #[error("text generation failed: {0}")]
    Generation(String),

    /// Voice capture errors
    #[error("voice capture error: {0}")]
    Voice(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new not-found error
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a new generation error
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Create a new voice capture error
    pub fn voice(msg: impl Into<String>) -> Self {
        Self::Voice(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Coarse category of this error, as surfaced to callers of a search
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Fetch(_) => ErrorKind::Fetch,
            Self::Generation(_) => ErrorKind::Generation,
            Self::Voice(_) => ErrorKind::Voice,
            Self::Config(_) | Self::Yaml(_) => ErrorKind::Config,
            Self::Io(_) | Self::Serialization(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Error category carried by a failed search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Fetch,
    Generation,
    Voice,
    Config,
    Internal,
}

impl ErrorKind {
    /// Whether the user can reasonably retry the same search
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch | Self::Generation)
    }

    /// Stable label used for metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Fetch => "fetch",
            Self::Generation => "generation",
            Self::Voice => "voice",
            Self::Config => "config",
            Self::Internal => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(Error::fetch("503").kind(), ErrorKind::Fetch);
        assert_eq!(Error::generation("quota").kind(), ErrorKind::Generation);
        assert_eq!(Error::not_found("xyz").kind(), ErrorKind::NotFound);
        assert_eq!(Error::config("bad").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorKind::Fetch.is_retryable());
        assert!(!ErrorKind::NotFound.is_retryable());
        assert!(!ErrorKind::Config.is_retryable());
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("abc");
        assert_eq!(err.to_string(), "no scheme matches query \"abc\"");
    }
}
