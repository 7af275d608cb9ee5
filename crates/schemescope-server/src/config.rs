//! Server configuration

use schemescope_core::{Catalog, CatalogConfig, KeywordMap, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::Cli;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Catalog file; the bundled catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Serve sample comments and skip text generation
    #[serde(default)]
    pub offline: bool,

    /// Comment source settings
    #[serde(default)]
    pub comment_source: CommentSourceConfig,

    /// Text generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            info!("No config file at {}, using defaults", config_path);
            Self::default()
        };

        // Apply CLI overrides
        if let Some(url) = &cli.comment_source {
            config.comment_source.base_url = url.clone();
        }

        if let Some(catalog) = &cli.catalog {
            config.catalog_path = Some(PathBuf::from(catalog));
        }

        if cli.offline {
            config.offline = true;
        }

        Ok(config)
    }

    /// Build the catalog and keyword map this configuration points at
    pub fn load_catalog(&self) -> Result<(Catalog, KeywordMap)> {
        match &self.catalog_path {
            Some(path) => CatalogConfig::from_file(path)?.build(),
            None => Ok((Catalog::bundled(), KeywordMap::bundled())),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            offline: false,
            comment_source: CommentSourceConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Comment source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentSourceConfig {
    /// Base URL of the comment service
    #[serde(default = "default_comment_source_url")]
    pub base_url: String,

    /// Subreddit searched for discussion
    #[serde(default = "default_subreddit")]
    pub subreddit: String,

    /// Request timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
}

impl Default for CommentSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_comment_source_url(),
            subreddit: default_subreddit(),
            timeout_secs: default_fetch_timeout(),
        }
    }
}

/// Text generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Enable AI summaries and reports
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// API base URL
    #[serde(default = "default_generator_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_generator_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_generation_timeout(),
        }
    }
}

fn default_comment_source_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_subreddit() -> String {
    "india".to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_generator_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash-lite".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_generation_timeout() -> u64 {
    60
}

fn default_true() -> bool {
    true
}
