//! Shared application state

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;
use schemescope_core::{Catalog, KeywordMap};
use schemescope_matcher::PredictionEngine;
use schemescope_telemetry::MetricsCollector;
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;
use crate::generator::{GeminiGenerator, TextGenerator};
use crate::search::{SearchService, SearchTracker};
use crate::sources::{CommentSource, HttpCommentSource, SampleCommentSource};

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Search pipeline
    pub search: Arc<SearchService>,

    /// Autocomplete over the same catalog
    pub predictions: Arc<PredictionEngine>,

    /// Newest-search guard for the displayed result
    pub tracker: Arc<SearchTracker>,

    /// In-process counters
    pub telemetry: MetricsCollector,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Initialize application state from configuration
    pub fn new(config: ServerConfig, metrics_handle: Option<PrometheusHandle>) -> Result<Self> {
        info!("Initializing application state");

        let (catalog, keywords) = config.load_catalog()?;
        info!("Catalog ready with {} schemes", catalog.len());

        let (source, generator): (Arc<dyn CommentSource>, Option<Arc<dyn TextGenerator>>) =
            if config.offline {
                info!("Offline mode: serving sample comments, text generation disabled");
                (Arc::new(SampleCommentSource::new()), None)
            } else {
                info!("Comment source: {}", config.comment_source.base_url);
                let source = Arc::new(HttpCommentSource::new(&config.comment_source)?);
                let generator = GeminiGenerator::from_env(&config.generator)?
                    .map(|g| Arc::new(g) as Arc<dyn TextGenerator>);
                (source, generator)
            };

        Self::with_components(
            config,
            Arc::new(catalog),
            Arc::new(keywords),
            source,
            generator,
            metrics_handle,
        )
    }

    /// Assemble state from explicit parts
    pub fn with_components(
        config: ServerConfig,
        catalog: Arc<Catalog>,
        keywords: Arc<KeywordMap>,
        source: Arc<dyn CommentSource>,
        generator: Option<Arc<dyn TextGenerator>>,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Result<Self> {
        let telemetry = MetricsCollector::new();
        let search = SearchService::new(
            catalog.clone(),
            keywords,
            source,
            generator,
            telemetry.clone(),
        )?;

        Ok(Self {
            config: Arc::new(config),
            search: Arc::new(search),
            predictions: Arc::new(PredictionEngine::new(catalog)),
            tracker: Arc::new(SearchTracker::new()),
            telemetry,
            metrics_handle,
        })
    }
}
