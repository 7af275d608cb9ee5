//! End-to-end scheme search
//!
//! A search resolves the query, fetches comments for the scheme's keyword,
//! aggregates sentiment, and asks the generator for a summary. Each step's
//! failure maps onto one [`SearchOutcome`] variant; nothing here panics or
//! touches the shared catalog.

use parking_lot::RwLock;
use schemescope_classifiers::{DisplayComment, SentimentAggregator, SentimentSummary};
use schemescope_core::{
    scheme_description, BeneficiaryPersona, Catalog, Error, ErrorKind, KeywordMap, Result,
};
use schemescope_matcher::{Matcher, VoiceInputParser, DEFAULT_SUGGESTION_LIMIT};
use schemescope_telemetry::{MetricsCollector, SearchOutcomeKind};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::generator::TextGenerator;
use crate::sources::CommentSource;
use crate::voice::VoiceSession;

/// Message shown for any failed search
pub const SEARCH_FAILED_MESSAGE: &str =
    "An error occurred while searching for the policy. Please try again.";

/// Everything shown for a resolved scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeReport {
    pub name: String,
    pub keyword: String,
    pub description: String,
    pub persona: BeneficiaryPersona,
    pub sentiment: SentimentSummary,
    pub headline: String,
    pub excerpt: String,
    pub display_comments: Vec<DisplayComment>,
    /// Generated summary; `None` when generation is off or failed
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_error: Option<String>,
}

/// Result of one search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Resolved(Box<SchemeReport>),
    NotFoundWithSuggestions {
        query: String,
        suggestions: Vec<String>,
        message: String,
    },
    Failed {
        kind: ErrorKind,
        message: String,
    },
}

impl SearchOutcome {
    pub fn kind(&self) -> SearchOutcomeKind {
        match self {
            Self::Resolved(_) => SearchOutcomeKind::Resolved,
            Self::NotFoundWithSuggestions { .. } => SearchOutcomeKind::NotFound,
            Self::Failed { kind, .. } => SearchOutcomeKind::Failed(*kind),
        }
    }

    fn not_found(query: &str, suggestions: Vec<String>) -> Self {
        let message = if suggestions.is_empty() {
            format!("We couldn't find any policy matching \"{query}\".")
        } else {
            format!("We couldn't find \"{query}\". Did you mean one of these?")
        };

        Self::NotFoundWithSuggestions {
            query: query.to_string(),
            suggestions,
            message,
        }
    }

    fn failed(error: &Error) -> Self {
        Self::Failed {
            kind: error.kind(),
            message: SEARCH_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Runs searches against an injected catalog and collaborators
pub struct SearchService {
    matcher: Matcher,
    keywords: Arc<KeywordMap>,
    aggregator: SentimentAggregator,
    voice_parser: VoiceInputParser,
    source: Arc<dyn CommentSource>,
    generator: Option<Arc<dyn TextGenerator>>,
    telemetry: MetricsCollector,
}

impl SearchService {
    pub fn new(
        catalog: Arc<Catalog>,
        keywords: Arc<KeywordMap>,
        source: Arc<dyn CommentSource>,
        generator: Option<Arc<dyn TextGenerator>>,
        telemetry: MetricsCollector,
    ) -> Result<Self> {
        Ok(Self {
            matcher: Matcher::new(catalog),
            keywords,
            aggregator: SentimentAggregator::new()?,
            voice_parser: VoiceInputParser::new()?,
            source,
            generator,
            telemetry,
        })
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Search by typed or transcribed query.
    ///
    /// `is_voice_input` is only logged and counted; it never changes matching.
    pub async fn search(&self, query: &str, is_voice_input: bool) -> SearchOutcome {
        let start = Instant::now();
        let outcome = self.run(query).await;
        let latency = start.elapsed();

        debug!(
            query = %query,
            is_voice_input,
            outcome = outcome.kind().as_str(),
            "Search finished in {:?}",
            latency
        );
        self.record(&outcome, is_voice_input, latency);
        outcome
    }

    fn record(&self, outcome: &SearchOutcome, is_voice_input: bool, latency: Duration) {
        let kind = outcome.kind();
        self.telemetry
            .record_search(kind, is_voice_input, latency.as_micros() as u64);
        metrics::counter!("schemescope_searches_total", "outcome" => kind.as_str()).increment(1);
        metrics::histogram!("schemescope_search_latency_us").record(latency.as_micros() as f64);
        if let SearchOutcomeKind::Failed(error_kind) = kind {
            metrics::counter!("schemescope_errors_total", "kind" => error_kind.as_str())
                .increment(1);
        }
    }

    /// Clean a voice transcript, then search with it
    pub async fn search_voice(&self, transcript: &str) -> SearchOutcome {
        let query = self.voice_parser.parse(transcript);
        self.search(&query, true).await
    }

    /// Finish a voice recording and search with its transcript
    pub async fn search_recording(&self, session: VoiceSession) -> SearchOutcome {
        let start = Instant::now();
        match session.finish().await {
            Ok(transcript) => self.search_voice(&transcript).await,
            Err(e) => {
                warn!("Voice capture failed: {}", e);
                let outcome = SearchOutcome::failed(&e);
                self.record(&outcome, true, start.elapsed());
                outcome
            }
        }
    }

    /// Resolve, fetch and aggregate a scheme without generating a summary.
    ///
    /// Used to build report input; it is not counted as a search.
    pub async fn prepare_report(&self, query: &str) -> Result<SchemeReport> {
        let entry = self.matcher.resolve(query)?;
        self.analyze(entry.name()).await
    }

    async fn run(&self, query: &str) -> SearchOutcome {
        let entry = match self.matcher.resolve(query) {
            Ok(entry) => entry,
            Err(_) => {
                let suggestions = self
                    .matcher
                    .suggest(query, DEFAULT_SUGGESTION_LIMIT)
                    .into_iter()
                    .map(|e| e.name().to_string())
                    .collect();
                return SearchOutcome::not_found(query, suggestions);
            }
        };

        let mut report = match self.analyze(entry.name()).await {
            Ok(report) => report,
            Err(e) => return SearchOutcome::failed(&e),
        };

        let (summary, generation_error) = self.summarize(&report.name).await;
        report.summary = summary;
        report.generation_error = generation_error;
        SearchOutcome::Resolved(Box::new(report))
    }

    async fn analyze(&self, name: &str) -> Result<SchemeReport> {
        let keyword = self.keywords.keyword_for(name);

        let comments = self.source.fetch(keyword).await.map_err(|e| {
            warn!("Comment fetch from {} failed for {:?}: {}", self.source.name(), keyword, e);
            e
        })?;
        self.telemetry.record_comments(comments.len() as u64);

        let sentiment = self.aggregator.aggregate(comments);

        Ok(SchemeReport {
            name: name.to_string(),
            keyword: keyword.to_string(),
            description: scheme_description(name),
            persona: BeneficiaryPersona::for_scheme(name),
            headline: sentiment.headline(),
            excerpt: self.aggregator.excerpt(&sentiment),
            display_comments: self.aggregator.display_comments(&sentiment),
            sentiment,
            summary: None,
            generation_error: None,
        })
    }

    async fn summarize(&self, name: &str) -> (Option<String>, Option<String>) {
        let Some(generator) = &self.generator else {
            return (None, None);
        };

        match generator.summarize(name).await {
            Ok(summary) => (Some(summary), None),
            Err(e) => {
                warn!("Summary generation failed for '{}': {}", name, e);
                self.record_generation_failure();
                (None, Some(e.to_string()))
            }
        }
    }

    /// Generate the long-form report for a resolved scheme
    pub async fn generate_report(&self, report: &SchemeReport) -> Result<String> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| Error::generation("text generation is not configured"))?;

        generator.report(report).await.map_err(|e| {
            warn!("Report generation failed for '{}': {}", report.name, e);
            self.record_generation_failure();
            e
        })
    }

    fn record_generation_failure(&self) {
        self.telemetry.record_generation_failure();
        metrics::counter!("schemescope_errors_total", "kind" => ErrorKind::Generation.as_str())
            .increment(1);
    }
}

/// Identifies one search among overlapping ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Latest published search result
#[derive(Debug, Clone, Serialize)]
pub struct PublishedSearch {
    pub generation: u64,
    pub outcome: SearchOutcome,
}

/// Keeps the displayed result in step with the newest search.
///
/// Every search takes a ticket when it starts; only the holder of the most
/// recently issued ticket may publish, so a slow earlier search can never
/// overwrite a newer one.
#[derive(Debug, Default)]
pub struct SearchTracker {
    issued: AtomicU64,
    latest: RwLock<Option<PublishedSearch>>,
}

impl SearchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search, superseding all earlier tickets
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Store the outcome if the ticket is still current; returns whether it was stored
    pub fn publish(&self, ticket: SearchTicket, outcome: SearchOutcome) -> bool {
        let mut latest = self.latest.write();
        if !self.is_current(ticket) {
            return false;
        }

        *latest = Some(PublishedSearch {
            generation: ticket.0,
            outcome,
        });
        true
    }

    pub fn latest(&self) -> Option<PublishedSearch> {
        self.latest.read().clone()
    }
}
