//! SchemeScope Classifiers
//!
//! Sentiment labelling of public comments and aggregation into a per-scheme
//! summary.
//!
//! The bundled [`SentimentClassifier`] is a lexicon heuristic: it counts
//! whole-word hits against two fixed word lists. It is deliberately simple
//! and will mislabel negated or sarcastic text.

pub mod aggregator;
pub mod classifier;
pub mod sentiment;

pub use aggregator::{
    DisplayComment, SentimentAggregator, SentimentSummary, EXCERPT_FALLBACK, MODERATOR_BOILERPLATE,
};
pub use classifier::{ClassificationResult, Classifier};
pub use sentiment::{SentimentClassifier, NEGATIVE_WORDS, POSITIVE_WORDS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aggregator::{SentimentAggregator, SentimentSummary};
    pub use crate::classifier::{ClassificationResult, Classifier};
    pub use crate::sentiment::SentimentClassifier;
}
