//! Classifier trait and common types

use schemescope_core::SentimentLabel;

/// Trait for comment classifiers
pub trait Classifier: Send + Sync {
    /// Classify the given text
    fn classify(&self, text: &str) -> ClassificationResult;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Assigned label
    pub label: SentimentLabel,

    /// Positive lexicon hits
    pub positive_hits: usize,

    /// Negative lexicon hits
    pub negative_hits: usize,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Derive the label from hit counts; ties (including 0-0) are neutral
    pub fn from_hits(positive_hits: usize, negative_hits: usize) -> Self {
        let label = if positive_hits > negative_hits {
            SentimentLabel::Positive
        } else if negative_hits > positive_hits {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        Self {
            label,
            positive_hits,
            negative_hits,
            latency_us: 0,
        }
    }

    /// Positive minus negative hits
    pub fn margin(&self) -> i64 {
        self.positive_hits as i64 - self.negative_hits as i64
    }
}
