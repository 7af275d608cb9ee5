//! Lexicon sentiment classifier
//!
//! Counts whole-token hits against fixed positive and negative word lists.
//! This is an approximation: negation ("not good") and sarcasm are not
//! understood, and punctuation attached to a word ("good.") prevents a match.

use crate::classifier::{ClassificationResult, Classifier};
use schemescope_core::SentimentLabel;
use std::collections::HashSet;
use std::time::Instant;

pub const POSITIVE_WORDS: [&str; 10] = [
    "good", "great", "excellent", "amazing", "helpful", "benefit", "success", "easy", "support",
    "happy",
];

pub const NEGATIVE_WORDS: [&str; 10] = [
    "bad",
    "terrible",
    "awful",
    "difficult",
    "problem",
    "issue",
    "corrupt",
    "delay",
    "complicated",
    "poor",
];

pub struct SentimentClassifier {
    name: String,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self::with_lexicon("sentiment-lexicon", POSITIVE_WORDS, NEGATIVE_WORDS)
    }

    /// Build a classifier over custom word lists (matched case-insensitively)
    pub fn with_lexicon<P, N>(name: impl Into<String>, positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            name: name.into(),
            positive: positive.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            negative: negative.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Label only
    pub fn label(&self, text: &str) -> SentimentLabel {
        self.classify(text).label
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for SentimentClassifier {
    fn classify(&self, text: &str) -> ClassificationResult {
        let start = Instant::now();

        let lowered = text.to_lowercase();
        let (mut positive_hits, mut negative_hits) = (0, 0);
        for word in lowered.split_whitespace() {
            if self.positive.contains(word) {
                positive_hits += 1;
            }
            if self.negative.contains(word) {
                negative_hits += 1;
            }
        }

        let mut result = ClassificationResult::from_hits(positive_hits, negative_hits);
        result.latency_us = start.elapsed().as_micros() as u64;
        result
    }

    fn name(&self) -> &str {
        &self.name
    }
}
