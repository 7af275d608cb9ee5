//! Sentiment aggregation over a scheme's comments
//!
//! Every comment is classified once, then the labels are turned into a
//! percentage breakdown. The summary also drives two display helpers:
//! a short excerpt built from comments carrying the dominant label, and one
//! representative comment per label with moderator boilerplate skipped.

use crate::classifier::Classifier;
use crate::sentiment::SentimentClassifier;
use aho_corasick::AhoCorasick;
use regex::Regex;
use schemescope_core::{ClassifiedComment, Comment, Result, SentimentLabel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Boilerplate appended by r/india moderators
pub const MODERATOR_BOILERPLATE: &str = "Please [contact the moderators of this subreddit](/message/compose/?to=/r/india) if you have any questions or concerns.";

/// Excerpt shown when no comment qualifies
pub const EXCERPT_FALLBACK: &str = "No representative comment available.";

/// Excerpt candidates must be strictly longer than this many characters
pub const EXCERPT_MIN_CHARS: usize = 30;

/// Excerpt candidates must be strictly shorter than this many characters
pub const EXCERPT_MAX_CHARS: usize = 400;

/// Number of comments contributing to an excerpt
pub const EXCERPT_COMMENTS: usize = 3;

/// Characters kept from a comment with no sentence terminator
pub const SENTENCE_FALLBACK_CHARS: usize = 120;

/// Display comments longer than this are cut and suffixed with "..."
pub const DISPLAY_MAX_CHARS: usize = 400;

/// Percentage breakdown plus the classified comments it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub comments: Vec<ClassifiedComment>,
}

impl SentimentSummary {
    /// Comment count for a label
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.comments.iter().filter(|c| c.label == label).count()
    }

    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Label with the strictly greatest percentage; any tie is neutral
    pub fn dominant(&self) -> SentimentLabel {
        if self.positive > self.negative && self.positive > self.neutral {
            SentimentLabel::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// One-line description of the dominant sentiment
    pub fn headline(&self) -> String {
        format!(
            "This policy has received {} feedback from beneficiaries",
            self.dominant()
        )
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// A comment chosen to represent one label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayComment {
    pub label: SentimentLabel,
    pub text: String,
}

/// Classifies comments and builds summaries and excerpts
pub struct SentimentAggregator {
    classifier: Arc<dyn Classifier>,
    sentence_regex: Regex,
    boilerplate: AhoCorasick,
}

impl SentimentAggregator {
    /// Aggregator using the lexicon classifier and the r/india boilerplate marker
    pub fn new() -> Result<Self> {
        Self::with_classifier(Arc::new(SentimentClassifier::new()), [MODERATOR_BOILERPLATE])
    }

    pub fn with_classifier<I, S>(classifier: Arc<dyn Classifier>, boilerplate: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let sentence_regex = Regex::new(r"[^.!?\n]+[.!?\n]").map_err(|e| {
            schemescope_core::Error::internal(format!("Failed to compile sentence regex: {e}"))
        })?;

        let boilerplate = AhoCorasick::new(boilerplate).map_err(|e| {
            schemescope_core::Error::internal(format!("Failed to build boilerplate matcher: {e}"))
        })?;

        Ok(Self {
            classifier,
            sentence_regex,
            boilerplate,
        })
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Classify every comment and compute the percentage breakdown
    pub fn aggregate(&self, comments: Vec<Comment>) -> SentimentSummary {
        let (mut positive, mut neutral, mut negative) = (0usize, 0usize, 0usize);

        let comments: Vec<ClassifiedComment> = comments
            .into_iter()
            .map(|comment| {
                let label = self.classifier.classify(&comment.body).label;
                match label {
                    SentimentLabel::Positive => positive += 1,
                    SentimentLabel::Neutral => neutral += 1,
                    SentimentLabel::Negative => negative += 1,
                }
                ClassifiedComment::new(comment, label)
            })
            .collect();

        // An empty set divides by one so every share comes out as 0.0
        let total = (positive + neutral + negative).max(1) as f64;

        debug!(
            "Aggregated {} comments (positive={}, neutral={}, negative={}) with {}",
            comments.len(),
            positive,
            neutral,
            negative,
            self.classifier.name()
        );

        SentimentSummary {
            positive: positive as f64 / total * 100.0,
            neutral: neutral as f64 / total * 100.0,
            negative: negative as f64 / total * 100.0,
            comments,
        }
    }

    /// First sentences of up to three mid-length comments with the dominant label
    pub fn excerpt(&self, summary: &SentimentSummary) -> String {
        let dominant = summary.dominant();

        let sentences: Vec<String> = summary
            .comments
            .iter()
            .filter(|c| c.label == dominant)
            .filter(|c| {
                let len = c.text().chars().count();
                len > EXCERPT_MIN_CHARS && len < EXCERPT_MAX_CHARS
            })
            .take(EXCERPT_COMMENTS)
            .map(|c| self.first_sentence(c.text()))
            .collect();

        let excerpt = sentences.join(" ");
        if excerpt.is_empty() {
            EXCERPT_FALLBACK.to_string()
        } else {
            excerpt
        }
    }

    /// Text up to and including the first `.`, `!`, `?` or newline
    pub fn first_sentence(&self, text: &str) -> String {
        match self.sentence_regex.find(text) {
            Some(m) => m.as_str().trim().to_string(),
            None => truncate_chars(text, SENTENCE_FALLBACK_CHARS).trim().to_string(),
        }
    }

    /// Whether a comment body carries moderator boilerplate
    pub fn is_boilerplate(&self, text: &str) -> bool {
        self.boilerplate.is_match(text)
    }

    /// First non-boilerplate comment for each label, in positive/neutral/negative order
    pub fn display_comments(&self, summary: &SentimentSummary) -> Vec<DisplayComment> {
        let candidates: Vec<&ClassifiedComment> = summary
            .comments
            .iter()
            .filter(|c| !self.is_boilerplate(c.text()))
            .collect();

        SentimentLabel::ALL
            .iter()
            .filter_map(|label| {
                candidates
                    .iter()
                    .find(|c| c.label == *label)
                    .map(|c| DisplayComment {
                        label: *label,
                        text: shorten_for_display(c.text()),
                    })
            })
            .collect()
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn shorten_for_display(text: &str) -> String {
    if text.chars().count() > DISPLAY_MAX_CHARS {
        format!("{}...", truncate_chars(text, DISPLAY_MAX_CHARS))
    } else {
        text.to_string()
    }
}
