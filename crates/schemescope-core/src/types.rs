//! Core types for SchemeScope

use serde::{Deserialize, Serialize};
use std::fmt;

/// A public comment about a scheme, as returned by the comment source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Source-assigned identifier (opaque)
    pub id: String,

    /// Comment text
    pub body: String,

    /// Author handle
    pub author: String,

    /// Net vote score
    #[serde(default)]
    pub score: i64,

    /// Creation timestamp (seconds since the Unix epoch)
    #[serde(default)]
    pub created: f64,
}

impl Comment {
    /// Create a comment with only an id and body
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            author: String::new(),
            score: 0,
            created: 0.0,
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set score and creation time
    pub fn with_score(mut self, score: i64, created: f64) -> Self {
        self.score = score;
        self.created = created;
        self
    }
}

/// Three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Display order used for per-label listings
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comment paired with its derived label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedComment {
    pub comment: Comment,
    pub label: SentimentLabel,
}

impl ClassifiedComment {
    pub fn new(comment: Comment, label: SentimentLabel) -> Self {
        Self { comment, label }
    }

    /// Comment body
    pub fn text(&self) -> &str {
        &self.comment.body
    }
}

/// Likely beneficiary profile for a scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryPersona {
    pub age_range: String,
    pub gender: String,
    pub occupation: String,
    pub location: String,
    pub income: String,
    pub additional_details: String,
}

impl BeneficiaryPersona {
    /// Derive a persona from the scheme name.
    ///
    /// Maternity schemes ("Matru") and farmer schemes ("Kisan") get dedicated
    /// profiles; everything else falls back to the general welfare profile.
    pub fn for_scheme(name: &str) -> Self {
        if name.contains("Matru") {
            Self::build(
                "18-45",
                "Female",
                "Various",
                "All India",
                "Any",
                "Pregnant women and lactating mothers",
            )
        } else if name.contains("Kisan") {
            Self::build(
                "18-65",
                "Any",
                "Farmer",
                "Rural India",
                "Small & marginal farmers",
                "Landholding farmers",
            )
        } else {
            Self::build(
                "18-65",
                "Any",
                "Various",
                "All India",
                "Below Poverty Line",
                "Economically weaker sections",
            )
        }
    }

    fn build(
        age_range: &str,
        gender: &str,
        occupation: &str,
        location: &str,
        income: &str,
        additional_details: &str,
    ) -> Self {
        Self {
            age_range: age_range.to_string(),
            gender: gender.to_string(),
            occupation: occupation.to_string(),
            location: location.to_string(),
            income: income.to_string(),
            additional_details: additional_details.to_string(),
        }
    }
}

/// Short description shown alongside a resolved scheme
pub fn scheme_description(name: &str) -> String {
    format!("{name} is a welfare scheme by the Indian government designed to help citizens.")
}
