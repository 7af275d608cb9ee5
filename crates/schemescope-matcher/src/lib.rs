//! SchemeScope Matcher
//!
//! Resolves free-text and spoken queries to canonical scheme names.
//!
//! - [`Matcher`] resolves a query, falling back to word-prefix suggestions
//! - [`PredictionEngine`] ranks entries as the user types
//! - [`VoiceInputParser`] cleans transcripts before they reach the matcher
//! - [`recommend`] offers a fixed starter list for a completed profile

pub mod finder;
pub mod matcher;
pub mod prediction;
pub mod voice;

pub use finder::{recommend, UserProfile, RECOMMENDED_SCHEMES};
pub use matcher::{MatchKind, Matcher, DEFAULT_SUGGESTION_LIMIT};
pub use prediction::{PredictionEngine, DEFAULT_PREDICTION_LIMIT, MIN_PREDICTION_CHARS};
pub use voice::VoiceInputParser;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::matcher::{MatchKind, Matcher};
    pub use crate::prediction::PredictionEngine;
    pub use crate::voice::VoiceInputParser;
}
