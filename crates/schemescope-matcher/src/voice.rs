//! Cleanup of voice transcripts before resolution

use regex::Regex;
use schemescope_core::Result;

/// Strips punctuation and filler words from a spoken query
pub struct VoiceInputParser {
    punctuation_regex: Regex,
    filler_regex: Regex,
}

impl VoiceInputParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            punctuation_regex: Regex::new(r"[^A-Za-z0-9_\s]").map_err(|e| {
                schemescope_core::Error::internal(format!("Failed to compile punctuation regex: {e}"))
            })?,
            filler_regex: Regex::new(r"(?i)scheme|policy|program|about").map_err(|e| {
                schemescope_core::Error::internal(format!("Failed to compile filler regex: {e}"))
            })?,
        })
    }

    /// Normalize a transcript such as "Tell me about the PM-Kisan scheme."
    pub fn parse(&self, transcript: &str) -> String {
        let stripped = self.punctuation_regex.replace_all(transcript.trim(), "");
        let cleaned = self.filler_regex.replace_all(&stripped, "");
        cleaned.trim().to_string()
    }
}
