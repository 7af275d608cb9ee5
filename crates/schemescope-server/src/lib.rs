//! SchemeScope Server
//!
//! HTTP service that resolves welfare scheme queries, summarizes public
//! sentiment from fetched comments, and optionally generates AI summaries
//! and reports.

pub mod cli;
pub mod config;
pub mod generator;
pub mod routes;
pub mod search;
pub mod sources;
pub mod state;
pub mod voice;

pub use config::ServerConfig;
pub use generator::{GeminiGenerator, TextGenerator};
pub use routes::create_router;
pub use search::{SchemeReport, SearchOutcome, SearchService, SearchTracker};
pub use sources::{CommentSource, HttpCommentSource, SampleCommentSource};
pub use state::AppState;
pub use voice::{AudioCapture, Microphone, Transcriber, VoiceSession};
