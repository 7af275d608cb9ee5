//! Comment sources
//!
//! The live source is an HTTP service that searches a subreddit for a keyword
//! and returns the matching comments as a JSON array. The sample source
//! serves a fixed set of templated comments for offline use.

use async_trait::async_trait;
use schemescope_core::{Comment, Error, Result};
use std::time::Duration;
use tracing::{debug, error};

use crate::config::CommentSourceConfig;

/// Anything that can return public comments for a search keyword
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch comments in source order; a failed fetch yields no comments at all
    async fn fetch(&self, keyword: &str) -> Result<Vec<Comment>>;

    /// Source name for logs
    fn name(&self) -> &str;
}

/// Comment source backed by the comment search HTTP service
pub struct HttpCommentSource {
    client: reqwest::Client,
    base_url: String,
    subreddit: String,
}

impl HttpCommentSource {
    pub fn new(config: &CommentSourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            subreddit: config.subreddit.clone(),
        })
    }
}

#[async_trait]
impl CommentSource for HttpCommentSource {
    async fn fetch(&self, keyword: &str) -> Result<Vec<Comment>> {
        let url = format!("{}/api/reddit_comments", self.base_url);
        debug!("Fetching comments for {:?} from {}", keyword, url);

        let response = self
            .client
            .get(&url)
            .query(&[("policy", keyword), ("subreddit", self.subreddit.as_str())])
            .send()
            .await
            .map_err(|e| Error::fetch(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            error!("Comment source returned {}", response.status());
            return Err(Error::fetch(format!(
                "comment source returned {}",
                response.status()
            )));
        }

        let comments: Vec<Comment> = response
            .json()
            .await
            .map_err(|e| Error::fetch(format!("invalid comment payload: {e}")))?;

        debug!("Fetched {} comments for {:?}", comments.len(), keyword);
        Ok(comments)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Deterministic templated comments for offline mode
#[derive(Debug, Clone, Default)]
pub struct SampleCommentSource;

impl SampleCommentSource {
    pub fn new() -> Self {
        Self
    }

    fn templates() -> [(&'static str, &'static str, i64, i64); 5] {
        [
            (
                "{} has been very helpful for my family. The application process was straightforward.",
                "citizen123",
                15,
                1000,
            ),
            (
                "I applied for {} three months ago and still waiting for approval. The process is too bureaucratic.",
                "concerned_voter",
                8,
                500,
            ),
            (
                "Does anyone know the eligibility criteria for {}? The website doesn't provide clear information.",
                "info_seeker",
                5,
                300,
            ),
            (
                "My grandmother received benefits from {} and it made a huge difference in her healthcare access.",
                "grateful_grandchild",
                22,
                100,
            ),
            (
                "The implementation of {} varies greatly from state to state. Some states are doing much better than others.",
                "policy_analyst",
                17,
                200,
            ),
        ]
    }
}

#[async_trait]
impl CommentSource for SampleCommentSource {
    async fn fetch(&self, keyword: &str) -> Result<Vec<Comment>> {
        let now = chrono::Utc::now().timestamp();

        Ok(Self::templates()
            .iter()
            .enumerate()
            .map(|(i, (template, author, score, age_secs))| {
                Comment::new((i + 1).to_string(), template.replace("{}", keyword))
                    .with_author(*author)
                    .with_score(*score, (now - age_secs) as f64)
            })
            .collect())
    }

    fn name(&self) -> &str {
        "sample"
    }
}
