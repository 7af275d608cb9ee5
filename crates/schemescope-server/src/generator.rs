//! AI text generation for scheme summaries and reports
//!
//! Generation is best-effort: callers treat every failure as a
//! [`Error::Generation`] and carry on without the generated text.

use async_trait::async_trait;
use schemescope_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::config::GeneratorConfig;
use crate::search::SchemeReport;

/// Produces prose about a scheme
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short summary of a scheme's objective and beneficiaries
    async fn summarize(&self, scheme_name: &str) -> Result<String>;

    /// Structured report for a resolved scheme
    async fn report(&self, report: &SchemeReport) -> Result<String>;
}

/// Prompt for the short summary
pub fn summary_prompt(scheme_name: &str) -> String {
    format!(
        "Provide a concise 2-3 sentence summary of the Indian government welfare scheme: {scheme_name}. \
         Focus on its main objective and primary beneficiaries."
    )
}

/// Prompt for the full report
pub fn report_prompt(report: &SchemeReport) -> Result<String> {
    let persona = serde_json::to_string(&report.persona)?;
    let sentiment = &report.sentiment;

    Ok(format!(
        "Generate a comprehensive report about the Indian government welfare scheme: {name}

Key points to cover:
1. Brief overview and objectives
2. Target beneficiaries (based on this profile: {persona})
3. Key benefits and features
4. Public sentiment analysis (based on: positive {positive}%, neutral {neutral}%, negative {negative}%)
5. Implementation challenges and recommendations

Please provide a well-structured response with clear sections and bullet points where appropriate.",
        name = report.name,
        positive = sentiment.positive,
        neutral = sentiment.neutral,
        negative = sentiment.negative,
    ))
}

/// Gemini `generateContent` client
pub struct GeminiGenerator {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiGenerator {
    pub fn new(config: &GeneratorConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: format!(
                "{}/models/{}:generateContent",
                config.endpoint.trim_end_matches('/'),
                config.model
            ),
            api_key: api_key.into(),
        })
    }

    /// Build a generator from config, reading the key from the configured
    /// environment variable. Returns `None` when generation is disabled or
    /// no key is set.
    pub fn from_env(config: &GeneratorConfig) -> Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }

        match std::env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(Some(Self::new(config, key)?)),
            _ => {
                warn!(
                    "{} is not set; AI summaries and reports are disabled",
                    config.api_key_env
                );
                Ok(None)
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::generation(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            error!("Generation request failed: {}", response.status());
            return Err(Error::generation(format!(
                "service returned {}",
                response.status()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::generation(format!("invalid response: {e}")))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::generation("empty response"));
        }

        debug!("Generated {} characters", text.len());
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn summarize(&self, scheme_name: &str) -> Result<String> {
        self.generate(&summary_prompt(scheme_name)).await
    }

    async fn report(&self, report: &SchemeReport) -> Result<String> {
        let prompt = report_prompt(report)?;
        self.generate(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse, Json, Router};

    /// Answer every request with `response` on an ephemeral local port
    async fn serve<R>(response: R) -> String
    where
        R: IntoResponse + Clone + Send + Sync + 'static,
    {
        let router = Router::new().fallback(move || {
            let response = response.clone();
            async move { response }
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1beta")
    }

    fn generator_for(endpoint: String) -> GeminiGenerator {
        let config = GeneratorConfig {
            endpoint,
            timeout_secs: 5,
            ..Default::default()
        };
        GeminiGenerator::new(&config, "test-key").unwrap()
    }

    #[tokio::test]
    async fn test_non_success_status_is_generation_error() {
        let endpoint = serve((StatusCode::SERVICE_UNAVAILABLE, "overloaded")).await;
        let err = generator_for(endpoint)
            .summarize("Startup India")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_generation_error() {
        let endpoint = serve(Json(serde_json::json!({ "candidates": [] }))).await;
        let err = generator_for(endpoint)
            .summarize("Startup India")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
        assert!(err.to_string().contains("empty response"));
    }

    #[tokio::test]
    async fn test_successful_generation() {
        let endpoint = serve(Json(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "Startup India backs founders." }] } }]
        })))
        .await;
        let text = generator_for(endpoint).summarize("Startup India").await.unwrap();
        assert_eq!(text, "Startup India backs founders.");
    }

    #[test]
    fn test_summary_prompt_names_scheme() {
        let prompt = summary_prompt("Startup India");
        assert!(prompt.contains("welfare scheme: Startup India."));
        assert!(prompt.contains("primary beneficiaries"));
    }

    #[test]
    fn test_disabled_generator() {
        let config = GeneratorConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(GeminiGenerator::from_env(&config).unwrap().is_none());
    }

    #[test]
    fn test_missing_key_disables_generator() {
        let config = GeneratorConfig {
            api_key_env: "SCHEMESCOPE_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert!(GeminiGenerator::from_env(&config).unwrap().is_none());
    }

    #[test]
    fn test_request_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "Part one. "}, {"text": "Part two."}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Part one. Part two.");
    }
}
