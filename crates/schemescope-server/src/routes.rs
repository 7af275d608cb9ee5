//! HTTP routes and handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use schemescope_core::{Error, ErrorKind};
use schemescope_matcher::{recommend, UserProfile, DEFAULT_PREDICTION_LIMIT, DEFAULT_SUGGESTION_LIMIT};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::search::{SchemeReport, SearchOutcome, SearchTicket};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/v1/stats", get(stats))
        .route("/v1/predict", get(predict))
        .route("/v1/suggest", get(suggest))
        .route("/v1/recommend", post(recommend_schemes))
        .route("/v1/search", post(search))
        .route("/v1/search/latest", get(latest_search))
        .route("/v1/voice", post(voice_search))
        .route("/v1/report", post(report))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

async fn stats(State(state): State<AppState>) -> Json<serde_json::Value> {
    let snapshot = state.telemetry.snapshot();
    Json(json!({
        "avg_latency_us": snapshot.avg_latency_us(),
        "resolve_rate": snapshot.resolve_rate(),
        "counters": snapshot,
    }))
}

#[derive(Debug, Deserialize)]
struct TextQuery {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

async fn predict(State(state): State<AppState>, Query(params): Query<TextQuery>) -> Json<serde_json::Value> {
    let limit = params.limit.unwrap_or(DEFAULT_PREDICTION_LIMIT);
    let predictions: Vec<&str> = state
        .predictions
        .predict(&params.q, limit)
        .into_iter()
        .map(|e| e.name())
        .collect();

    Json(json!({ "predictions": predictions }))
}

async fn suggest(State(state): State<AppState>, Query(params): Query<TextQuery>) -> Json<serde_json::Value> {
    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let suggestions: Vec<&str> = state
        .search
        .matcher()
        .suggest(&params.q, limit)
        .into_iter()
        .map(|e| e.name())
        .collect();

    Json(json!({ "suggestions": suggestions }))
}

async fn recommend_schemes(Json(profile): Json<UserProfile>) -> Json<serde_json::Value> {
    Json(json!({ "recommendations": recommend(&profile) }))
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: String,
    #[serde(default)]
    is_voice_input: bool,
}

#[derive(Debug, Deserialize)]
struct VoiceRequest {
    transcript: String,
}

/// Search response; `current` is false when a newer search started meanwhile
#[derive(Debug, Serialize)]
struct SearchResponse {
    id: String,
    generation: u64,
    current: bool,
    #[serde(flatten)]
    outcome: SearchOutcome,
}

async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let ticket = state.tracker.begin();
    let outcome = state.search.search(&req.query, req.is_voice_input).await;
    Json(publish(&state, ticket, &req.query, req.is_voice_input, outcome))
}

async fn voice_search(
    State(state): State<AppState>,
    Json(req): Json<VoiceRequest>,
) -> Json<SearchResponse> {
    let ticket = state.tracker.begin();
    let outcome = state.search.search_voice(&req.transcript).await;
    Json(publish(&state, ticket, &req.transcript, true, outcome))
}

fn publish(
    state: &AppState,
    ticket: SearchTicket,
    query: &str,
    is_voice_input: bool,
    outcome: SearchOutcome,
) -> SearchResponse {
    let current = state.tracker.publish(ticket, outcome.clone());
    info!(
        generation = ticket.generation(),
        query = %query,
        is_voice_input,
        outcome = outcome.kind().as_str(),
        current,
        "Search completed"
    );
    if !current {
        state.telemetry.record_stale_discard();
    }

    SearchResponse {
        id: format!("search_{}", uuid::Uuid::new_v4()),
        generation: ticket.generation(),
        current,
        outcome,
    }
}

async fn latest_search(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.tracker.latest() {
        Some(latest) => Ok(Json(latest).into_response()),
        None => Err(AppError::NotFound("No search has completed yet".to_string())),
    }
}

#[derive(Debug, Deserialize)]
struct ReportRequest {
    query: String,
}

async fn report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let scheme = match latest_report(&state, &req.query) {
        Some(report) => {
            debug!("Reusing published result for report on '{}'", report.name);
            report
        }
        None => state
            .search
            .prepare_report(&req.query)
            .await
            .map_err(AppError::from)?,
    };

    let text = state
        .search
        .generate_report(&scheme)
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!({
        "name": scheme.name,
        "report": text,
    })))
}

/// The published result, if it is a resolved search for the same scheme
fn latest_report(state: &AppState, query: &str) -> Option<SchemeReport> {
    let entry = state.search.matcher().resolve(query).ok()?;
    match state.tracker.latest()?.outcome {
        SearchOutcome::Resolved(report) if report.name == entry.name() => Some(*report),
        _ => None,
    }
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug)]
enum AppError {
    NotFound(String),
    Upstream(ErrorKind, String),
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { .. } => AppError::NotFound(err.to_string()),
            other => AppError::Upstream(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorKind::NotFound, msg),
            AppError::Upstream(kind, msg) => {
                let status = match kind {
                    ErrorKind::Fetch | ErrorKind::Generation => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, kind, msg)
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "type": kind,
                "retryable": kind.is_retryable(),
            }
        });

        (status, Json(body)).into_response()
    }
}
