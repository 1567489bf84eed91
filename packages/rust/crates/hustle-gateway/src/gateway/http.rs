//! HTTP gateway: the four FAQ operations as JSON routes.
//!
//! Request validation (400 for empty bodies), graceful degradation for
//! the trending collaborator, and a friendly reply for sub-2-character
//! questions (never an error status).

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::warn;

use hustle_faq::{MIN_TRENDING_COUNT, ask, rewrite_answer, search, trending_from_messages};
use hustle_types::{AskResponse, RewriteResponse, SearchResult, TrendingFaq};

use crate::history::MessageHistory;

/// Upper bound on question length fed into the matching core. The
/// Levenshtein pass is O(n*m), so pathological inputs are cut here.
const MAX_QUERY_CHARS: usize = 2000;

/// How many history messages one trending request scans.
const HISTORY_SCAN_LIMIT: usize = 50;

/// Default and maximum result caps for the search surface.
const DEFAULT_SEARCH_LIMIT: usize = 5;
const MAX_SEARCH_LIMIT: usize = 20;

/// Shared state: the message-history collaborator for trending.
#[derive(Clone)]
pub struct GatewayState {
    /// Recent-message source; failures degrade to popular FAQs
    pub history: Arc<dyn MessageHistory>,
}

/// Query parameters for GET /api/faq/search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    pub q: String,
    /// Result cap (default 5, max 20)
    pub limit: Option<usize>,
}

/// Request body for POST /api/faq/ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The user's question
    pub question: String,
}

/// Request body for POST /api/faq/rewrite.
#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    /// The question the answer belongs to
    pub question: String,
    /// The human-written answer to substitute or clean
    pub answer: String,
}

/// Response body for GET /api/faq/search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Ranked results, best first
    pub results: Vec<SearchResult>,
}

/// Response body for GET /api/faq/trending.
#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    /// Detected question/answer pairs, padded with popular FAQs
    pub trending: Vec<TrendingFaq>,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed liveness marker
    pub status: &'static str,
}

/// Truncate text to the core's query budget on a char boundary.
fn cap_query(text: &str) -> &str {
    match text.char_indices().nth(MAX_QUERY_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Validate the rewrite request; both fields must be non-empty.
pub fn validate_rewrite_request(
    body: &RewriteRequest,
) -> Result<(String, String), (StatusCode, String)> {
    let question = body.question.trim().to_string();
    let answer = body.answer.trim().to_string();
    if question.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "question must be non-empty".to_string(),
        ));
    }
    if answer.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "answer must be non-empty".to_string(),
        ));
    }
    Ok((question, answer))
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn handle_search(
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);
    let results = search(cap_query(&params.q), limit);
    Ok(Json(SearchResponse { results }))
}

async fn handle_ask(Json(body): Json<AskRequest>) -> Json<AskResponse> {
    // The ladder's guard handles degenerate questions with a friendly
    // reply; no error status for them, per the boundary contract.
    Json(ask(cap_query(&body.question)))
}

async fn handle_trending(State(state): State<GatewayState>) -> Json<TrendingResponse> {
    let messages = match state.history.recent_messages(HISTORY_SCAN_LIMIT).await {
        Ok(msgs) => msgs,
        Err(e) => {
            // Degrade to popular FAQs only; never surface the storage error.
            warn!(error = %e, "message history read failed; trending degrades to popular FAQs");
            Vec::new()
        }
    };
    let trending = trending_from_messages(&messages, MIN_TRENDING_COUNT);
    Json(TrendingResponse { trending })
}

async fn handle_rewrite(
    Json(body): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, (StatusCode, String)> {
    let (question, answer) = validate_rewrite_request(&body)?;
    let rewritten = rewrite_answer(&answer, cap_query(&question));
    Ok(Json(RewriteResponse {
        original: answer,
        rewritten,
        question,
    }))
}

/// Build the gateway router.
pub fn router(history: Arc<dyn MessageHistory>) -> Router {
    let state = GatewayState { history };
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/faq/search", get(handle_search))
        .route("/api/faq/ask", post(handle_ask))
        .route("/api/faq/trending", get(handle_trending))
        .route("/api/faq/rewrite", post(handle_rewrite))
        .with_state(state)
}

/// Run the HTTP server; binds to `bind_addr` (e.g. `0.0.0.0:8080`).
/// Graceful shutdown on Ctrl+C (SIGINT) and SIGTERM (Unix).
pub async fn run_http(history: Arc<dyn MessageHistory>, bind_addr: &str) -> Result<()> {
    let app = router(history);
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("faq gateway listening on {} (Ctrl+C/SIGTERM to stop)", bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("faq gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let ctrl_c = tokio::signal::ctrl_c();
        let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
            let _ = ctrl_c.await;
            return;
        };
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
