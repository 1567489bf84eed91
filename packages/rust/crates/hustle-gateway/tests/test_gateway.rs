//! Router tests for the FAQ gateway: the four operations end to end,
//! plus graceful degradation when the message-history read fails.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use hustle_gateway::{InMemoryHistory, MessageHistory, router};

/// History source that always fails, for the degradation path.
struct BrokenHistory;

#[async_trait]
impl MessageHistory for BrokenHistory {
    async fn recent_messages(&self, _limit: usize) -> Result<Vec<String>> {
        anyhow::bail!("storage unavailable")
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn test_router() -> axum::Router {
    router(Arc::new(InMemoryHistory::default()))
}

#[tokio::test]
async fn test_health() {
    let response = test_router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_search_ranks_service_fee_first() {
    let response = test_router()
        .oneshot(
            Request::get("/api/faq/search?q=service%20fee&limit=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let results = json["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0]["id"], "fee-1");
    assert!(results[0]["relevance"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_ask_direct_match() {
    let response = test_router()
        .oneshot(
            Request::post("/api/faq/ask")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"question":"What is the service fee?"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["source"], "knowledge_base");
    assert_eq!(json["confidence"], "high");
    assert_eq!(json["category"], "fees");
}

#[tokio::test]
async fn test_ask_short_question_gets_friendly_reply() {
    let response = test_router()
        .oneshot(
            Request::post("/api/faq/ask")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"question":"x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    // A normal reply, not an error status
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["source"], "system");
    assert_eq!(json["confidence"], "low");
    assert!(!json["answer"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_trending_uses_history_matches() {
    let history = Arc::new(InMemoryHistory::new(vec![
        "What is the service fee?".to_string(),
        "random chat message".to_string(),
    ]));
    let response = router(history)
        .oneshot(Request::get("/api/faq/trending").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let trending = json["trending"].as_array().unwrap();
    assert_eq!(trending[0]["id"], "fee-1");
    assert!(trending.len() >= 5);
}

#[tokio::test]
async fn test_trending_degrades_on_history_failure() {
    let response = router(Arc::new(BrokenHistory))
        .oneshot(Request::get("/api/faq/trending").body(Body::empty()).unwrap())
        .await
        .unwrap();
    // Storage failure never propagates; popular FAQs only
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let trending = json["trending"].as_array().unwrap();
    assert_eq!(trending.len(), 5);
    assert_eq!(trending[0]["id"], "fee-1");
}

#[tokio::test]
async fn test_rewrite_substitutes_kb_answer() {
    let response = test_router()
        .oneshot(
            Request::post("/api/faq/rewrite")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"question":"What is the service fee?","answer":"umm, not sure"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["original"], "umm, not sure");
    assert!(json["rewritten"].as_str().unwrap().contains("10% service fee"));
}

#[tokio::test]
async fn test_rewrite_rejects_empty_answer() {
    let response = test_router()
        .oneshot(
            Request::post("/api/faq/rewrite")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"question":"anything","answer":"  "}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
