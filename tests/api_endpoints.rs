//! HTTP API tests.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot` over the
//! bundled `rules.json`.

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use legalaid::http::{AppState, router};
use legalaid::nlp::RuleBasedTagger;
use legalaid::storage::FileRuleSource;
use legalaid::{AdviceService, RuleSet};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Test Helpers
// ============================================================================

const ALLOWED_ORIGIN: &str = "http://localhost:5173";

fn app() -> Router {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("rules.json");
    let rules = RuleSet::load(&FileRuleSource::new(path)).unwrap();
    let service = AdviceService::new(Arc::new(rules), Arc::new(RuleBasedTagger::new()));
    router(AppState::new(service), &[ALLOWED_ORIGIN.to_string()])
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ============================================================================
// Informational endpoints
// ============================================================================

#[tokio::test]
async fn test_root_banner() {
    let (status, body) = send(get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Legal Aid Expert System API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_reports_rule_count() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "rules_loaded": 6}));
}

#[tokio::test]
async fn test_categories_sorted() {
    let (status, body) = send(get("/categories")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"], json!(["Consumer", "Employment", "Housing"]));
}

#[tokio::test]
async fn test_scenarios_by_category() {
    let (status, body) = send(get("/test-scenarios")).await;
    assert_eq!(status, StatusCode::OK);
    let grouped = body["scenarios_by_category"].as_object().unwrap();
    assert_eq!(grouped["Housing"].as_array().unwrap().len(), 4);
    assert_eq!(grouped["Employment"].as_array().unwrap().len(), 4);
    assert_eq!(grouped["Consumer"].as_array().unwrap().len(), 3);
}

// ============================================================================
// POST /scenarios
// ============================================================================

#[tokio::test]
async fn test_scenarios_accept_alias() {
    let (status, body) = send(post_json("/scenarios", &json!({"category": "tenant"}))).await;
    assert_eq!(status, StatusCode::OK);
    let scenarios = body["scenarios"].as_array().unwrap();
    assert_eq!(scenarios.len(), 4);
    assert_eq!(scenarios[0]["title"], "Security Deposit Not Returned");
}

#[tokio::test]
async fn test_scenarios_unknown_category_returns_all() {
    let (status, body) = send(post_json("/scenarios", &json!({"category": "Immigration"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scenarios"].as_array().unwrap().len(), 11);
}

// ============================================================================
// POST /query
// ============================================================================

#[tokio::test]
async fn test_query_matches_deposit_rule() {
    let (status, body) = send(post_json(
        "/query",
        &json!({"category": "landlord", "query": "My landlord won't return my security deposit"}),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched_rule"], "housing-001");
    assert_eq!(body["applicable_laws"].as_array().unwrap().len(), 2);
    assert_eq!(body["action_plan"].as_array().unwrap().len(), 5);
    for field in ["answer", "suggestion", "reasoning"] {
        assert!(body[field].as_str().is_some_and(|text| !text.is_empty()));
    }
}

#[tokio::test]
async fn test_query_family_matter_is_referred() {
    let (status, body) = send(post_json(
        "/query",
        &json!({"category": "Housing", "query": "My ex-spouse is violating our custody agreement"}),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched_rule"], Value::Null);
    assert_eq!(body["applicable_laws"], json!([]));
    assert!(body["answer"].as_str().unwrap().contains("family law"));
}

#[tokio::test]
async fn test_query_without_match_gets_fallback() {
    let (status, body) = send(post_json(
        "/query",
        &json!({"category": "Housing", "query": "How does sailboat registration work"}),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matched_rule"], Value::Null);
    assert_eq!(body["action_plan"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_empty_query_is_bad_request() {
    let (status, body) = send(post_json(
        "/query",
        &json!({"category": "Housing", "query": "   "}),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Query cannot be empty"}));
}

#[tokio::test]
async fn test_malformed_body_is_json_detail() {
    let request = Request::post("/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));

    let (status, body) = send(post_json("/query", &json!({"category": "Housing"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("query")));

    let (status, body) = send(post_json("/scenarios", &json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::get("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let response = app().oneshot(get("/health")).await.unwrap();
    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_security_headers() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let request = Request::get("/categories")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ALLOWED_ORIGIN
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_cors_rejects_other_origin() {
    let request = Request::get("/categories")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
