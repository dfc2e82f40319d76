//! Integration tests for the Vestor API.
//!
//! Each test builds an independent in-memory state over a scripted mock
//! backend and drives the router directly via `tower::ServiceExt`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use vestor_api::handlers::{ChatResponse, HealthResponse, HistoryResponse, SessionsResponse};
use vestor_api::{create_router, AppState};
use vestor_backend::{MockBackend, TextCompletion};
use vestor_chat::{ChatOrchestrator, FALLBACK_REPLY, GREETING_REPLY, OUT_OF_DOMAIN_REPLY};
use vestor_core::VestorConfig;

// =============================================================================
// Helpers
// =============================================================================

/// Build a router over the given mock backend.
fn make_app(backend: MockBackend) -> axum::Router {
    make_app_with_config(backend, VestorConfig::default())
}

fn make_app_with_config(backend: MockBackend, config: VestorConfig) -> axum::Router {
    let orchestrator = ChatOrchestrator::new(
        Arc::new(backend) as Arc<dyn TextCompletion>,
        config.chat.clone(),
    );
    create_router(AppState::new(orchestrator, config))
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_as<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Run one chat turn and return the parsed response.
async fn send_chat(app: &axum::Router, message: &str, session_id: Option<Uuid>) -> ChatResponse {
    let payload = match session_id {
        Some(sid) => format!(r#"{{"message": "{}", "session_id": "{}"}}"#, message, sid),
        None => format!(r#"{{"message": "{}"}}"#, message),
    };
    let resp = app
        .clone()
        .oneshot(post_json("/chat", &payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_as(resp).await
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = make_app(MockBackend::replying("yes"));
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthResponse = body_as(resp).await;
    assert_eq!(health.status, "ok");
}

// =============================================================================
// Chat endpoint
// =============================================================================

#[tokio::test]
async fn test_chat_greeting_turn() {
    let app = make_app(MockBackend::failing());
    let chat = send_chat(&app, "Hello", None).await;
    assert_eq!(chat.reply, GREETING_REPLY);
    assert_ne!(chat.session_id, Uuid::nil());
}

#[tokio::test]
async fn test_chat_refusal_turn() {
    let app = make_app(MockBackend::replying("no"));
    let chat = send_chat(&app, "What's the weather today?", None).await;
    assert_eq!(chat.reply, OUT_OF_DOMAIN_REPLY);
}

#[tokio::test]
async fn test_chat_forwarded_turn() {
    let backend = MockBackend::replying("unused default");
    backend.push_reply("yes");
    backend.push_reply("Stocks offer growth; bonds offer stability.");
    let app = make_app(backend);

    let chat = send_chat(&app, "Compare stocks and bonds", None).await;
    assert_eq!(chat.reply, "Stocks offer growth; bonds offer stability.");
}

#[tokio::test]
async fn test_chat_backend_failure_yields_fallback() {
    let backend = MockBackend::replying("unused default");
    backend.push_reply("yes");
    backend.push_failure();
    let app = make_app(backend);

    let chat = send_chat(&app, "Compare stocks and bonds", None).await;
    assert_eq!(chat.reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_chat_empty_message_is_bad_request() {
    let app = make_app(MockBackend::replying("yes"));
    let resp = app
        .oneshot(post_json("/chat", r#"{"message": ""}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["message"], "message cannot be empty");
}

#[tokio::test]
async fn test_chat_too_long_message_is_unprocessable() {
    let app = make_app(MockBackend::replying("yes"));
    let long_msg = "a".repeat(2001);
    let payload = format!(r#"{{"message": "{}"}}"#, long_msg);
    let resp = app.oneshot(post_json("/chat", &payload)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "unprocessable_entity");
}

#[tokio::test]
async fn test_chat_disabled_is_service_unavailable() {
    let mut config = VestorConfig::default();
    config.chat.enabled = false;
    let app = make_app_with_config(MockBackend::replying("yes"), config);

    let resp = app
        .oneshot(post_json("/chat", r#"{"message": "Compare stocks and bonds"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "service_unavailable");
}

#[tokio::test]
async fn test_chat_malformed_body_rejected() {
    let app = make_app(MockBackend::replying("yes"));
    let resp = app
        .oneshot(post_json("/chat", "{ not json"))
        .await
        .unwrap();
    // axum's Json extractor rejects before the handler runs.
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_chat_session_reuse() {
    let app = make_app(MockBackend::replying("yes"));
    let first = send_chat(&app, "first query", None).await;
    let second = send_chat(&app, "second query", Some(first.session_id)).await;
    assert_eq!(first.session_id, second.session_id);
}

// =============================================================================
// Sessions and history
// =============================================================================

#[tokio::test]
async fn test_sessions_empty_at_start() {
    let app = make_app(MockBackend::replying("yes"));
    let resp = app.oneshot(get("/sessions")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let sessions: SessionsResponse = body_as(resp).await;
    assert!(sessions.sessions.is_empty());
}

#[tokio::test]
async fn test_sessions_listed_after_chat() {
    let app = make_app(MockBackend::replying("yes"));
    let chat = send_chat(&app, "first query", None).await;

    let resp = app.oneshot(get("/sessions")).await.unwrap();
    let sessions: SessionsResponse = body_as(resp).await;
    assert_eq!(sessions.sessions.len(), 1);
    assert_eq!(sessions.sessions[0].id, chat.session_id);
    assert_eq!(sessions.sessions[0].message_count, 1);
}

#[tokio::test]
async fn test_history_returns_ordered_messages() {
    let app = make_app(MockBackend::replying("yes"));
    let first = send_chat(&app, "first query", None).await;
    send_chat(&app, "second query", Some(first.session_id)).await;

    let uri = format!("/sessions/{}/history", first.session_id);
    let resp = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let history: HistoryResponse = body_as(resp).await;
    assert_eq!(history.session_id, first.session_id);
    assert_eq!(history.messages.len(), 4);
    assert_eq!(history.messages[0].content, "first query");
    assert_eq!(history.messages[2].content, "second query");
}

#[tokio::test]
async fn test_history_roles_serialized_lowercase() {
    let app = make_app(MockBackend::replying("yes"));
    let chat = send_chat(&app, "first query", None).await;

    let uri = format!("/sessions/{}/history", chat.session_id);
    let resp = app.oneshot(get(&uri)).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][1]["role"], "assistant");
}

#[tokio::test]
async fn test_history_unknown_session_is_not_found() {
    let app = make_app(MockBackend::replying("yes"));
    let uri = format!("/sessions/{}/history", Uuid::new_v4());
    let resp = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_delete_session() {
    let app = make_app(MockBackend::replying("yes"));
    let chat = send_chat(&app, "first query", None).await;

    let uri = format!("/sessions/{}", chat.session_id);
    let resp = app.clone().oneshot(delete(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Deleting again: gone.
    let resp = app.oneshot(delete(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = make_app(MockBackend::replying("yes"));
    let resp = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
