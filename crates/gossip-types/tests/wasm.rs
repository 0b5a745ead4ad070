//! WASM-target tests for gossip-types.
//!
//! Mirrors the wire-format unit tests under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use gossip_types::article::*;
use gossip_types::message::*;
use gossip_types::config::*;
use gossip_types::error::*;
use gossip_types::session::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user(MessageId(1), "Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.text, "Hello");
    assert!(!msg.created_at.is_empty());
}

#[wasm_bindgen_test]
fn message_assistant() {
    let msg = Message::assistant(MessageId(2), "Hi");
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.id.to_string(), "msg-2");
}

// ─── Article Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn article_deserialize_backend_record() {
    let json = r#"{
        "title": "T1",
        "url": "https://public.fr/t1",
        "source": "X",
        "content": "ignored",
        "publication_date": "2025-01-02T03:04:05"
    }"#;
    let article: Article = serde_json::from_str(json).unwrap();
    assert_eq!(article.title, "T1");
    assert_eq!(article.source, "X");
    assert!(article.published_at().is_some());
}

// ─── Config Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn config_default_query_url() {
    let config = SearchConfig::default();
    assert_eq!(config.api.query_url().unwrap(), "http://localhost:8000/query");
    assert_eq!(config.catalog.url(), "/articles?limit=100");
}

#[wasm_bindgen_test]
fn config_trims_trailing_slash() {
    let config = SearchConfig::from_env(Some("https://gossip.example/"));
    assert_eq!(config.api.resolved_base_url().unwrap(), "https://gossip.example");
}

// ─── Session / Error Tests ───────────────────────────────

#[wasm_bindgen_test]
fn session_info_has_uuid() {
    let info = SessionInfo::new();
    assert_eq!(info.id.len(), 36);
}

#[wasm_bindgen_test]
fn error_display() {
    let err = GossipError::Status { status: 500, status_text: "Internal Server Error".to_string() };
    assert_eq!(err.to_string(), "Backend API error: HTTP 500 Internal Server Error");
    assert_eq!(err.kind(), "status");
}
