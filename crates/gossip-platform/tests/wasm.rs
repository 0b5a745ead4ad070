//! WASM-target tests for gossip-platform (Node.js runtime).
//!
//! Covers the response decoders, status classification, and the proxy's
//! cancellation paths under wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! Nothing here needs a reachable backend.

use wasm_bindgen_test::*;

use gossip_core::ports::QueryPort;
use gossip_platform::catalog::decode_catalog;
use gossip_platform::http::check_status;
use gossip_platform::query::decode_answer;
use gossip_platform::{HttpCatalogClient, HttpQueryProxy};
use gossip_types::GossipError;
use gossip_types::config::{ApiConfig, CatalogConfig};
use tokio_util::sync::CancellationToken;

// ─── Answer Decoding ─────────────────────────────────────

#[wasm_bindgen_test]
fn answer_is_returned_unchanged() {
    let answer = decode_answer(r#"{"answer":"  Two articles mention it.\n"}"#).unwrap();
    assert_eq!(answer.answer, "  Two articles mention it.\n");
}

#[wasm_bindgen_test]
fn answer_ignores_extra_fields() {
    let answer = decode_answer(r#"{"answer":"ok","sources":[],"took_ms":12}"#).unwrap();
    assert_eq!(answer.answer, "ok");
}

#[wasm_bindgen_test]
fn answer_missing_is_payload_error() {
    let err = decode_answer(r#"{"result":"ok"}"#).unwrap_err();
    assert_eq!(err.kind(), "payload");
    assert_eq!(err.to_string(), "Malformed response: missing answer");
}

#[wasm_bindgen_test]
fn answer_backend_error_keeps_message() {
    let err = decode_answer(r#"{"status":"error","message":"index not ready"}"#).unwrap_err();
    assert!(matches!(err, GossipError::Payload(ref m) if m.contains("index not ready")));
}

#[wasm_bindgen_test]
fn answer_blank_is_payload_error() {
    let err = decode_answer(r#"{"answer":"   "}"#).unwrap_err();
    assert_eq!(err.kind(), "payload");
}

#[wasm_bindgen_test]
fn answer_wrong_type_is_payload_error() {
    let err = decode_answer(r#"{"answer":42}"#).unwrap_err();
    assert_eq!(err.kind(), "payload");

    let err = decode_answer(r#"{"answer":null}"#).unwrap_err();
    assert_eq!(err.kind(), "payload");
}

#[wasm_bindgen_test]
fn answer_invalid_json_is_payload_error() {
    let err = decode_answer("<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err.kind(), "payload");
}

// ─── Status Classification ───────────────────────────────

#[wasm_bindgen_test]
fn status_2xx_passes() {
    assert!(check_status(200, "OK").is_ok());
    assert!(check_status(204, "No Content").is_ok());
    assert!(check_status(299, "").is_ok());
}

#[wasm_bindgen_test]
fn status_non_2xx_is_status_error() {
    let err = check_status(502, "Bad Gateway").unwrap_err();
    assert_eq!(
        err,
        GossipError::Status { status: 502, status_text: "Bad Gateway".to_string() }
    );
    assert_eq!(err.kind(), "status");
    assert_eq!(err.to_string(), "Backend API error: HTTP 502 Bad Gateway");
}

#[wasm_bindgen_test]
fn status_boundaries() {
    assert_eq!(check_status(199, "").unwrap_err().kind(), "status");
    assert_eq!(check_status(300, "Multiple Choices").unwrap_err().kind(), "status");
    assert_eq!(check_status(404, "Not Found").unwrap_err().kind(), "status");
}

// ─── Catalog Decoding ────────────────────────────────────

#[wasm_bindgen_test]
fn catalog_success_preserves_order() {
    let body = r#"{
        "status": "success",
        "articles": [
            {"title": "First", "url": "https://public.fr/1", "source": "public.fr"},
            {"title": "Second", "url": "https://vsd.fr/2", "source": "vsd.fr",
             "description": "teaser", "categories": ["tv"], "image_url": null,
             "publication_date": "2025-03-01T10:30:00", "content": "ignored"}
        ]
    }"#;
    let articles = decode_catalog(body).unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "First");
    assert_eq!(articles[1].source, "vsd.fr");
    assert_eq!(articles[1].description.as_deref(), Some("teaser"));
    assert!(articles[1].image_url.is_none());
}

#[wasm_bindgen_test]
fn catalog_success_without_articles_is_empty() {
    assert!(decode_catalog(r#"{"status":"success"}"#).unwrap().is_empty());
    assert!(decode_catalog(r#"{"status":"success","articles":[]}"#).unwrap().is_empty());
}

#[wasm_bindgen_test]
fn catalog_skips_invalid_entries() {
    let body = r#"{
        "status": "success",
        "articles": [
            {"title": "Kept", "url": "u1", "source": "S"},
            {"title": "", "url": "u2", "source": "S"},
            {"url": "u3", "source": "S"},
            "not an object",
            {"title": "Also kept", "url": "u5", "source": "T"}
        ]
    }"#;
    let articles = decode_catalog(body).unwrap();
    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Kept", "Also kept"]);
}

#[wasm_bindgen_test]
fn catalog_error_status_is_rejected() {
    let err = decode_catalog(r#"{"status":"error","message":"db down"}"#).unwrap_err();
    match err {
        GossipError::CatalogRejected { status, message } => {
            assert_eq!(status, "error");
            assert_eq!(message.as_deref(), Some("db down"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[wasm_bindgen_test]
fn catalog_missing_status_is_payload_error() {
    let err = decode_catalog(r#"{"articles":[]}"#).unwrap_err();
    assert_eq!(err.kind(), "payload");
}

// ─── Adapters ────────────────────────────────────────────

#[wasm_bindgen_test]
fn query_proxy_endpoint_from_config() {
    let proxy = HttpQueryProxy::new(&ApiConfig::default()).unwrap();
    assert_eq!(proxy.endpoint(), "http://localhost:8000/query");

    let proxy = HttpQueryProxy::new(&ApiConfig { base_url: Some("/api/".to_string()) }).unwrap();
    assert_eq!(proxy.endpoint(), "/api/query");
}

#[wasm_bindgen_test]
fn query_proxy_rejects_bad_config() {
    let result = HttpQueryProxy::new(&ApiConfig { base_url: Some("localhost:8000".to_string()) });
    assert!(matches!(result, Err(GossipError::Config(_))));
}

#[wasm_bindgen_test]
async fn query_proxy_empty_query_never_sends() {
    let proxy = HttpQueryProxy::with_url("http://127.0.0.1:9/query");
    let err = proxy.submit_query("  ", &CancellationToken::new()).await.unwrap_err();
    assert_eq!(err, GossipError::EmptyQuery);
}

#[wasm_bindgen_test]
async fn query_proxy_cancelled_token_never_sends() {
    let proxy = HttpQueryProxy::with_url("http://127.0.0.1:9/query");
    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = proxy.submit_query("hello", &cancel).await.unwrap_err();
    assert_eq!(err, GossipError::Cancelled);
}

#[wasm_bindgen_test]
async fn query_proxy_cancel_in_flight_aborts_request() {
    // Non-routable address: the connection attempt never completes on its own
    let proxy = HttpQueryProxy::with_url("http://10.255.255.1/query");
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();

    // The query is polled first, so the fetch is pending when the token fires
    let (result, ()) = futures::join!(proxy.submit_query("hello", &cancel), async move {
        trigger.cancel();
    });

    assert_eq!(result.unwrap_err(), GossipError::Cancelled);
    assert!(cancel.is_cancelled());
}

#[wasm_bindgen_test]
fn catalog_client_url_from_config() {
    let client = HttpCatalogClient::new(&CatalogConfig::default());
    assert_eq!(client.url(), "/articles?limit=100");
}
