//! Query proxy: forwards one user query to the answering service.
//!
//! `POST {base}/query` with `{"query": ...}`, expecting `{"answer": ...}`.
//! Transport, status, and payload failures are told apart here for the log
//! line only; the session controller treats them all the same.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use web_sys::AbortController;

use gossip_core::ports::{QueryAnswer, QueryPort};
use gossip_types::{GossipError, Result, config::ApiConfig};

use crate::http::check_status;

pub struct HttpQueryProxy {
    url: String,
}

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

impl HttpQueryProxy {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_url(config.query_url()?))
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn send(&self, query: &str, cancel: &CancellationToken) -> Result<QueryAnswer> {
        if query.trim().is_empty() {
            return Err(GossipError::EmptyQuery);
        }
        if cancel.is_cancelled() {
            return Err(GossipError::Cancelled);
        }

        let abort = AbortController::new()
            .map_err(|e| GossipError::Transport(format!("AbortController unavailable: {:?}", e)))?;

        let request = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&abort.signal()))
            .json(&QueryBody { query })
            .map_err(|e| GossipError::Transport(e.to_string()))?;

        let exchange = async move {
            let response = request
                .send()
                .await
                .map_err(|e| GossipError::Transport(e.to_string()))?;

            check_status(response.status(), &response.status_text())?;

            let body = response
                .text()
                .await
                .map_err(|e| GossipError::Transport(e.to_string()))?;
            decode_answer(&body)
        };

        match future::select(Box::pin(exchange), Box::pin(cancel.cancelled())).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                // Rejects the pending fetch and closes the connection
                abort.abort();
                Err(GossipError::Cancelled)
            }
        }
    }
}

#[async_trait(?Send)]
impl QueryPort for HttpQueryProxy {
    async fn submit_query(&self, query: &str, cancel: &CancellationToken) -> Result<QueryAnswer> {
        let result = self.send(query, cancel).await;
        match &result {
            Ok(_) => log::debug!("Query answered by {}", self.url),
            Err(GossipError::Cancelled) => log::info!("Query to {} cancelled", self.url),
            Err(e) => log::warn!("Query to {} failed [{}]: {}", self.url, e.kind(), e),
        }
        result
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

/// Decode a success-status body into an answer.
///
/// The answer is returned as sent. A missing, non-string, or blank
/// `answer` is a payload error; when the backend reports its own failure
/// as `{"status": "error", "message": ...}` the message is kept for the log.
pub fn decode_answer(body: &str) -> Result<QueryAnswer> {
    let value: Value = serde_json::from_str(body)?;

    match value.get("answer") {
        Some(Value::String(answer)) if !answer.trim().is_empty() => Ok(QueryAnswer {
            answer: answer.clone(),
        }),
        Some(Value::String(_)) => Err(GossipError::Payload("empty answer".to_string())),
        Some(other) => Err(GossipError::Payload(format!(
            "answer is not a string: {}",
            other
        ))),
        None => {
            let detail = value.get("message").and_then(Value::as_str);
            Err(GossipError::Payload(match detail {
                Some(message) => format!("missing answer (backend said: {})", message),
                None => "missing answer".to_string(),
            }))
        }
    }
}
