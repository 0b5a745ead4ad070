//! Article catalog client.
//! One `GET` at session start; any failure leaves the session without articles.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;

use gossip_core::ports::CatalogPort;
use gossip_types::{GossipError, Result, article::Article, config::CatalogConfig};

use crate::http::check_status;

pub struct HttpCatalogClient {
    url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self { url: config.url() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl CatalogPort for HttpCatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<Article>> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| GossipError::Transport(e.to_string()))?;

        check_status(response.status(), &response.status_text())?;

        let body = response
            .text()
            .await
            .map_err(|e| GossipError::Transport(e.to_string()))?;
        decode_catalog(&body)
    }
}

// ─── Wire format ─────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogEnvelope {
    status: String,
    #[serde(default)]
    articles: Option<Vec<Value>>,
    #[serde(default)]
    message: Option<String>,
}

/// Decode `{"status": "success", "articles": [...]}`.
///
/// Entries that fail to deserialize or lack a title or source are skipped;
/// the rest keep their order. A `success` envelope without `articles` is an
/// empty catalog.
pub fn decode_catalog(body: &str) -> Result<Vec<Article>> {
    let envelope: CatalogEnvelope = serde_json::from_str(body)?;

    if envelope.status != "success" {
        if let Some(message) = &envelope.message {
            log::warn!("Catalog service reported: {}", message);
        }
        return Err(GossipError::CatalogRejected {
            status: envelope.status,
            message: envelope.message,
        });
    }

    let raw = envelope.articles.unwrap_or_default();
    let mut articles = Vec::with_capacity(raw.len());
    for (i, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Article>(value) {
            Ok(article) if article.is_valid() => articles.push(article),
            Ok(article) => {
                log::warn!("Skipping catalog entry {} without title or source ({})", i, article.url)
            }
            Err(e) => log::warn!("Skipping malformed catalog entry {}: {}", i, e),
        }
    }

    Ok(articles)
}
