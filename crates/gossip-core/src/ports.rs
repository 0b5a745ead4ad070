//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `gossip-core` (pure Rust).
//! Implementations live in `gossip-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use gossip_types::{Result, article::Article};
use tokio_util::sync::CancellationToken;

// ─── Query Port ──────────────────────────────────────────────

/// Successful reply from the answering service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    pub answer: String,
}

#[async_trait(?Send)]
pub trait QueryPort {
    /// Send one query to the answering service. One attempt, no retries.
    ///
    /// Firing `cancel` must abort the underlying request and resolve
    /// with `GossipError::Cancelled`.
    async fn submit_query(&self, query: &str, cancel: &CancellationToken) -> Result<QueryAnswer>;

    /// Endpoint description for logging
    fn endpoint(&self) -> &str;
}

// ─── Catalog Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait CatalogPort {
    /// Fetch the article catalog snapshot, in the order the service sent it.
    async fn fetch_catalog(&self) -> Result<Vec<Article>>;
}
