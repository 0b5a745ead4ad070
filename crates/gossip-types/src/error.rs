use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GossipError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Backend API error: HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Malformed response: {0}")]
    Payload(String),

    #[error("Catalog rejected with status {status:?}")]
    CatalogRejected {
        status: String,
        message: Option<String>,
    },

    #[error("Cancelled")]
    Cancelled,

    #[error("No query provided")]
    EmptyQuery,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GossipError {
    /// Short stable label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            GossipError::Transport(_) => "transport",
            GossipError::Status { .. } => "status",
            GossipError::Payload(_) => "payload",
            GossipError::CatalogRejected { .. } => "catalog_rejected",
            GossipError::Cancelled => "cancelled",
            GossipError::EmptyQuery => "empty_query",
            GossipError::Config(_) => "config",
        }
    }
}

impl From<serde_json::Error> for GossipError {
    fn from(e: serde_json::Error) -> Self {
        GossipError::Payload(e.to_string())
    }
}
