use serde::{Deserialize, Serialize};
use crate::{GossipError, Result};

/// Used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CATALOG_PATH: &str = "/articles";
pub const DEFAULT_CATALOG_LIMIT: u32 = 100;

/// Top-level front end configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl SearchConfig {
    /// Build from the optional `API_BASE_URL` setting.
    /// Blank values count as unset.
    pub fn from_env(api_base_url: Option<&str>) -> Self {
        let base_url = api_base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        Self {
            api: ApiConfig { base_url },
            catalog: CatalogConfig::default(),
        }
    }
}

/// Remote answering service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

impl ApiConfig {
    /// The effective base URL, without trailing slashes.
    ///
    /// Accepts absolute `http(s)://` URLs and same-origin paths.
    pub fn resolved_base_url(&self) -> Result<String> {
        let raw = match self.base_url.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(DEFAULT_API_BASE_URL.to_string()),
        };

        let valid = raw.starts_with("http://")
            || raw.starts_with("https://")
            || raw.starts_with('/');
        if !valid {
            return Err(GossipError::Config(format!(
                "API base URL must be http(s):// or a /-rooted path, got {:?}",
                raw
            )));
        }

        Ok(raw.trim_end_matches('/').to_string())
    }

    pub fn query_url(&self) -> Result<String> {
        Ok(format!("{}/query", self.resolved_base_url()?))
    }
}

/// Article catalog endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
    /// Sent as `?limit=`; `None` leaves it to the backend default
    pub limit: Option<u32>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_CATALOG_PATH.to_string(),
            limit: Some(DEFAULT_CATALOG_LIMIT),
        }
    }
}

impl CatalogConfig {
    pub fn url(&self) -> String {
        match self.limit {
            Some(limit) => format!("{}?limit={}", self.path, limit),
            None => self.path.clone(),
        }
    }
}
