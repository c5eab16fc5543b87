//! Page fetching
//!
//! The audit core never does I/O itself; it asks a [`PageFetcher`] for the
//! page source. [`HttpFetcher`] is the real implementation (sync HTTP via
//! ureq, bounded by a global timeout and a redirect limit). A fetch failure
//! fails the whole scan; nothing here retries.

use crate::error::{AuditError, AuditResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// HTTP fetch settings (`[fetch]` in crawlsight.toml)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub max_redirects: u32,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_redirects: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Check that `raw` is an absolute http(s) URL
pub fn validate_url(raw: &str) -> AuditResult<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AuditError::InvalidInput("URL is required".into()));
    }
    let url =
        Url::parse(raw).map_err(|_| AuditError::InvalidInput("Invalid URL format".into()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AuditError::InvalidInput(
            "URL must use http or https protocol".into(),
        ));
    }
    Ok(url)
}

/// Source of page HTML
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> AuditResult<String>;
}

/// Fetches pages over HTTP
pub struct HttpFetcher {
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false) // status handled below
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .max_redirects(config.max_redirects)
            .build()
            .new_agent();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> AuditResult<String> {
        debug!("Fetching {}", url);
        let response = self
            .agent
            .get(url.as_str())
            .header("User-Agent", &self.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .call()
            .map_err(|e| AuditError::fetch(url.as_str(), e))?;

        let status = response.status().as_u16();
        if status == 403 {
            return Err(AuditError::fetch(
                url.as_str(),
                "Website blocked the request (403 Forbidden). Some websites block automated requests.",
            ));
        }
        if !(200..300).contains(&status) {
            return Err(AuditError::fetch(
                url.as_str(),
                format!("HTTP status {}", status),
            ));
        }

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| AuditError::fetch(url.as_str(), e))?;
        info!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
