//! Configuration for Crawlsight
//!
//! Looked up in the working directory:
//! - `crawlsight.toml` (preferred)
//! - `.crawlsightrc.json`
//!
//! Every section is optional. A file that fails to parse is logged and
//! ignored, so a broken config never blocks a scan.
//!
//! Example `crawlsight.toml`:
//! ```toml
//! [fetch]
//! timeout_secs = 10
//! max_redirects = 5
//!
//! [report]
//! locked_content = "obscure"
//!
//! [defaults]
//! format = "text"
//! ```

use crate::error::{AuditError, AuditResult};
use crate::fetch::FetchConfig;
use crate::report::ReportOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "crawlsight.toml";
const JSON_CONFIG_FILE: &str = ".crawlsightrc.json";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlsightConfig {
    pub fetch: FetchConfig,
    pub report: ReportOptions,
    pub defaults: CliDefaults,
}

/// Default CLI flags that can be set in config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliDefaults {
    /// Default output format (text, json, html)
    pub format: Option<String>,
}

impl CrawlsightConfig {
    /// Reject values no scan can run with
    pub fn validate(&self) -> AuditResult<()> {
        if self.fetch.timeout_secs == 0 {
            return Err(AuditError::Config(
                "fetch.timeout_secs must be at least 1".into(),
            ));
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AuditError::Config("fetch.user_agent cannot be empty".into()));
        }
        Ok(())
    }
}

/// Load configuration from `dir`, falling back to defaults
pub fn load_config(dir: &Path) -> CrawlsightConfig {
    let toml_path = dir.join(CONFIG_FILE);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(JSON_CONFIG_FILE);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    CrawlsightConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<CrawlsightConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn load_json_config(path: &Path) -> anyhow::Result<CrawlsightConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Contents written by `crawlsight init`
pub const EXAMPLE_CONFIG: &str = r#"# Crawlsight configuration

[fetch]
# Whole-request timeout in seconds
timeout_secs = 10
# Redirects followed before giving up
max_redirects = 5
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"

[report]
# How locked explanations appear in JSON: "obscure" or "withhold"
locked_content = "obscure"

[defaults]
# Output format (text, json, html)
format = "text"
"#;
