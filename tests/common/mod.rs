//! Shared helpers for black-box tests: a fake fetcher serving fixtures

#![allow(dead_code)]

use crawlsight::fetch::PageFetcher;
use crawlsight::payment::SimulatedPayments;
use crawlsight::store::InMemoryReportStore;
use crawlsight::{AuditError, AuditResult, AuditService};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

/// Path to the test fixtures directory
pub fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_path().join(name)).expect("Failed to read fixture")
}

/// Serves fixture files by host name; unknown hosts fail like a dead server
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, host: &str, fixture_name: &str) -> Self {
        self.pages.insert(host.to_string(), fixture(fixture_name));
        self
    }
}

impl PageFetcher for FixtureFetcher {
    fn fetch(&self, url: &Url) -> AuditResult<String> {
        let host = url.host_str().unwrap_or_default();
        self.pages
            .get(host)
            .cloned()
            .ok_or_else(|| AuditError::fetch(url.as_str(), "connection refused"))
    }
}

pub fn fixture_service() -> (AuditService, Arc<InMemoryReportStore>) {
    let fetcher = FixtureFetcher::new()
        .page("full.example", "full.html")
        .page("bare.example", "bare.html")
        .page("partial.example", "partial.html");
    let store = Arc::new(InMemoryReportStore::new());
    let service = AuditService::new(
        Arc::new(fetcher),
        store.clone(),
        Arc::new(SimulatedPayments::new()),
    );
    (service, store)
}

/// Same escaping the HTML export applies to text
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
