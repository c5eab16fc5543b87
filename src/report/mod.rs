//! User-facing reports and their access lifecycle
//!
//! A [`Report`] is created `LOCKED` right after a scan and moves to
//! `UNLOCKED` at most once. While locked, only the free tier is legible;
//! [`ReportView`] is the JSON shape handed to clients in either state.

mod state;
mod view;

pub use state::{AccessState, Transition};
pub use view::{InsightView, ReportView};

use crate::error::{AuditError, AuditResult};
use crate::insights::InsightTiers;
use crate::models::{AuditReport, Recommendation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque report identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(Uuid);

impl ReportId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(ReportId)
            .map_err(|_| AuditError::InvalidInput(format!("Invalid report ID '{}'", s)))
    }
}

/// How locked explanations cross the client boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockedContentPolicy {
    /// Send the text, flagged as obscured for the client to blur
    #[default]
    Obscure,
    /// Leave the text out until the report is unlocked
    Withhold,
}

/// Knobs that shape report views (`[report]` in crawlsight.toml)
///
/// The tier sizes are fixed at [`FREE_INSIGHTS`](crate::insights::FREE_INSIGHTS)
/// and [`RECOMMENDATION_PREVIEW`](crate::recommendations::RECOMMENDATION_PREVIEW);
/// a config that tries to set them is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    pub locked_content: LockedContentPolicy,
}

/// A generated report and its access state
#[derive(Debug, Clone)]
pub struct Report {
    id: ReportId,
    url: String,
    created_at: DateTime<Utc>,
    audit: AuditReport,
    summary: String,
    insights: InsightTiers,
    recommendations: Vec<Recommendation>,
    state: AccessState,
}

impl Report {
    /// New report, always starting `LOCKED`
    pub fn new(
        url: impl Into<String>,
        audit: AuditReport,
        summary: String,
        insights: InsightTiers,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            id: ReportId::new(),
            url: url.into(),
            created_at: Utc::now(),
            audit,
            summary,
            insights,
            recommendations,
            state: AccessState::Locked,
        }
    }

    pub fn id(&self) -> ReportId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn score(&self) -> u32 {
        self.audit.score
    }

    pub fn audit(&self) -> &AuditReport {
        &self.audit
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn insights(&self) -> &InsightTiers {
        &self.insights
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn state(&self) -> AccessState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// The single guarded transition. Idempotent once unlocked.
    pub fn unlock(&mut self) -> Transition {
        let (next, transition) = self.state.unlock();
        self.state = next;
        transition
    }

    /// Client view for the current state
    pub fn view(&self, options: &ReportOptions) -> ReportView {
        ReportView::of(self, options)
    }

    pub fn to_json(&self, options: &ReportOptions) -> AuditResult<String> {
        Ok(serde_json::to_string_pretty(&self.view(options))?)
    }
}
