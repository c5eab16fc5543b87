//! Insight classification
//!
//! Turns check results into reader-facing insights and splits them into a
//! free tier and a locked tier. The split is positional: whichever checks
//! sit first in the catalog are free, whatever their outcome.

use crate::checks::CheckCatalog;
use crate::models::{AuditReport, Insight};
use crate::scoring::ScoreBand;
use serde::{Deserialize, Serialize};

/// Size of the free tier in the standard report
pub const FREE_INSIGHTS: usize = 4;

/// Insights split into the free and locked tiers, both in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightTiers {
    pub free: Vec<Insight>,
    pub locked: Vec<Insight>,
}

impl InsightTiers {
    /// Split `insights` after the first `free_count` entries
    pub fn partition(mut insights: Vec<Insight>, free_count: usize) -> Self {
        let split = free_count.min(insights.len());
        let locked = insights.split_off(split);
        Self {
            free: insights,
            locked,
        }
    }

    /// Every insight, free tier first
    pub fn all(&self) -> impl Iterator<Item = &Insight> {
        self.free.iter().chain(self.locked.iter())
    }

    pub fn len(&self) -> usize {
        self.free.len() + self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build tiered insights for an audit
pub fn classify(catalog: &CheckCatalog, audit: &AuditReport, free_count: usize) -> InsightTiers {
    InsightTiers::partition(catalog.insights(&audit.details), free_count)
}

/// Caller-supplied summary, or the band default for `score`
pub fn summarize(score: u32, supplied: Option<&str>) -> String {
    match supplied.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => ScoreBand::from_score(score).summary().to_string(),
    }
}
