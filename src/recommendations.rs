//! Recommendations derived from weak checks
//!
//! Failures come first (High), then warnings (Medium), keeping catalog order
//! within a priority. A locked report only previews the head of the list.

use crate::checks::CheckCatalog;
use crate::models::{AuditReport, Recommendation};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Items shown to a locked report
pub const RECOMMENDATION_PREVIEW: usize = 3;

/// Recommendations for every non-passing check, highest priority first
pub fn generate(catalog: &CheckCatalog, audit: &AuditReport) -> Vec<Recommendation> {
    let mut recs = catalog.recommendations(&audit.details);
    // stable: catalog order survives within a priority
    recs.sort_by_key(|r| Reverse(r.priority));
    recs
}

/// Head of a recommendation list plus how many were held back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationPreview {
    pub items: Vec<Recommendation>,
    pub remaining: usize,
}

impl RecommendationPreview {
    pub fn of(recs: &[Recommendation], len: usize) -> Self {
        let shown = len.min(recs.len());
        Self {
            items: recs[..shown].to_vec(),
            remaining: recs.len() - shown,
        }
    }
}
