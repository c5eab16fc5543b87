//! JSON view of a report
//!
//! Shape (camelCase):
//!
//! ```text
//! { reportId, url, score, summary,
//!   freeInsights: [{title, explanation, status}],
//!   locked: bool,
//!   lockedInsights: [{title, explanation?, status, obscured?}],
//!   totalInsights,
//!   reviewRecommendations: [{title, priority, category, description, action, impact}],
//!   remainingRecommendations }
//! ```

use super::{LockedContentPolicy, Report, ReportId, ReportOptions};
use crate::models::{Insight, Recommendation, Status};
use crate::recommendations::{RecommendationPreview, RECOMMENDATION_PREVIEW};
use serde::{Deserialize, Serialize};

/// Insight from the locked tier as a client sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightView {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub status: Status,
    /// Present but not to be shown legibly
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub obscured: bool,
}

impl InsightView {
    fn open(insight: &Insight) -> Self {
        Self {
            title: insight.title.clone(),
            explanation: Some(insight.explanation.clone()),
            status: insight.status,
            obscured: false,
        }
    }

    fn locked(insight: &Insight, policy: LockedContentPolicy) -> Self {
        let explanation = match policy {
            LockedContentPolicy::Obscure => Some(insight.explanation.clone()),
            LockedContentPolicy::Withhold => None,
        };
        Self {
            title: insight.title.clone(),
            explanation,
            status: insight.status,
            obscured: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub report_id: ReportId,
    pub url: String,
    pub score: u32,
    pub summary: String,
    pub free_insights: Vec<Insight>,
    pub locked: bool,
    pub locked_insights: Vec<InsightView>,
    pub total_insights: usize,
    pub review_recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub remaining_recommendations: usize,
}

impl ReportView {
    pub fn of(report: &Report, options: &ReportOptions) -> Self {
        let tiers = report.insights();
        let locked = report.is_locked();

        let locked_insights = tiers
            .locked
            .iter()
            .map(|i| {
                if locked {
                    InsightView::locked(i, options.locked_content)
                } else {
                    InsightView::open(i)
                }
            })
            .collect();

        let (review_recommendations, remaining_recommendations) = if locked {
            let preview =
                RecommendationPreview::of(report.recommendations(), RECOMMENDATION_PREVIEW);
            (preview.items, preview.remaining)
        } else {
            (report.recommendations().to_vec(), 0)
        };

        Self {
            report_id: report.id(),
            url: report.url().to_string(),
            score: report.score(),
            summary: report.summary().to_string(),
            free_insights: tiers.free.clone(),
            locked,
            locked_insights,
            total_insights: tiers.len(),
            review_recommendations,
            remaining_recommendations,
        }
    }
}
