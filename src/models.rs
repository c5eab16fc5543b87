//! Core data models for Crawlsight
//!
//! These models are shared by the check catalog, the scorer, the insight
//! classifier and the reporters.

use serde::{Deserialize, Serialize};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warning,
    Fail,
}

impl Status {
    pub fn is_pass(&self) -> bool {
        matches!(self, Status::Pass)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pass => write!(f, "pass"),
            Status::Warning => write!(f, "warning"),
            Status::Fail => write!(f, "fail"),
        }
    }
}

/// Result of running one check against a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Check name, unique within a catalog run
    pub name: String,
    pub points: u32,
    pub max_points: u32,
    pub status: Status,
}

impl CheckResult {
    /// Build a result, clamping `points` to `max_points`.
    pub fn new(name: impl Into<String>, points: u32, max_points: u32, status: Status) -> Self {
        Self {
            name: name.into(),
            points: points.min(max_points),
            max_points,
            status,
        }
    }
}

/// Scored audit of one page
///
/// `details` always holds one entry per catalog check, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub score: u32,
    pub details: Vec<CheckResult>,
}

/// Human-facing rendition of a check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub explanation: String,
    pub status: Status,
}

/// Recommendation priority
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// Actionable follow-up derived from a failing or weak check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub priority: Priority,
    pub category: String,
    pub description: String,
    pub action: String,
    pub impact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_clamps_points() {
        let r = CheckResult::new("Has Title Tag", 12, 10, Status::Pass);
        assert_eq!(r.points, 10);
        assert_eq!(r.max_points, 10);
    }

    #[test]
    fn test_check_result_serializes_camel_case() {
        let r = CheckResult::new("Image Alt Text", 3, 10, Status::Fail);
        let json = serde_json::to_value(&r).expect("serialize");
        assert_eq!(json["maxPoints"], 10);
        assert_eq!(json["status"], "fail");
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::High.to_string(), "High");
    }
}
