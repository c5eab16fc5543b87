//! Base check trait and the declarative rule type
//!
//! This module defines the core abstractions for page checks:
//! - `Check` trait that every catalog entry implements
//! - `RuleCheck`, a table row of plain function pointers
//! - Copy types used to turn a result into an insight or recommendation

use crate::document::ParsedDocument;
use crate::models::{CheckResult, Insight, Priority, Recommendation, Status};

/// Sentences used to explain a check result to a reader
#[derive(Debug, Clone, Copy)]
pub struct InsightCopy {
    /// Why the signal matters, shown regardless of outcome
    pub context: &'static str,
    /// Appended when the check passes
    pub pass_note: &'static str,
    /// Appended on warning or failure
    pub gap_note: &'static str,
}

impl InsightCopy {
    pub fn explain(&self, status: Status) -> String {
        let note = if status.is_pass() {
            self.pass_note
        } else {
            self.gap_note
        };
        if self.context.is_empty() {
            note.to_string()
        } else {
            format!("{} {}", self.context, note)
        }
    }
}

/// Remediation copy attached to a check
#[derive(Debug, Clone, Copy)]
pub struct Advice {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub impact: &'static str,
}

impl Advice {
    pub fn to_recommendation(&self, priority: Priority) -> Recommendation {
        Recommendation {
            title: self.title.to_string(),
            priority,
            category: self.category.to_string(),
            description: self.description.to_string(),
            action: self.action.to_string(),
            impact: self.impact.to_string(),
        }
    }
}

/// Trait for all page checks
///
/// A check is a pure function of the document: it must not fail on missing
/// elements or attributes, and it must not depend on other checks.
///
/// # Example Implementation
///
/// ```ignore
/// struct LangAttribute;
///
/// impl Check for LangAttribute {
///     fn name(&self) -> &'static str { "HTML Language Attribute" }
///     fn max_points(&self) -> u32 { 5 }
///     fn evaluate(&self, doc: &dyn ParsedDocument) -> u32 {
///         if doc.attr("html", "lang").is_some() { 5 } else { 0 }
///     }
///     fn classify(&self, points: u32) -> Status {
///         if points == 5 { Status::Pass } else { Status::Fail }
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Display name, unique within a catalog
    fn name(&self) -> &'static str;

    /// Maximum points this check can award (always > 0)
    fn max_points(&self) -> u32;

    /// Award points for the document. Must stay within `0..=max_points()`.
    fn evaluate(&self, doc: &dyn ParsedDocument) -> u32;

    /// Map awarded points to a status using this check's own bands
    fn classify(&self, points: u32) -> Status;

    /// Reader-facing explanation for a status
    fn explain(&self, status: Status) -> String {
        if status.is_pass() {
            format!("AI can properly interpret {}.", self.name().to_lowercase())
        } else {
            format!("AI cannot properly interpret {}.", self.name().to_lowercase())
        }
    }

    /// Remediation for a non-passing status, if this check has any
    fn recommend(&self, _status: Status) -> Option<Recommendation> {
        None
    }

    /// Evaluate and classify in one step
    fn run(&self, doc: &dyn ParsedDocument) -> CheckResult {
        let points = self.evaluate(doc).min(self.max_points());
        CheckResult::new(self.name(), points, self.max_points(), self.classify(points))
    }

    /// Turn a result produced by this check into an insight
    fn insight(&self, result: &CheckResult) -> Insight {
        Insight {
            title: result.name.clone(),
            explanation: self.explain(result.status),
            status: result.status,
        }
    }
}

/// A check described as data: one row of the catalog table
#[derive(Clone, Copy)]
pub struct RuleCheck {
    pub name: &'static str,
    pub max_points: u32,
    pub evaluate: fn(&dyn ParsedDocument) -> u32,
    pub classify: fn(u32) -> Status,
    pub copy: InsightCopy,
    pub advice: Option<Advice>,
}

impl std::fmt::Debug for RuleCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleCheck")
            .field("name", &self.name)
            .field("max_points", &self.max_points)
            .finish()
    }
}

impl Check for RuleCheck {
    fn name(&self) -> &'static str {
        self.name
    }

    fn max_points(&self) -> u32 {
        self.max_points
    }

    fn evaluate(&self, doc: &dyn ParsedDocument) -> u32 {
        (self.evaluate)(doc)
    }

    fn classify(&self, points: u32) -> Status {
        (self.classify)(points)
    }

    fn explain(&self, status: Status) -> String {
        self.copy.explain(status)
    }

    fn recommend(&self, status: Status) -> Option<Recommendation> {
        let priority = match status {
            Status::Pass => return None,
            Status::Warning => Priority::Medium,
            Status::Fail => Priority::High,
        };
        self.advice.map(|a| a.to_recommendation(priority))
    }
}
