//! Check catalog: the ordered registry every audit runs
//!
//! Checks run sequentially in registration order. The catalog is small and
//! fixed, so there is nothing to gain from a worker pool here.

use super::base::Check;
use super::rules::STANDARD_RULES;
use crate::document::ParsedDocument;
use crate::models::{AuditReport, CheckResult, Insight, Recommendation};
use crate::scoring;
use std::sync::Arc;
use tracing::{debug, warn};

/// Ordered, name-unique set of checks
#[derive(Clone)]
pub struct CheckCatalog {
    checks: Vec<Arc<dyn Check>>,
}

impl CheckCatalog {
    /// The reference eight-check rubric
    pub fn standard() -> Self {
        STANDARD_RULES
            .iter()
            .fold(CheckCatalogBuilder::new(), |b, rule| {
                b.check(Arc::new(*rule))
            })
            .build()
    }

    pub fn builder() -> CheckCatalogBuilder {
        CheckCatalogBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Check>> {
        self.checks.iter().find(|c| c.name() == name)
    }

    /// Run every check against the document, in catalog order
    pub fn run(&self, doc: &dyn ParsedDocument) -> Vec<CheckResult> {
        self.checks
            .iter()
            .map(|check| {
                let result = check.run(doc);
                debug!(
                    "{}: {}/{} ({})",
                    result.name, result.points, result.max_points, result.status
                );
                result
            })
            .collect()
    }

    /// Run the catalog and score the results
    pub fn audit(&self, doc: &dyn ParsedDocument) -> AuditReport {
        scoring::aggregate(self.run(doc))
    }

    /// Explain each result with the check that produced it, preserving order
    pub fn insights(&self, details: &[CheckResult]) -> Vec<Insight> {
        details
            .iter()
            .map(|result| match self.get(&result.name) {
                Some(check) => check.insight(result),
                None => Insight {
                    title: result.name.clone(),
                    explanation: String::new(),
                    status: result.status,
                },
            })
            .collect()
    }

    /// Remediation for every non-passing result that has advice, in catalog order
    pub fn recommendations(&self, details: &[CheckResult]) -> Vec<Recommendation> {
        details
            .iter()
            .filter_map(|result| {
                self.get(&result.name)
                    .and_then(|check| check.recommend(result.status))
            })
            .collect()
    }
}

impl Default for CheckCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for CheckCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckCatalog")
            .field("checks", &self.names())
            .finish()
    }
}

/// Builder for a [`CheckCatalog`]
#[derive(Default)]
pub struct CheckCatalogBuilder {
    checks: Vec<Arc<dyn Check>>,
}

impl CheckCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check. A second check with an existing name is skipped.
    pub fn check(mut self, check: Arc<dyn Check>) -> Self {
        if check.max_points() == 0 {
            warn!("Skipping check '{}' with zero max points", check.name());
            return self;
        }
        if self.checks.iter().any(|c| c.name() == check.name()) {
            warn!("Skipping duplicate check '{}'", check.name());
            return self;
        }
        self.checks.push(check);
        self
    }

    pub fn build(self) -> CheckCatalog {
        CheckCatalog {
            checks: self.checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::rules;
    use crate::document::HtmlDocument;
    use crate::models::Status;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = CheckCatalog::standard();
        assert_eq!(catalog.len(), 8);
        assert_eq!(
            catalog.names(),
            vec![
                rules::TITLE_TAG,
                rules::META_DESCRIPTION,
                rules::STRUCTURED_DATA,
                rules::SEMANTIC_HTML,
                rules::IMAGE_ALT_TEXT,
                rules::HEADING_HIERARCHY,
                rules::OPEN_GRAPH,
                rules::ROBOTS,
            ]
        );
    }

    #[test]
    fn test_duplicate_names_are_skipped() {
        let rule = STANDARD_RULES[0];
        let catalog = CheckCatalog::builder()
            .check(Arc::new(rule))
            .check(Arc::new(rule))
            .build();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_run_on_empty_page_never_fails() {
        let catalog = CheckCatalog::standard();
        let results = catalog.run(&HtmlDocument::parse(""));
        assert_eq!(results.len(), 8);
        assert_eq!(results[0].status, Status::Fail);
    }

    #[test]
    fn test_insights_follow_catalog_order() {
        let catalog = CheckCatalog::standard();
        let audit = catalog.audit(&HtmlDocument::parse("<title>x</title>"));
        let insights = catalog.insights(&audit.details);
        assert_eq!(insights.len(), 8);
        for (insight, result) in insights.iter().zip(&audit.details) {
            assert_eq!(insight.title, result.name);
            assert_eq!(insight.status, result.status);
            assert!(!insight.explanation.is_empty());
        }
    }

    #[test]
    fn test_recommendations_only_for_non_passing() {
        let catalog = CheckCatalog::standard();
        let audit = catalog.audit(&HtmlDocument::parse("<title>x</title>"));
        let recs = catalog.recommendations(&audit.details);
        let weak = audit.details.iter().filter(|d| !d.status.is_pass()).count();
        assert_eq!(recs.len(), weak);
    }
}
