//! Scan and unlock orchestration
//!
//! ```text
//! scan:    url ─► validate ─► fetch ─► parse ─► catalog ─► score
//!                                                   │
//!                          store ◄─ Report(LOCKED) ◄┴ insights + recommendations
//!
//! pay:     id + email ─► exists? ─► capture ─► store.unlock ─► view
//! ```
//!
//! The service owns no report state itself; everything lives in the
//! [`ReportRepository`]. A failed scan creates no report.

use crate::checks::CheckCatalog;
use crate::document::HtmlDocument;
use crate::error::{AuditError, AuditResult};
use crate::fetch::{validate_url, PageFetcher};
use crate::insights::{self, FREE_INSIGHTS};
use crate::payment::{PaymentGateway, PaymentReceipt};
use crate::recommendations;
use crate::report::{Report, ReportId, ReportOptions, ReportView, Transition};
use crate::reporters::{self, OutputFormat};
use crate::store::ReportRepository;
use std::sync::Arc;
use tracing::info;

pub struct AuditService {
    catalog: CheckCatalog,
    options: ReportOptions,
    fetcher: Arc<dyn PageFetcher>,
    store: Arc<dyn ReportRepository>,
    payments: Arc<dyn PaymentGateway>,
}

impl AuditService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        store: Arc<dyn ReportRepository>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            catalog: CheckCatalog::standard(),
            options: ReportOptions::default(),
            fetcher,
            store,
            payments,
        }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetch and audit a page, storing a new locked report
    pub fn scan(&self, url: &str, summary: Option<&str>) -> AuditResult<ReportView> {
        let url = validate_url(url)?;
        let html = self.fetcher.fetch(&url)?;
        let report = self.build_report(url.as_str(), &html, summary);
        Ok(self.store_report(report))
    }

    fn build_report(&self, url: &str, html: &str, summary: Option<&str>) -> Report {
        let doc = HtmlDocument::parse(html);
        let audit = self.catalog.audit(&doc);
        let tiers = insights::classify(&self.catalog, &audit, FREE_INSIGHTS);
        let recs = recommendations::generate(&self.catalog, &audit);
        let summary = insights::summarize(audit.score, summary);
        Report::new(url, audit, summary, tiers, recs)
    }

    fn store_report(&self, report: Report) -> ReportView {
        let view = report.view(&self.options);
        info!(
            "Created report {} for {} (score {})",
            report.id(),
            report.url(),
            report.score()
        );
        self.store.put(report);
        view
    }

    /// Confirm payment for a report and unlock it
    pub fn confirm_payment(
        &self,
        id: ReportId,
        email: &str,
    ) -> AuditResult<(PaymentReceipt, ReportView)> {
        if !self.store.contains(id) {
            return Err(AuditError::UnknownReport(id));
        }
        let receipt = self.payments.capture(id, email)?;
        let view = self.unlock(id)?;
        Ok((receipt, view))
    }

    /// Apply the unlock event. Repeating it is a no-op.
    pub fn unlock(&self, id: ReportId) -> AuditResult<ReportView> {
        let (report, transition) = self.store.unlock(id)?;
        if transition == Transition::AlreadyUnlocked {
            info!("Report {} was already unlocked", id);
        }
        Ok(report.view(&self.options))
    }

    /// Current view of a stored report
    pub fn view(&self, id: ReportId) -> AuditResult<ReportView> {
        Ok(self.store.get(id)?.view(&self.options))
    }

    /// Snapshot of a stored report
    pub fn report(&self, id: ReportId) -> AuditResult<Report> {
        self.store.get(id)
    }

    /// Render a stored report in its current state
    pub fn export(&self, id: ReportId, format: OutputFormat) -> AuditResult<String> {
        let report = self.store.get(id)?;
        reporters::report_with_format(&report, &self.options, format)
            .map_err(|e| AuditError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::SimulatedPayments;
    use crate::store::InMemoryReportStore;
    use url::Url;

    struct StaticPage(&'static str);

    impl PageFetcher for StaticPage {
        fn fetch(&self, _url: &Url) -> AuditResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct Unreachable;

    impl PageFetcher for Unreachable {
        fn fetch(&self, url: &Url) -> AuditResult<String> {
            Err(AuditError::fetch(url.as_str(), "connection refused"))
        }
    }

    fn service(fetcher: Arc<dyn PageFetcher>) -> (AuditService, Arc<InMemoryReportStore>) {
        let store = Arc::new(InMemoryReportStore::new());
        let svc = AuditService::new(fetcher, store.clone(), Arc::new(SimulatedPayments::new()));
        (svc, store)
    }

    #[test]
    fn test_scan_stores_locked_report() {
        let (svc, store) = service(Arc::new(StaticPage("<title>Blue Door</title>")));
        let view = svc.scan("https://bluedoor.example", None).expect("scan");
        assert!(view.locked);
        assert_eq!(view.free_insights.len(), 4);
        assert_eq!(view.locked_insights.len(), 4);
        assert_eq!(store.len(), 1);
        assert!(svc.view(view.report_id).expect("view").locked);
    }

    #[test]
    fn test_scan_uses_supplied_summary() {
        let (svc, _) = service(Arc::new(StaticPage("")));
        let view = svc
            .scan("https://bluedoor.example", Some("Custom summary"))
            .expect("scan");
        assert_eq!(view.summary, "Custom summary");
    }

    #[test]
    fn test_invalid_url_creates_no_report() {
        let (svc, store) = service(Arc::new(StaticPage("")));
        assert!(matches!(svc.scan("", None), Err(AuditError::InvalidInput(_))));
        assert!(matches!(
            svc.scan("ftp://bluedoor.example", None),
            Err(AuditError::InvalidInput(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_fetch_failure_creates_no_report() {
        let (svc, store) = service(Arc::new(Unreachable));
        assert!(matches!(
            svc.scan("https://down.example", None),
            Err(AuditError::FetchFailure { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_confirm_payment_unlocks() {
        let (svc, _) = service(Arc::new(StaticPage("<title>x</title>")));
        let view = svc.scan("https://bluedoor.example", None).expect("scan");

        let (receipt, unlocked) = svc
            .confirm_payment(view.report_id, "owner@bluedoor.example")
            .expect("pay");
        assert_eq!(receipt.report_id, view.report_id);
        assert!(!unlocked.locked);
        assert!(unlocked
            .locked_insights
            .iter()
            .all(|i| i.explanation.is_some() && !i.obscured));
    }

    #[test]
    fn test_rejected_payment_leaves_report_locked() {
        let (svc, _) = service(Arc::new(StaticPage("<title>x</title>")));
        let view = svc.scan("https://bluedoor.example", None).expect("scan");
        assert!(matches!(
            svc.confirm_payment(view.report_id, "nobody"),
            Err(AuditError::PaymentRejected(_))
        ));
        assert!(svc.view(view.report_id).expect("view").locked);
    }

    #[test]
    fn test_unknown_report() {
        let (svc, store) = service(Arc::new(StaticPage("")));
        let id = ReportId::new();
        assert!(matches!(svc.unlock(id), Err(AuditError::UnknownReport(_))));
        assert!(matches!(
            svc.confirm_payment(id, "a@b.example"),
            Err(AuditError::UnknownReport(_))
        ));
        assert!(matches!(svc.view(id), Err(AuditError::UnknownReport(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let (svc, _) = service(Arc::new(StaticPage("<title>x</title>")));
        let id = svc.scan("https://bluedoor.example", None).expect("scan").report_id;
        let first = svc.unlock(id).expect("unlock");
        let second = svc.unlock(id).expect("unlock again");
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_follows_state() {
        let (svc, _) = service(Arc::new(StaticPage("<title>x</title>")));
        let id = svc.scan("https://bluedoor.example", None).expect("scan").report_id;

        let locked = svc.export(id, OutputFormat::Html).expect("export");
        assert!(locked.contains("Preview (locked)"));
        assert_eq!(locked, svc.export(id, OutputFormat::Html).expect("export"));

        svc.unlock(id).expect("unlock");
        let unlocked = svc.export(id, OutputFormat::Html).expect("export");
        assert!(unlocked.contains("Full report"));
    }
}
