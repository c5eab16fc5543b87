//! Report repository
//!
//! Reports live only as long as the store that holds them. The in-memory
//! store keeps each report behind a DashMap shard lock, so an unlock is
//! applied atomically and readers always get a whole snapshot: either
//! fully locked or fully unlocked.

use crate::error::{AuditError, AuditResult};
use crate::report::{Report, ReportId, Transition};
use dashmap::DashMap;
use tracing::{info, warn};

/// Storage seam for reports
pub trait ReportRepository: Send + Sync {
    /// Snapshot of a report
    fn get(&self, id: ReportId) -> AuditResult<Report>;

    /// Store a new report
    fn put(&self, report: Report);

    /// Unlock a report in place and return the resulting snapshot
    fn unlock(&self, id: ReportId) -> AuditResult<(Report, Transition)>;

    fn contains(&self, id: ReportId) -> bool {
        self.get(id).is_ok()
    }
}

/// Process-local report store
#[derive(Debug, Default)]
pub struct InMemoryReportStore {
    reports: DashMap<ReportId, Report>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ReportRepository for InMemoryReportStore {
    fn get(&self, id: ReportId) -> AuditResult<Report> {
        self.reports
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| {
                warn!("Report {} not found", id);
                AuditError::UnknownReport(id)
            })
    }

    fn put(&self, report: Report) {
        self.reports.insert(report.id(), report);
    }

    fn unlock(&self, id: ReportId) -> AuditResult<(Report, Transition)> {
        let mut entry = self.reports.get_mut(&id).ok_or_else(|| {
            warn!("Unlock requested for unknown report {}", id);
            AuditError::UnknownReport(id)
        })?;
        let transition = entry.unlock();
        if transition == Transition::Unlocked {
            info!("Report {} unlocked", id);
        }
        Ok((entry.value().clone(), transition))
    }

    fn contains(&self, id: ReportId) -> bool {
        self.reports.contains_key(&id)
    }
}
