//! Simulated payment confirmation
//!
//! There is no processor integration: a payment is "captured" as soon as it
//! is requested with a plausible email. The receipt is the precondition the
//! service checks before it fires the unlock event.

use crate::error::{AuditError, AuditResult};
use crate::report::ReportId;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub payment_id: Uuid,
    pub report_id: ReportId,
    pub email: String,
    pub paid_at: DateTime<Utc>,
}

/// Payment capture seam
pub trait PaymentGateway: Send + Sync {
    /// Capture payment for a report. The caller has already checked the report exists.
    fn capture(&self, report_id: ReportId, email: &str) -> AuditResult<PaymentReceipt>;

    /// Whether a completed payment exists for a report
    fn is_paid(&self, report_id: ReportId) -> bool;
}

/// Accepts every well-formed request and remembers the receipts
#[derive(Debug, Default)]
pub struct SimulatedPayments {
    receipts: DashMap<ReportId, PaymentReceipt>,
}

impl SimulatedPayments {
    pub fn new() -> Self {
        Self::default()
    }
}

fn validate_email(email: &str) -> AuditResult<&str> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AuditError::PaymentRejected(
            "Valid email address is required".into(),
        )),
    }
}

impl PaymentGateway for SimulatedPayments {
    fn capture(&self, report_id: ReportId, email: &str) -> AuditResult<PaymentReceipt> {
        let email = validate_email(email)?;
        let receipt = self
            .receipts
            .entry(report_id)
            .or_insert_with(|| {
                info!("Simulated payment captured for report {}", report_id);
                PaymentReceipt {
                    payment_id: Uuid::new_v4(),
                    report_id,
                    email: email.to_string(),
                    paid_at: Utc::now(),
                }
            })
            .value()
            .clone();
        Ok(receipt)
    }

    fn is_paid(&self, report_id: ReportId) -> bool {
        self.receipts.contains_key(&report_id)
    }
}
