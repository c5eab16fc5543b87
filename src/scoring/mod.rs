//! Score aggregation
//!
//! # Scoring Formula
//!
//! ```text
//! score = round(100 × Σ points / Σ max_points)
//! ```
//!
//! Rounding is half-up and done in integer arithmetic, so the same document
//! always yields the same score on every platform.
//!
//! # Bands
//!
//! Scores map onto two band schemes that other components rely on:
//!
//! - [`ScoreBand`] (80 / 60 / 40): summary copy
//! - [`ScoreTone`] (80 / 60): colour of the score in rendered reports

mod bands;

pub use bands::{ScoreBand, ScoreTone};

use crate::models::{AuditReport, CheckResult};
use tracing::info;

/// `round(scale × numer / denom)` with halves rounded up. Zero when `denom` is zero.
pub fn round_ratio(numer: u64, denom: u64, scale: u64) -> u64 {
    if denom == 0 {
        return 0;
    }
    (2 * scale * numer + denom) / (2 * denom)
}

/// Normalized 0-100 score for a set of results
pub fn score(details: &[CheckResult]) -> u32 {
    let points: u64 = details.iter().map(|d| u64::from(d.points)).sum();
    let max: u64 = details.iter().map(|d| u64::from(d.max_points)).sum();
    round_ratio(points.min(max), max, 100) as u32
}

/// Score a catalog run
pub fn aggregate(details: Vec<CheckResult>) -> AuditReport {
    let score = score(&details);
    info!(
        "Audit score: {} ({} checks, band: {})",
        score,
        details.len(),
        ScoreBand::from_score(score)
    );
    AuditReport { score, details }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn result(points: u32, max: u32) -> CheckResult {
        CheckResult::new("c", points, max, Status::Pass)
    }

    #[test]
    fn test_round_ratio_half_up() {
        assert_eq!(round_ratio(1, 3, 10), 3);
        assert_eq!(round_ratio(2, 3, 10), 7);
        assert_eq!(round_ratio(1, 4, 10), 3);
        assert_eq!(round_ratio(1, 8, 100), 13);
        assert_eq!(round_ratio(5, 0, 100), 0);
    }

    #[test]
    fn test_score_normalizes() {
        assert_eq!(score(&[result(10, 10), result(0, 10)]), 50);
        assert_eq!(score(&[result(90, 90)]), 100);
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn test_score_of_bare_page() {
        // title 0, meta 0, structured 0, semantic 0, alt 10, heading 0, og 0, robots 10
        let details = vec![
            result(0, 10),
            result(0, 10),
            result(0, 15),
            result(0, 15),
            result(10, 10),
            result(0, 10),
            result(0, 10),
            result(10, 10),
        ];
        assert_eq!(score(&details), 22);
    }

    #[test]
    fn test_aggregate_keeps_order() {
        let report = aggregate(vec![
            CheckResult::new("first", 5, 10, Status::Warning),
            CheckResult::new("second", 10, 10, Status::Pass),
        ]);
        assert_eq!(report.score, 75);
        assert_eq!(report.details[0].name, "first");
        assert_eq!(report.details[1].name, "second");
    }
}
