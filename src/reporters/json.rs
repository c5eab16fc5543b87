//! JSON reporter
//!
//! Outputs the report view as pretty-printed JSON, the same shape clients
//! receive from a scan or an unlock.

use crate::report::{Report, ReportOptions};
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &Report, options: &ReportOptions) -> Result<String> {
    Ok(report.to_json(options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::report_for;

    #[test]
    fn test_json_render_valid() {
        let report = report_for("<title>x</title>");
        let json_str = render(&report, &ReportOptions::default()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["locked"], true);
        assert_eq!(parsed["score"], report.score());
        assert_eq!(parsed["freeInsights"].as_array().expect("array").len(), 4);
    }

    #[test]
    fn test_json_render_unlocked() {
        let mut report = report_for("<title>x</title>");
        report.unlock();
        let json_str = render(&report, &ReportOptions::default()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["locked"], false);
        for insight in parsed["lockedInsights"].as_array().expect("array") {
            assert!(insight["explanation"].is_string());
            assert!(insight.get("obscured").is_none());
        }
    }
}
