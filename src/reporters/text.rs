//! Text (terminal) reporter with colors and formatting

use crate::models::Status;
use crate::recommendations::{RecommendationPreview, RECOMMENDATION_PREVIEW};
use crate::report::Report;
use crate::scoring::ScoreTone;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn status_color(status: Status) -> &'static str {
    match status {
        Status::Pass => "\x1b[32m",    // Green
        Status::Warning => "\x1b[33m", // Yellow
        Status::Fail => "\x1b[31m",    // Red
    }
}

fn status_tag(status: Status) -> &'static str {
    match status {
        Status::Pass => "[PASS]",
        Status::Warning => "[WARN]",
        Status::Fail => "[FAIL]",
    }
}

/// Render report as formatted terminal output
pub fn render(report: &Report) -> Result<String> {
    let mut out = String::new();
    let tone = ScoreTone::from_score(report.score()).ansi();

    out.push_str(&format!("\n{BOLD}Crawlsight Report{RESET}  {DIM}{}{RESET}\n", report.url()));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {tone}{BOLD}{}/100{RESET}  Access: {}\n",
        report.score(),
        report.state()
    ));
    out.push_str(&format!("{DIM}{}{RESET}\n\n", report.summary()));

    let tiers = report.insights();
    out.push_str(&format!("{BOLD}INSIGHTS{RESET}\n"));
    for insight in &tiers.free {
        let c = status_color(insight.status);
        out.push_str(&format!(
            "  {c}{}{RESET} {}\n      {DIM}{}{RESET}\n",
            status_tag(insight.status),
            insight.title,
            insight.explanation
        ));
    }
    for insight in &tiers.locked {
        if report.is_locked() {
            out.push_str(&format!(
                "  {DIM}[LOCK]{RESET} {}\n      {DIM}(unlock the full report to read this insight){RESET}\n",
                insight.title
            ));
        } else {
            let c = status_color(insight.status);
            out.push_str(&format!(
                "  {c}{}{RESET} {}\n      {DIM}{}{RESET}\n",
                status_tag(insight.status),
                insight.title,
                insight.explanation
            ));
        }
    }
    out.push('\n');

    if !report.is_locked() {
        out.push_str(&format!("{BOLD}CHECKS{RESET}\n"));
        for item in &report.audit().details {
            let c = status_color(item.status);
            out.push_str(&format!(
                "  {c}{:>2}/{:<2}{RESET}  {}\n",
                item.points, item.max_points, item.name
            ));
        }
        out.push('\n');
    }

    let all = report.recommendations();
    if !all.is_empty() {
        let (shown, remaining) = if report.is_locked() {
            let preview = RecommendationPreview::of(all, RECOMMENDATION_PREVIEW);
            (preview.items, preview.remaining)
        } else {
            (all.to_vec(), 0)
        };
        out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET} ({} total)\n", all.len()));
        for (i, rec) in shown.iter().enumerate() {
            out.push_str(&format!(
                "  {DIM}{:>2}{RESET}  [{}] {}\n      {DIM}{}{RESET}\n",
                i + 1,
                rec.priority,
                rec.title,
                rec.action
            ));
        }
        if remaining > 0 {
            out.push_str(&format!(
                "\n  {DIM}...and {} more in the full report{RESET}\n",
                remaining
            ));
        }
        out.push('\n');
    }

    if report.is_locked() {
        out.push_str(&format!(
            "{DIM}Report {} is locked. Pay to unlock the full interpretation.{RESET}\n",
            report.id()
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::report_for;

    #[test]
    fn test_text_locked_hides_locked_explanations() {
        let report = report_for("<title>x</title>");
        let out = render(&report).expect("render");
        for insight in &report.insights().locked {
            assert!(out.contains(&insight.title));
            assert!(!out.contains(&insight.explanation));
        }
        assert!(out.contains("[LOCK]"));
        assert!(out.contains("LOCKED"));
    }

    #[test]
    fn test_text_unlocked_shows_checks() {
        let mut report = report_for("<title>x</title>");
        report.unlock();
        let out = render(&report).expect("render");
        assert!(out.contains("CHECKS"));
        assert!(!out.contains("[LOCK]"));
        for insight in report.insights().all() {
            assert!(out.contains(&insight.explanation));
        }
    }
}
