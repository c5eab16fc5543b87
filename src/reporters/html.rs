//! HTML reporter for print/PDF export
//!
//! Generates a standalone HTML document with embedded styles. Open it in a
//! browser and print to PDF. Includes:
//! - Score with tone colour and summary
//! - Insights, free tier first, then the locked tier
//! - Per-check points (unlocked only)
//! - Recommendations (previewed while locked)
//!
//! Locked explanations are never written into the document. A locked insight
//! shows its title and an obscured placeholder.

use crate::models::{Insight, Recommendation, Status};
use crate::recommendations::{RecommendationPreview, RECOMMENDATION_PREVIEW};
use crate::report::Report;
use crate::scoring::ScoreTone;
use anyhow::Result;

const LOCKED_PLACEHOLDER: &str = "Unlock the full report to read this insight.";

/// Render report as standalone HTML
pub fn render(report: &Report) -> Result<String> {
    let mut html = String::new();

    html.push_str(&render_head(report));
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(report));
    html.push_str("<div class=\"content\">\n");

    html.push_str(&render_score_section(report));
    html.push_str(&render_insights(report));
    if !report.is_locked() {
        html.push_str(&render_check_details(report));
    }
    html.push_str(&render_recommendations(report));

    html.push_str("</div>\n"); // content
    html.push_str(&render_footer(report));
    html.push_str("</div>\n</body>\n</html>\n");

    Ok(html)
}

fn render_head(report: &Report) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI Readability Report - {}</title>
    <style>
{CSS}
    </style>
</head>
"#,
        html_escape(report.url())
    )
}

fn render_header(report: &Report) -> String {
    let timestamp = report.created_at().format("%Y-%m-%d %H:%M:%S UTC");
    let access = if report.is_locked() {
        "Preview (locked)"
    } else {
        "Full report"
    };
    format!(
        r#"<div class="header">
    <h1>AI Readability Report</h1>
    <p class="url">{}</p>
    <p class="timestamp">Generated {} &middot; {}</p>
</div>
"#,
        html_escape(report.url()),
        timestamp,
        access
    )
}

fn render_score_section(report: &Report) -> String {
    let tone = ScoreTone::from_score(report.score());
    format!(
        r#"<div class="score-section">
    <div class="score {}">{}/100</div>
    <p class="score-label">AI Readiness Score</p>
    <p class="summary">{}</p>
</div>
"#,
        tone.css_class(),
        report.score(),
        html_escape(report.summary())
    )
}

fn render_insights(report: &Report) -> String {
    let tiers = report.insights();
    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">What AI Currently Understands</h2>
    <div class="insight-list">
"#,
    );
    for insight in &tiers.free {
        html.push_str(&render_insight(insight));
    }
    html.push_str("    </div>\n</div>\n");

    if tiers.locked.is_empty() {
        return html;
    }

    let heading = if report.is_locked() {
        format!("Locked Insights ({})", tiers.locked.len())
    } else {
        "Full Interpretation".to_string()
    };
    html.push_str(&format!(
        r#"<div class="section">
    <h2 class="section-title">{}</h2>
    <div class="insight-list">
"#,
        heading
    ));
    for insight in &tiers.locked {
        if report.is_locked() {
            html.push_str(&render_locked_insight(insight));
        } else {
            html.push_str(&render_insight(insight));
        }
    }
    html.push_str("    </div>\n</div>\n");
    html
}

fn render_insight(insight: &Insight) -> String {
    format!(
        r#"        <div class="insight-card {}">
            <div class="insight-header">
                <span class="status-badge status-{}">{}</span>
                <div class="insight-title">{}</div>
            </div>
            <div class="insight-explanation">{}</div>
        </div>
"#,
        insight.status,
        insight.status,
        status_label(insight.status),
        html_escape(&insight.title),
        html_escape(&insight.explanation)
    )
}

fn render_locked_insight(insight: &Insight) -> String {
    format!(
        r#"        <div class="insight-card locked">
            <div class="insight-header">
                <span class="status-badge status-locked">Locked</span>
                <div class="insight-title">{}</div>
            </div>
            <div class="insight-explanation obscured">{}</div>
        </div>
"#,
        html_escape(&insight.title),
        LOCKED_PLACEHOLDER
    )
}

fn render_check_details(report: &Report) -> String {
    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">Detailed Audit Results</h2>
"#,
    );
    for item in &report.audit().details {
        html.push_str(&format!(
            r#"    <div class="detail-item {}">
        <span class="detail-name">{}</span>
        <span class="detail-score">{}/{} points</span>
    </div>
"#,
            item.status,
            html_escape(&item.name),
            item.points,
            item.max_points
        ));
    }
    html.push_str("</div>\n");
    html
}

fn render_recommendations(report: &Report) -> String {
    let all = report.recommendations();
    if all.is_empty() {
        return r#"<div class="section">
    <h2 class="section-title">Recommendations</h2>
    <p>No recommendations. Every signal is in place.</p>
</div>
"#
        .to_string();
    }

    let (shown, remaining) = if report.is_locked() {
        let preview = RecommendationPreview::of(all, RECOMMENDATION_PREVIEW);
        (preview.items, preview.remaining)
    } else {
        (all.to_vec(), 0)
    };

    let mut html = format!(
        r#"<div class="section">
    <h2 class="section-title">Recommendations ({} total)</h2>
    <div class="recommendation-list">
"#,
        all.len()
    );
    for rec in &shown {
        html.push_str(&render_recommendation(rec));
    }
    if remaining > 0 {
        html.push_str(&format!(
            "        <div class=\"more\">...and {} more in the full report</div>\n",
            remaining
        ));
    }
    html.push_str("    </div>\n</div>\n");
    html
}

fn render_recommendation(rec: &Recommendation) -> String {
    format!(
        r#"        <div class="recommendation-card">
            <div class="recommendation-header">
                <span class="priority-badge priority-{}">{}</span>
                <div class="recommendation-title">{}</div>
                <span class="category-badge">{}</span>
            </div>
            <div class="recommendation-body">
                <p>{}</p>
                <div class="action"><strong>Action:</strong> {}</div>
                <div class="impact"><strong>Impact:</strong> {}</div>
            </div>
        </div>
"#,
        rec.priority.to_string().to_lowercase(),
        rec.priority,
        html_escape(&rec.title),
        html_escape(&rec.category),
        html_escape(&rec.description),
        html_escape(&rec.action),
        html_escape(&rec.impact)
    )
}

fn render_footer(report: &Report) -> String {
    format!(
        r#"<div class="footer">
    <p>Generated by Crawlsight &middot; report {}</p>
    <p>This report contains {} AI-readiness checks</p>
</div>
"#,
        report.id(),
        report.audit().details.len()
    )
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Pass => "Pass",
        Status::Warning => "Warning",
        Status::Fail => "Fail",
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"
:root {
    --primary-color: #667eea;
    --background-color: #f8fafc;
    --text-color: #1e293b;
    --card-background: white;
    --border-color: #e2e8f0;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    line-height: 1.6;
    color: var(--text-color);
    background: var(--background-color);
    padding: 2rem;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    background: var(--card-background);
    border-radius: 12px;
    box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);
    overflow: hidden;
}

.header {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 2.5rem 2rem;
    text-align: center;
}

.header h1 { font-size: 2.25rem; margin-bottom: 0.5rem; }
.header .url { font-weight: 600; word-break: break-all; }
.header .timestamp { opacity: 0.9; font-size: 0.95rem; }

.content { padding: 2rem; }

.score-section {
    text-align: center;
    padding: 2rem;
    background: #f1f5f9;
    border-radius: 8px;
    margin-bottom: 2rem;
}

.score { font-size: 3rem; font-weight: bold; }
.tone-success { color: #48bb78; }
.tone-warning { color: #ed8936; }
.tone-alert { color: #f56565; }
.score-label { color: #64748b; font-size: 1.1rem; }
.summary { color: #475569; font-style: italic; margin-top: 0.75rem; }

.section { margin-bottom: 2rem; }
.section-title {
    font-size: 1.5rem;
    margin-bottom: 1rem;
    padding-bottom: 0.5rem;
    border-bottom: 2px solid var(--border-color);
}

.insight-list, .recommendation-list { display: flex; flex-direction: column; gap: 1rem; }

.insight-card, .recommendation-card {
    border: 1px solid var(--border-color);
    border-left: 4px solid var(--border-color);
    border-radius: 8px;
    overflow: hidden;
}

.insight-card.pass { border-left-color: #48bb78; }
.insight-card.warning { border-left-color: #ed8936; }
.insight-card.fail { border-left-color: #f56565; }
.insight-card.locked { border-left-color: #94a3b8; }

.insight-header, .recommendation-header {
    padding: 0.75rem 1rem;
    background: #f8fafc;
    display: flex;
    align-items: center;
    gap: 1rem;
    flex-wrap: wrap;
}

.insight-title, .recommendation-title { flex: 1; font-weight: 600; }
.insight-explanation, .recommendation-body { padding: 1rem; color: #475569; }
.insight-explanation.obscured { color: #94a3b8; font-style: italic; }

.status-badge, .priority-badge {
    padding: 0.2rem 0.7rem;
    border-radius: 6px;
    font-size: 0.8rem;
    font-weight: 600;
    color: white;
    white-space: nowrap;
}

.status-pass { background: #48bb78; }
.status-warning { background: #ed8936; }
.status-fail { background: #f56565; }
.status-locked { background: #94a3b8; }
.priority-high { background: #dc2626; }
.priority-medium { background: #ca8a04; }
.priority-low { background: #2563eb; }

.category-badge {
    background: #e0e7ff;
    color: #4f46e5;
    padding: 0.2rem 0.7rem;
    border-radius: 6px;
    font-size: 0.8rem;
}

.recommendation-body p { margin-bottom: 0.5rem; }
.more { color: #64748b; font-style: italic; text-align: center; }

.detail-item {
    padding: 0.75rem 1rem;
    margin: 0.5rem 0;
    border-left: 4px solid var(--border-color);
    background: #f9fafb;
    display: flex;
    justify-content: space-between;
}

.detail-item.pass { border-left-color: #48bb78; }
.detail-item.warning { border-left-color: #ed8936; }
.detail-item.fail { border-left-color: #f56565; }
.detail-name { font-weight: 600; }
.detail-score { color: var(--primary-color); font-weight: 600; }

.footer {
    text-align: center;
    padding: 2rem;
    color: #64748b;
    font-size: 0.85rem;
    border-top: 1px solid var(--border-color);
}

@media print {
    body { padding: 0; background: white; }
    .container { box-shadow: none; }
    .insight-card, .recommendation-card, .detail-item { page-break-inside: avoid; }
}
"#;
