//! Output reporters for Crawlsight reports
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - The client-facing report view
//! - `html` - Standalone, print-ready export (save as PDF from the browser)
//!
//! Every reporter renders the report's *current* access state and is a pure
//! function of the report snapshot: rendering the same snapshot twice gives
//! byte-identical output.

mod html;
mod json;
mod text;

use crate::report::{Report, ReportOptions};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" | "pdf" => Ok(OutputFormat::Html),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, html",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(
    report: &Report,
    options: &ReportOptions,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report, options),
        OutputFormat::Html => html::render(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::report_for;

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::from_str("pdf").unwrap(), OutputFormat::Html);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_every_format_is_stable() {
        let report = report_for("<title>Stable</title><h1>One</h1>");
        let options = ReportOptions::default();
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Html] {
            let a = report_with_format(&report, &options, format).expect("render");
            let b = report_with_format(&report, &options, format).expect("render");
            assert_eq!(a, b, "{} output changed between renders", format);
        }
    }
}
