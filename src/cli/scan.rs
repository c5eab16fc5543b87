//! Scan command - fetch, audit, optionally unlock, then render

use crate::config::load_config;
use crate::fetch::HttpFetcher;
use crate::payment::SimulatedPayments;
use crate::reporters::OutputFormat;
use crate::service::AuditService;
use crate::store::InMemoryReportStore;
use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

pub fn run(
    config_dir: &Path,
    url: &str,
    format: Option<&str>,
    output: Option<&Path>,
    summary: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let config = load_config(config_dir);
    config.validate()?;

    let format = format
        .or(config.defaults.format.as_deref())
        .unwrap_or("text");
    let format = OutputFormat::from_str(format)?;

    let service = AuditService::new(
        Arc::new(HttpFetcher::new(&config.fetch)),
        Arc::new(InMemoryReportStore::new()),
        Arc::new(SimulatedPayments::new()),
    )
    .with_options(config.report.clone());

    // Spinner draws to stderr so stdout stays clean for the report
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Scanning {}...", url));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let scanned = service.scan(url, summary);
    spinner.finish_and_clear();
    let view = scanned?;

    eprintln!(
        "{} Scanned {} (score {})",
        style("✓").green(),
        style(&view.url).cyan(),
        style(view.score).bold()
    );

    if let Some(email) = email {
        let (receipt, _) = service.confirm_payment(view.report_id, email)?;
        eprintln!(
            "{} Payment {} confirmed, report unlocked",
            style("✓").green(),
            style(receipt.payment_id).dim()
        );
    }

    let rendered = service.export(view.report_id, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            eprintln!(
                "\n{}Report written to: {}",
                style("📄 ").bold(),
                style(path.display()).cyan()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
