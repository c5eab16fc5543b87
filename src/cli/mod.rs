//! CLI command definitions and handlers

mod init;
mod scan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crawlsight - how well can AI read your website?
#[derive(Parser, Debug)]
#[command(name = "crawlsight")]
#[command(
    version,
    about = "Audit a web page for the signals AI crawlers and assistants rely on",
    long_about = "Crawlsight fetches a page, runs eight AI-readability checks (title, \
meta description, structured data, semantic HTML, image alt text, heading hierarchy, \
Open Graph, robots directives) and reports a 0-100 readiness score.\n\n\
The first four insights are free. The rest of the report unlocks after payment.",
    after_help = "\
Examples:
  crawlsight scan https://example.com                     Locked preview in the terminal
  crawlsight scan https://example.com -f json             JSON view for scripting
  crawlsight scan https://example.com -f html -o r.html   Print-ready export
  crawlsight scan https://example.com --unlock --email me@example.com
  crawlsight init                                         Write an example crawlsight.toml"
)]
pub struct Cli {
    /// Directory holding crawlsight.toml (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a crawlsight.toml config file with example settings
    Init,

    /// Scan a page and print its report
    #[command(after_help = "\
Examples:
  crawlsight scan https://example.com
  crawlsight scan https://example.com --summary \"Family bakery in Leeds\"
  crawlsight scan https://example.com -f html -o report.html --unlock --email me@example.com")]
    Scan {
        /// Page to audit (http or https)
        url: String,

        /// Output format: text, json, html (default from config, else text)
        #[arg(long, short = 'f', value_parser = ["text", "json", "html", "pdf"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Summary line to show instead of the score-band default
        #[arg(long)]
        summary: Option<String>,

        /// Confirm a (simulated) payment and unlock the full report
        #[arg(long, requires = "email")]
        unlock: bool,

        /// Email for the payment receipt
        #[arg(long, requires = "unlock")]
        email: Option<String>,
    },
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(&cli.config_dir),
        Commands::Scan {
            url,
            format,
            output,
            summary,
            unlock: _,
            email,
        } => {
            // clap ties --email and --unlock together, so an email means unlock
            scan::run(
                &cli.config_dir,
                &url,
                format.as_deref(),
                output.as_deref(),
                summary.as_deref(),
                email.as_deref(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from(["crawlsight", "scan", "https://example.com", "-f", "json"])
            .expect("parse");
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Commands::Scan { url, format, unlock, .. } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(format.as_deref(), Some("json"));
                assert!(!unlock);
            }
            Commands::Init => panic!("expected scan"),
        }
    }

    #[test]
    fn test_unlock_requires_email() {
        assert!(Cli::try_parse_from(["crawlsight", "scan", "https://example.com", "--unlock"]).is_err());
        assert!(Cli::try_parse_from([
            "crawlsight",
            "scan",
            "https://example.com",
            "--unlock",
            "--email",
            "me@example.com"
        ])
        .is_ok());
    }

    #[test]
    fn test_email_requires_unlock() {
        assert!(Cli::try_parse_from([
            "crawlsight",
            "scan",
            "https://example.com",
            "--email",
            "me@example.com"
        ])
        .is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["crawlsight", "scan", "https://example.com", "-f", "sarif"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
