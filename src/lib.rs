//! Crawlsight - AI readability audits for web pages
//!
//! A scan fetches one page, runs the check catalog over it, and stores a
//! locked [`report::Report`]. Confirming payment unlocks the report once;
//! reporters render whichever state the report is in.

pub mod checks;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod insights;
pub mod models;
pub mod payment;
pub mod recommendations;
pub mod report;
pub mod reporters;
pub mod scoring;
pub mod service;
pub mod store;

pub use error::{AuditError, AuditResult};
pub use service::AuditService;
