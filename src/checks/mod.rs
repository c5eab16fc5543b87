//! Page checks
//!
//! This module provides the check framework and the standard rubric used to
//! judge how well automated agents can interpret a page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CheckCatalog                          │
//! │  - Ordered registry of checks (names unique)                │
//! │  - Runs every check against one ParsedDocument              │
//! │  - Hands results to the scorer, insights, recommendations   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Check Trait                          │
//! │  - evaluate(doc): points in 0..=max_points                  │
//! │  - classify(points): pass / warning / fail, per check       │
//! │  - explain(status), recommend(status)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  RuleCheck table (STANDARD_RULES)
//! ```
//!
//! # Standard rubric
//!
//! | # | Check | Max |
//! |---|-------|-----|
//! | 1 | Has Title Tag | 10 |
//! | 2 | Has Meta Description | 10 |
//! | 3 | Structured Data (Schema.org) | 15 |
//! | 4 | Semantic HTML Elements | 15 |
//! | 5 | Image Alt Text | 10 |
//! | 6 | Proper Heading Hierarchy | 10 |
//! | 7 | Open Graph Tags | 10 |
//! | 8 | Crawlable by AI (Robots) | 10 |

mod base;
mod catalog;
pub mod rules;

pub use base::{Advice, Check, InsightCopy, RuleCheck};
pub use catalog::{CheckCatalog, CheckCatalogBuilder};
pub use rules::STANDARD_RULES;
