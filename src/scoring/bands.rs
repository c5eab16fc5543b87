//! Score bands shared by the summary copy and the renderers

use serde::{Deserialize, Serialize};

/// Four-way reading of a score (breakpoints 80 / 60 / 40)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Partial,
    Incomplete,
    Struggling,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ScoreBand::Strong,
            60..=79 => ScoreBand::Partial,
            40..=59 => ScoreBand::Incomplete,
            _ => ScoreBand::Struggling,
        }
    }

    /// Default summary sentence for reports in this band
    pub fn summary(&self) -> &'static str {
        match self {
            ScoreBand::Strong => {
                "AI agents have a strong understanding of your website, making you highly discoverable in AI-powered search and recommendations."
            }
            ScoreBand::Partial => {
                "AI agents partially understand your website, but several important signals remain unclear, limiting your visibility in discovery searches."
            }
            ScoreBand::Incomplete => {
                "AI agents form an incomplete understanding of your website, with significant gaps that reduce your discoverability."
            }
            ScoreBand::Struggling => {
                "AI agents struggle to identify and understand your website, making you nearly invisible in AI-powered search and recommendations."
            }
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Strong => write!(f, "strong"),
            ScoreBand::Partial => write!(f, "partial"),
            ScoreBand::Incomplete => write!(f, "incomplete"),
            ScoreBand::Struggling => write!(f, "struggling"),
        }
    }
}

/// Display tone of a score (breakpoints 80 / 60)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Success,
    Warning,
    Alert,
}

impl ScoreTone {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreTone::Success
        } else if score >= 60 {
            ScoreTone::Warning
        } else {
            ScoreTone::Alert
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTone::Success => "tone-success",
            ScoreTone::Warning => "tone-warning",
            ScoreTone::Alert => "tone-alert",
        }
    }

    /// ANSI colour for terminal output
    pub fn ansi(&self) -> &'static str {
        match self {
            ScoreTone::Success => "\x1b[32m",
            ScoreTone::Warning => "\x1b[33m",
            ScoreTone::Alert => "\x1b[31m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_breakpoints() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Partial);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Partial);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Incomplete);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Incomplete);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Struggling);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Struggling);
    }

    #[test]
    fn test_tone_shares_upper_breakpoints() {
        assert_eq!(ScoreTone::from_score(80), ScoreTone::Success);
        assert_eq!(ScoreTone::from_score(79), ScoreTone::Warning);
        assert_eq!(ScoreTone::from_score(60), ScoreTone::Warning);
        assert_eq!(ScoreTone::from_score(59), ScoreTone::Alert);
    }

    #[test]
    fn test_summaries_differ_per_band() {
        let bands = [
            ScoreBand::Strong,
            ScoreBand::Partial,
            ScoreBand::Incomplete,
            ScoreBand::Struggling,
        ];
        for (i, a) in bands.iter().enumerate() {
            for b in &bands[i + 1..] {
                assert_ne!(a.summary(), b.summary());
            }
        }
        assert!(ScoreBand::Strong.summary().contains("strong understanding"));
    }
}
