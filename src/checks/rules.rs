//! The standard eight-check rubric
//!
//! Each row pairs a scoring function with its own status bands. Bands are
//! per check on purpose: a 10-point structured-data score from microdata
//! still passes, while 8/15 for semantic HTML is only a warning.

use super::base::{Advice, InsightCopy, RuleCheck};
use crate::document::ParsedDocument;
use crate::models::Status;
use crate::scoring::round_ratio;

pub const TITLE_TAG: &str = "Has Title Tag";
pub const META_DESCRIPTION: &str = "Has Meta Description";
pub const STRUCTURED_DATA: &str = "Structured Data (Schema.org)";
pub const SEMANTIC_HTML: &str = "Semantic HTML Elements";
pub const IMAGE_ALT_TEXT: &str = "Image Alt Text";
pub const HEADING_HIERARCHY: &str = "Proper Heading Hierarchy";
pub const OPEN_GRAPH: &str = "Open Graph Tags";
pub const ROBOTS: &str = "Crawlable by AI (Robots)";

/// Descriptions longer than this earn full marks
const META_DESCRIPTION_MIN_CHARS: usize = 50;

const SEMANTIC_SELECTOR: &str = "header, nav, main, article, section, aside, footer";

fn title_points(doc: &dyn ParsedDocument) -> u32 {
    let title = doc.first_text("title").unwrap_or_default();
    if title.trim().is_empty() {
        0
    } else {
        10
    }
}

fn meta_description_points(doc: &dyn ParsedDocument) -> u32 {
    match doc.attr(r#"meta[name="description"]"#, "content") {
        Some(d) if d.chars().count() > META_DESCRIPTION_MIN_CHARS => 10,
        Some(d) if !d.is_empty() => 5,
        _ => 0,
    }
}

fn structured_data_points(doc: &dyn ParsedDocument) -> u32 {
    if doc.count(r#"script[type="application/ld+json"]"#) > 0 {
        15
    } else if doc.count("[itemscope]") > 0 {
        10
    } else {
        0
    }
}

fn semantic_html_points(doc: &dyn ParsedDocument) -> u32 {
    match doc.count(SEMANTIC_SELECTOR) {
        0 => 0,
        1 | 2 => 8,
        _ => 15,
    }
}

fn image_alt_points(doc: &dyn ParsedDocument) -> u32 {
    let total = doc.count("img");
    if total == 0 {
        // no images, nothing to describe
        return 10;
    }
    let with_alt = doc.count("img[alt]").min(total);
    round_ratio(with_alt as u64, total as u64, 10) as u32
}

fn heading_points(doc: &dyn ParsedDocument) -> u32 {
    let h1 = doc.count("h1");
    let h2 = doc.count("h2");
    match (h1, h2) {
        (0, _) => 0,
        (1, 0) => 7,
        (1, _) => 10,
        _ => 5,
    }
}

fn open_graph_points(doc: &dyn ParsedDocument) -> u32 {
    match doc.count(r#"meta[property^="og:"]"#) {
        0 => 0,
        1 | 2 => 5,
        _ => 10,
    }
}

fn robots_points(doc: &dyn ParsedDocument) -> u32 {
    match doc.attr(r#"meta[name="robots"]"#, "content") {
        Some(content) if content.contains("noindex") => 0,
        _ => 10,
    }
}

fn all_or_nothing(points: u32) -> Status {
    if points == 10 {
        Status::Pass
    } else {
        Status::Fail
    }
}

fn meta_description_status(points: u32) -> Status {
    match points {
        10 => Status::Pass,
        5 => Status::Warning,
        _ => Status::Fail,
    }
}

fn structured_data_status(points: u32) -> Status {
    if points >= 10 {
        Status::Pass
    } else {
        Status::Fail
    }
}

/// Semantic HTML and headings: a strong band passes, any partial credit warns
fn banded(pass_at: u32) -> impl Fn(u32) -> Status {
    move |points| {
        if points >= pass_at {
            Status::Pass
        } else if points > 0 {
            Status::Warning
        } else {
            Status::Fail
        }
    }
}

fn semantic_html_status(points: u32) -> Status {
    banded(10)(points)
}

fn heading_status(points: u32) -> Status {
    banded(7)(points)
}

fn open_graph_status(points: u32) -> Status {
    banded(7)(points)
}

fn image_alt_status(points: u32) -> Status {
    match points {
        8..=u32::MAX => Status::Pass,
        5..=7 => Status::Warning,
        _ => Status::Fail,
    }
}

/// The reference catalog, in scoring order
pub const STANDARD_RULES: [RuleCheck; 8] = [
    RuleCheck {
        name: TITLE_TAG,
        max_points: 10,
        evaluate: title_points,
        classify: all_or_nothing,
        copy: InsightCopy {
            context: "AI systems use your page title to understand what your site is about.",
            pass_note: "Your title clearly communicates your purpose.",
            gap_note: "Your title is missing or unclear, making it harder for AI to identify your website's purpose.",
        },
        advice: Some(Advice {
            title: "Add a Descriptive Page Title",
            category: "Identity",
            description: "The <title> element is the first signal agents read when deciding what a page is about.",
            action: "Add a concise <title> naming your business and what it offers, e.g. \"Blue Door Bistro | Seasonal Dining in Portland\".",
            impact: "Agents can identify and cite your site correctly",
        }),
    },
    RuleCheck {
        name: META_DESCRIPTION,
        max_points: 10,
        evaluate: meta_description_points,
        classify: meta_description_status,
        copy: InsightCopy {
            context: "AI uses meta descriptions to create summaries of your website.",
            pass_note: "Your description helps AI accurately summarize your content.",
            gap_note: "Without a clear description, AI may create incomplete or inaccurate summaries of what you offer.",
        },
        advice: Some(Advice {
            title: "Write a Fuller Meta Description",
            category: "Summaries",
            description: "Agents quote the meta description when summarizing a page. Short or missing descriptions force them to guess.",
            action: "Add <meta name=\"description\"> with more than 50 characters describing what you offer and who it is for.",
            impact: "Summaries and answer snippets describe you accurately",
        }),
    },
    RuleCheck {
        name: STRUCTURED_DATA,
        max_points: 15,
        evaluate: structured_data_points,
        classify: structured_data_status,
        copy: InsightCopy {
            context: "Structured data helps AI understand what type of business or content you represent.",
            pass_note: "AI can clearly categorize your website.",
            gap_note: "AI may struggle to categorize your website without structured data signals.",
        },
        advice: Some(Advice {
            title: "Add Schema.org Structured Data",
            category: "Categorization",
            description: "JSON-LD markup tells agents exactly what kind of entity the page describes, with its address, hours and offerings.",
            action: "Embed a <script type=\"application/ld+json\"> block using the most specific Schema.org type for your business.",
            impact: "Agents categorize you correctly in entity and local queries",
        }),
    },
    RuleCheck {
        name: SEMANTIC_HTML,
        max_points: 15,
        evaluate: semantic_html_points,
        classify: semantic_html_status,
        copy: InsightCopy {
            context: "Semantic HTML helps AI understand the organization of your content.",
            pass_note: "AI can easily navigate and understand your content structure.",
            gap_note: "AI may misinterpret the importance and relationship of different sections on your site.",
        },
        advice: Some(Advice {
            title: "Use Semantic Layout Elements",
            category: "Structure",
            description: "Landmarks such as <header>, <nav>, <main> and <footer> let agents separate primary content from chrome.",
            action: "Wrap page regions in semantic elements; aim for at least three distinct landmarks.",
            impact: "Agents extract the right content and skip navigation noise",
        }),
    },
    RuleCheck {
        name: IMAGE_ALT_TEXT,
        max_points: 10,
        evaluate: image_alt_points,
        classify: image_alt_status,
        copy: InsightCopy {
            context: "Images without descriptions create gaps in AI understanding.",
            pass_note: "AI can interpret the meaning of your images.",
            gap_note: "AI cannot understand what your images represent, creating blind spots in interpretation.",
        },
        advice: Some(Advice {
            title: "Describe Your Images",
            category: "Visual Content",
            description: "Agents cannot see images; the alt attribute is the only description they get.",
            action: "Add an alt attribute to every <img>. Describe meaningful images and use alt=\"\" for purely decorative ones.",
            impact: "Visual content contributes to how agents understand the page",
        }),
    },
    RuleCheck {
        name: HEADING_HIERARCHY,
        max_points: 10,
        evaluate: heading_points,
        classify: heading_status,
        copy: InsightCopy {
            context: "Headings help AI understand what topics are most important on your page.",
            pass_note: "AI can accurately map your content hierarchy and main topics.",
            gap_note: "AI may misunderstand which topics are most important on your website.",
        },
        advice: Some(Advice {
            title: "Fix the Heading Outline",
            category: "Structure",
            description: "A single <h1> followed by <h2> sections gives agents a clear outline of the page's topics.",
            action: "Keep exactly one <h1> for the page subject and use <h2> for each major section.",
            impact: "Agents rank your topics in the order you intend",
        }),
    },
    RuleCheck {
        name: OPEN_GRAPH,
        max_points: 10,
        evaluate: open_graph_points,
        classify: open_graph_status,
        copy: InsightCopy {
            context: "Social media tags influence how AI describes your site when sharing.",
            pass_note: "AI has clear signals for how to represent your website.",
            gap_note: "AI may use incomplete information when describing your website in summaries or recommendations.",
        },
        advice: Some(Advice {
            title: "Complete Your Open Graph Tags",
            category: "Representation",
            description: "og:title, og:description and og:image define how your page is previewed when shared or summarized.",
            action: "Add at least og:title, og:description and og:image meta tags.",
            impact: "Consistent previews wherever your page is shared or cited",
        }),
    },
    RuleCheck {
        name: ROBOTS,
        max_points: 10,
        evaluate: robots_points,
        classify: all_or_nothing,
        copy: InsightCopy {
            context: "",
            pass_note: "AI systems can fully access and interpret your website.",
            gap_note: "Your website blocks AI access, preventing proper interpretation of your content.",
        },
        advice: Some(Advice {
            title: "Allow Indexing",
            category: "Access",
            description: "A robots meta tag containing noindex tells crawlers and agents to ignore the page entirely.",
            action: "Remove noindex from <meta name=\"robots\"> on pages you want agents to read.",
            impact: "The page becomes eligible for AI answers and search results",
        }),
    },
];
