//! Accessibility structure rules
//!
//! Heading hierarchy, image alt text, descriptive link text, and color
//! contrast guidance. Only missing or empty alt text blocks the verdict;
//! contrast cannot be verified without rendering, so that rule stays
//! informational.

use lazy_static::lazy_static;
use regex::Regex;

use shared_markup::Document;
use shared_types::Finding;

use crate::validator::Validator;

/// Link texts that tell a screen reader user nothing about the destination
const NON_DESCRIPTIVE_LINK_TEXT: &[&str] = &["click here", "here", "read more", "more"];

lazy_static! {
    static ref COLOR_SPEC: Regex =
        Regex::new(r"(?i)(color|background|bg):\s*#?[0-9a-f]{3,6}").expect("valid pattern");
}

/// Accessibility rule battery in evaluation order
pub fn validator() -> Validator {
    Validator::new()
        .rule("heading_hierarchy", |doc, _| check_heading_hierarchy(doc))
        .rule("alt_text", |doc, _| check_alt_text(doc))
        .rule("link_text", |doc, _| check_link_text(doc))
        .rule("color_contrast", |doc, _| check_color_contrast(doc))
}

/// Flag headings that skip a level (H1 directly to H3). Level decreases
/// and repeats are fine, a document with no headings is fine, and the
/// first heading sets the baseline wherever it starts (fragments may
/// legitimately open below H1).
fn check_heading_hierarchy(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut prev_level = 0u8;

    for heading in &doc.headings {
        if prev_level != 0 && heading.level > prev_level + 1 {
            findings.push(Finding::warning(format!(
                "Heading hierarchy skip: H{} follows H{} (do not skip heading levels)",
                heading.level, prev_level
            )));
        }
        prev_level = heading.level;
    }

    findings
}

/// Every image needs alt text. A missing attribute and a present-but-blank
/// one are reported separately so authors can tell which to fix.
fn check_alt_text(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    for image in &doc.images {
        match &image.alt {
            None => {
                findings.push(Finding::critical(format!(
                    "Image missing alt text: {}",
                    image.source
                )));
            }
            Some(alt) if alt.trim().is_empty() => {
                findings.push(Finding::critical(format!(
                    "Image has empty alt text: {}",
                    image.source
                )));
            }
            Some(_) => {}
        }
    }

    findings
}

fn check_link_text(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    for link in &doc.links {
        let text = link.text.trim().to_lowercase();
        if NON_DESCRIPTIVE_LINK_TEXT.contains(&text.as_str()) {
            findings.push(
                Finding::warning(format!(
                    "Link text not descriptive: '{}' (use text that names the destination)",
                    link.text.trim()
                ))
                .with_locator(link.href.clone()),
            );
        }
    }

    // Placeholder hrefs suggest an interactive control mis-tagged as a link
    let placeholder_count = doc.links.iter().filter(|l| l.href == "#").count();
    if placeholder_count > 0 {
        findings.push(Finding::warning(format!(
            "Found {} link(s) with href=\"#\" (use a button element for interactive controls)",
            placeholder_count
        )));
    }

    findings
}

/// Contrast ratios cannot be computed without rendering, so color
/// specifications only trigger guidance.
fn check_color_contrast(doc: &Document) -> Vec<Finding> {
    if COLOR_SPEC.is_match(&doc.raw_source) {
        vec![Finding::info(
            "Colors specified in content. Verify contrast ratios meet WCAG 2.1 AA: \
             4.5:1 for normal text, 3:1 for large text (18pt+ or 14pt+ bold).",
        )]
    } else {
        Vec::new()
    }
}
