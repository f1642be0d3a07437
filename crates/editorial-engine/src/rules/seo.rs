//! SEO structure rules
//!
//! Keyword density with policy bounds, heading requirements, metadata
//! description, title presence, and keyword placement. Missing H1 and
//! missing meta description are the only blocking conditions.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use shared_markup::Document;
use shared_types::{DocumentKind, Finding, MetricValue};

use crate::validator::Validator;

/// Recommended length ceiling for search snippets
const META_DESCRIPTION_MAX_CHARS: usize = 160;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").expect("valid pattern");
}

/// Density bounds in percent. Policy constants, not law: embedders may
/// tighten or loosen them per campaign.
#[derive(Debug, Clone, Copy)]
pub struct SeoPolicy {
    pub min_density: f64,
    pub max_density: f64,
}

impl Default for SeoPolicy {
    fn default() -> Self {
        Self {
            min_density: 1.0,
            max_density: 5.0,
        }
    }
}

/// SEO rule battery in evaluation order
pub fn validator(keyword: String, policy: SeoPolicy) -> Validator {
    let kw_density = keyword.clone();
    let kw_h1 = keyword;

    Validator::new()
        .rule("keyword_density", move |doc, metrics| {
            check_keyword_density(doc, &kw_density, policy, metrics)
        })
        .rule("single_h1", |doc, _| check_single_h1(doc))
        .rule("h2_presence", |doc, _| check_h2_presence(doc))
        .rule("meta_description", |doc, metrics| {
            check_meta_description(doc, metrics)
        })
        .rule("title_tag", |doc, _| check_title_tag(doc))
        .rule("keyword_in_h1", move |doc, _| check_keyword_in_h1(doc, &kw_h1))
}

/// Density = keyword occurrences / total words, as a percentage. The
/// computed value is always surfaced as a metric regardless of verdict.
fn check_keyword_density(
    doc: &Document,
    keyword: &str,
    policy: SeoPolicy,
    metrics: &mut BTreeMap<String, MetricValue>,
) -> Vec<Finding> {
    let text = doc.full_text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();

    let occurrences = if keyword_lower.is_empty() {
        0
    } else {
        text.matches(&keyword_lower).count()
    };
    let total_words = WORD.find_iter(&text).count();

    let density = if total_words == 0 {
        0.0
    } else {
        occurrences as f64 / total_words as f64 * 100.0
    };
    let density = (density * 100.0).round() / 100.0;

    metrics.insert("keyword".to_string(), MetricValue::from(keyword));
    metrics.insert("keyword_density".to_string(), MetricValue::Number(density));

    if density < policy.min_density {
        vec![Finding::warning(format!(
            "Keyword density too low: {:.2}% (target: {}%-{}%)",
            density, policy.min_density, policy.max_density
        ))]
    } else if density > policy.max_density {
        vec![Finding::warning(format!(
            "Keyword density too high: {:.2}% (target: {}%-{}%); may read as keyword stuffing",
            density, policy.min_density, policy.max_density
        ))]
    } else {
        Vec::new()
    }
}

fn check_single_h1(doc: &Document) -> Vec<Finding> {
    let h1_count = doc.headings_at(1).count();
    match h1_count {
        0 => vec![Finding::critical(
            "No H1 heading found (required for search structure)",
        )],
        1 => Vec::new(),
        n => vec![Finding::warning(format!(
            "Multiple H1 headings found ({}); use only one H1",
            n
        ))],
    }
}

fn check_h2_presence(doc: &Document) -> Vec<Finding> {
    if doc.headings_at(2).count() == 0 {
        vec![Finding::warning(
            "No H2 headings found (recommended for content structure)",
        )]
    } else {
        Vec::new()
    }
}

fn check_meta_description(
    doc: &Document,
    metrics: &mut BTreeMap<String, MetricValue>,
) -> Vec<Finding> {
    match doc.metadata("description") {
        None => vec![Finding::critical(
            "No meta description found (required for search snippets)",
        )],
        Some(description) => {
            let length = description.chars().count();
            metrics.insert(
                "meta_description_length".to_string(),
                MetricValue::Number(length as f64),
            );
            if length > META_DESCRIPTION_MAX_CHARS {
                vec![Finding::warning(format!(
                    "Meta description too long: {} chars (recommended: under {})",
                    length, META_DESCRIPTION_MAX_CHARS
                ))]
            } else {
                Vec::new()
            }
        }
    }
}

/// Hypertext documents only; markdown and plain text have no title element.
fn check_title_tag(doc: &Document) -> Vec<Finding> {
    if doc.kind != DocumentKind::Hypertext {
        return Vec::new();
    }
    match &doc.title {
        Some(title) if !title.trim().is_empty() => Vec::new(),
        _ => vec![Finding::warning(
            "No title element found (recommended for hypertext pages)",
        )],
    }
}

/// Only evaluated once at least one H1 exists; the missing-H1 case is the
/// single_h1 rule's to report.
fn check_keyword_in_h1(doc: &Document, keyword: &str) -> Vec<Finding> {
    let h1_text = doc
        .headings_at(1)
        .map(|h| h.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if h1_text.is_empty() {
        return Vec::new();
    }

    if !h1_text.contains(&keyword.to_lowercase()) {
        vec![Finding::warning(format!(
            "Target keyword '{}' not found in H1 heading (recommended)",
            keyword
        ))]
    } else {
        Vec::new()
    }
}
