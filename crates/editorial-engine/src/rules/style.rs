//! House style pattern rules
//!
//! A fixed battery of independent pattern checks over the raw source.
//! Pattern rules must see the original markup and front-matter syntax, so
//! they never look at the parsed structure. Each rule caps its reported
//! examples to keep output readable. Only the known-misspelling rule
//! blocks; every grammar and format preference is advisory.

use lazy_static::lazy_static;
use regex::Regex;

use shared_markup::Document;
use shared_types::Finding;

use crate::validator::Validator;

/// Most matches quoted per rule before the rest are dropped
const EXAMPLE_CAP: usize = 3;
const SUGGESTION_CAP: usize = 2;

/// Full state names tolerated before suggesting abbreviations
const STATE_NAME_LIMIT: usize = 3;

lazy_static! {
    static ref SERIAL_COMMA: Regex =
        Regex::new(r"(?i)\b\w+,\s+\w+,\s+and\s+\w+\b").expect("valid pattern");
    static ref MISSPELLED_ALOT: Regex = Regex::new(r"(?i)\balot\b").expect("valid pattern");
    static ref PERCENT_WORD: Regex = Regex::new(r"\b\d+\s+percent\b").expect("valid pattern");
    static ref OVER_QUANTITY: Regex = Regex::new(r"(?i)\bover\s+\d+").expect("valid pattern");
    static ref ORDINAL_DATE: Regex = Regex::new(
        r"\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d+(st|nd|rd|th)"
    )
    .expect("valid pattern");
    static ref ISO_DATE: Regex = Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").expect("valid pattern");
    static ref UPPERCASE_TIME: Regex =
        Regex::new(r"\b\d{1,2}:\d{2}\s*(AM|PM)\b").expect("valid pattern");
    static ref DOUBLE_SPACE: Regex = Regex::new(r"\.[ ]{2,}").expect("valid pattern");
    static ref STATE_NAME: Regex = Regex::new(
        r"\b(Alabama|Alaska|Arizona|Arkansas|California|Colorado|Connecticut|Delaware|Florida|Georgia|Idaho|Illinois|Indiana|Iowa|Kansas|Kentucky|Louisiana|Maine|Maryland|Massachusetts|Michigan|Minnesota|Mississippi|Missouri|Montana|Nebraska|Nevada|New Hampshire|New Jersey|New Mexico|New York|North Carolina|North Dakota|Ohio|Oklahoma|Oregon|Pennsylvania|Rhode Island|South Carolina|South Dakota|Tennessee|Texas|Utah|Vermont|Virginia|Washington|West Virginia|Wisconsin|Wyoming)\b"
    )
    .expect("valid pattern");
    static ref TITLE_AFTER_NAME: Regex =
        Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+,\s+[A-Z][a-z]+\s+[A-Z][a-z]+").expect("valid pattern");
}

/// Style rule battery in evaluation order
pub fn validator() -> Validator {
    Validator::new()
        .rule("serial_comma", |doc, _| check_serial_comma(doc))
        .rule("misspelling", |doc, _| check_misspelling(doc))
        .rule("percent_word", |doc, _| check_percent_word(doc))
        .rule("over_quantity", |doc, _| check_over_quantity(doc))
        .rule("ordinal_date", |doc, _| check_ordinal_date(doc))
        .rule("iso_date", |doc, _| check_iso_date(doc))
        .rule("time_notation", |doc, _| check_time_notation(doc))
        .rule("double_space", |doc, _| check_double_space(doc))
        .rule("state_names", |doc, _| check_state_names(doc))
        .rule("title_after_name", |doc, _| check_title_after_name(doc))
}

fn check_serial_comma(doc: &Document) -> Vec<Finding> {
    SERIAL_COMMA
        .find_iter(&doc.raw_source)
        .take(EXAMPLE_CAP)
        .map(|m| {
            Finding::warning(format!(
                "Serial comma found: '{}' (drop the comma before \"and\" in a simple series)",
                m.as_str()
            ))
            .with_locator(m.as_str().to_string())
        })
        .collect()
}

fn check_misspelling(doc: &Document) -> Vec<Finding> {
    if MISSPELLED_ALOT.is_match(&doc.raw_source) {
        vec![Finding::critical("Spelling error: 'alot' should be 'a lot'")]
    } else {
        Vec::new()
    }
}

fn check_percent_word(doc: &Document) -> Vec<Finding> {
    if PERCENT_WORD.is_match(&doc.raw_source) {
        vec![Finding::warning(
            "Use the % symbol with numerals (\"50%\" not \"50 percent\")",
        )]
    } else {
        Vec::new()
    }
}

fn check_over_quantity(doc: &Document) -> Vec<Finding> {
    OVER_QUANTITY
        .find_iter(&doc.raw_source)
        .take(SUGGESTION_CAP)
        .map(|m| {
            Finding::info(format!(
                "Consider \"more than\" instead of '{}' for quantities",
                m.as_str()
            ))
            .with_locator(m.as_str().to_string())
        })
        .collect()
}

fn check_ordinal_date(doc: &Document) -> Vec<Finding> {
    if ORDINAL_DATE.is_match(&doc.raw_source) {
        vec![Finding::warning(
            "Date format: drop ordinal suffixes (\"Jan. 15\" not \"Jan. 15th\")",
        )]
    } else {
        Vec::new()
    }
}

fn check_iso_date(doc: &Document) -> Vec<Finding> {
    if ISO_DATE.is_match(&doc.raw_source) {
        vec![Finding::info(
            "ISO date format found (YYYY-MM-DD); prefer \"Month Day, Year\"",
        )]
    } else {
        Vec::new()
    }
}

fn check_time_notation(doc: &Document) -> Vec<Finding> {
    if UPPERCASE_TIME.is_match(&doc.raw_source) {
        vec![Finding::warning(
            "Time format: use lowercase \"a.m.\" and \"p.m.\" with periods",
        )]
    } else {
        Vec::new()
    }
}

fn check_double_space(doc: &Document) -> Vec<Finding> {
    if DOUBLE_SPACE.is_match(&doc.raw_source) {
        vec![Finding::info(
            "Double space after a period found; use a single space",
        )]
    } else {
        Vec::new()
    }
}

fn check_state_names(doc: &Document) -> Vec<Finding> {
    let count = STATE_NAME.find_iter(&doc.raw_source).count();
    if count > STATE_NAME_LIMIT {
        vec![Finding::info(format!(
            "{} full state names found; abbreviate states when paired with a city",
            count
        ))]
    } else {
        Vec::new()
    }
}

fn check_title_after_name(doc: &Document) -> Vec<Finding> {
    if TITLE_AFTER_NAME.is_match(&doc.raw_source) {
        vec![Finding::info(
            "Job titles are capitalized before a name and lowercase after \
             (\"CEO Jane Smith\" or \"Jane Smith, chief executive officer\")",
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{DocumentKind, Severity};

    fn plain(raw: &str) -> Document {
        Document::parse(raw, DocumentKind::Plain)
    }

    #[test]
    fn test_serial_comma_quotes_match() {
        let findings = check_serial_comma(&plain("We sell apples, oranges, and pears."));
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("apples, oranges, and pears"));
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_serial_comma_caps_examples() {
        let raw = "a, b, and c. d, e, and f. g, h, and i. j, k, and l.";
        let findings = check_serial_comma(&plain(raw));
        assert_eq!(findings.len(), EXAMPLE_CAP);
    }

    #[test]
    fn test_no_serial_comma_without_final_comma() {
        assert!(check_serial_comma(&plain("We sell apples, oranges and pears.")).is_empty());
    }

    #[test]
    fn test_alot_is_critical() {
        let findings = check_misspelling(&plain("We learned alot this year."));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
    }

    #[test]
    fn test_allot_not_flagged() {
        assert!(check_misspelling(&plain("We will allot funds accordingly.")).is_empty());
    }

    #[test]
    fn test_percent_word_after_numeral() {
        assert_eq!(check_percent_word(&plain("Sales grew 50 percent.")).len(), 1);
        assert!(check_percent_word(&plain("Sales grew 50%.")).is_empty());
        assert!(check_percent_word(&plain("A large percent of users.")).is_empty());
    }

    #[test]
    fn test_over_with_numeral_suggests() {
        let findings = check_over_quantity(&plain("over 500 customers and over 20 cities and over 3 countries"));
        assert_eq!(findings.len(), SUGGESTION_CAP);
        assert_eq!(findings[0].severity, Severity::Info);
        assert!(findings[0].message.contains("over 500"));
    }

    #[test]
    fn test_date_rules() {
        assert_eq!(check_ordinal_date(&plain("Launching January 15th, 2026.")).len(), 1);
        assert!(check_ordinal_date(&plain("Launching Jan. 15, 2026.")).is_empty());
        assert_eq!(check_iso_date(&plain("Launching 2026-01-15.")).len(), 1);
        assert_eq!(check_iso_date(&plain("Launching 2026-01-15."))[0].severity, Severity::Info);
    }

    #[test]
    fn test_uppercase_time_flagged_lowercase_not() {
        assert_eq!(check_time_notation(&plain("Doors open at 10:30 AM.")).len(), 1);
        assert!(check_time_notation(&plain("Doors open at 10:30 a.m.")).is_empty());
    }

    #[test]
    fn test_double_space_after_period() {
        assert_eq!(check_double_space(&plain("First sentence.  Second.")).len(), 1);
        assert!(check_double_space(&plain("First sentence. Second.")).is_empty());
        // A paragraph break is not a double space
        assert!(check_double_space(&plain("First sentence.\n\nSecond.")).is_empty());
    }

    #[test]
    fn test_state_names_over_limit() {
        let raw = "Offices in Florida, Texas, Ohio and Georgia.";
        let findings = check_state_names(&plain(raw));
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("4 full state names"));

        assert!(check_state_names(&plain("Offices in Florida and Texas.")).is_empty());
    }

    #[test]
    fn test_title_after_name_pattern() {
        let findings = check_title_after_name(&plain("John Smith, Chief Executive of the firm."));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);

        assert!(check_title_after_name(&plain("John Smith, chief executive of the firm.")).is_empty());
    }

    #[test]
    fn test_family_fails_only_on_misspelling() {
        let report = validator().run(&plain("We ship apples, oranges, and pears. Also alot of grapes."));
        assert!(!report.passed);

        let report = validator().run(&plain("We ship apples, oranges, and pears."));
        assert!(report.passed);
        assert_eq!(report.findings.len(), 1);
    }

    #[test]
    fn test_rules_run_against_raw_markup() {
        // The ISO date sits inside a front-matter block that parsing hides
        let raw = "---\ndate: 2026-01-15\n---\n\n# Post\n\nBody.\n";
        let report = validator().run(&Document::parse(raw, DocumentKind::Markdown));
        assert!(report.findings.iter().any(|f| f.message.contains("ISO date")));
    }
}
