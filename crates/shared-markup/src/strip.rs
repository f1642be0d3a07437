//! Markup stripping for readability scoring
//!
//! The readability scorer must only ever see prose. This module removes
//! code, tags, and markdown syntax while retaining the visible text
//! (link text, emphasis content, heading text).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FENCED_CODE: Regex = Regex::new(r"(?s)```.*?```").expect("valid pattern");
    static ref INLINE_CODE: Regex = Regex::new(r"`[^`]+`").expect("valid pattern");
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").expect("valid pattern");
    static ref IMAGE: Regex = Regex::new(r"!\[([^\]]*)\]\([^)]*\)").expect("valid pattern");
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("valid pattern");
    static ref HEADING_MARKER: Regex = Regex::new(r"(?m)^#{1,6}\s+").expect("valid pattern");
    static ref BOLD: Regex = Regex::new(r"\*\*([^*]+)\*\*").expect("valid pattern");
    static ref ITALIC: Regex = Regex::new(r"\*([^*]+)\*").expect("valid pattern");
    static ref BOLD_UNDERSCORE: Regex = Regex::new(r"__([^_]+)__").expect("valid pattern");
    static ref ITALIC_UNDERSCORE: Regex = Regex::new(r"_([^_]+)_").expect("valid pattern");
    static ref HORIZONTAL_RULE: Regex = Regex::new(r"(?m)^[-*_]{3,}\s*$").expect("valid pattern");
    static ref BULLET: Regex = Regex::new(r"(?m)^\s*[-*+]\s+").expect("valid pattern");
    static ref NUMBERED: Regex = Regex::new(r"(?m)^\s*\d+\.\s+").expect("valid pattern");
    static ref BLANK_RUN: Regex = Regex::new(r"\n\s*\n").expect("valid pattern");
}

/// Reduce raw content to plain prose for scoring. Returns an empty string
/// when nothing but markup was present; the caller treats that as a fatal
/// input error.
pub fn strip_markup(raw: &str) -> String {
    let text = FENCED_CODE.replace_all(raw, "");
    let text = INLINE_CODE.replace_all(&text, "");
    let text = HTML_TAG.replace_all(&text, "");
    // Images before links: image syntax embeds link syntax
    let text = IMAGE.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = HEADING_MARKER.replace_all(&text, "");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORE.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    let text = HORIZONTAL_RULE.replace_all(&text, "");
    let text = BULLET.replace_all(&text, "");
    let text = NUMBERED.replace_all(&text, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
