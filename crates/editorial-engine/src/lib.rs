//! Editorial validation engine
//!
//! Validates written content (marketing pages, press releases, marketing
//! copy) against independent editorial rule sets: accessibility structure,
//! SEO structure, readability, and house style. Each check normalizes the
//! input once, runs its rule battery against the shared structure, and
//! reduces the collected findings to a pass/fail report. Only Critical
//! findings block; Warning and Info findings are advisory.

pub mod error;
pub mod readability;
pub mod rules;
pub mod validator;

use std::fs;
use std::path::Path;

use shared_markup::{strip_markup, Document};
use shared_types::{DocumentKind, Report};

pub use error::ValidationError;
pub use readability::{FleschScorer, ReadabilityPolicy, ReadabilityScorer};
pub use rules::seo::SeoPolicy;
pub use validator::Validator;

/// One of the editorial checks, with its check-specific parameters
#[derive(Debug, Clone)]
pub enum Check {
    Accessibility,
    Seo { keyword: String },
    Readability { threshold: f64 },
    Style,
}

/// Validate raw content of a declared type against one check.
///
/// Fatal input errors (no scoreable content) abort before any rule runs;
/// everything a rule detects comes back as a finding in the report.
pub fn validate_content(
    raw: &str,
    kind: DocumentKind,
    check: &Check,
) -> Result<Report, ValidationError> {
    let validator = match check {
        Check::Accessibility => rules::accessibility::validator(),
        Check::Seo { keyword } => rules::seo::validator(keyword.clone(), SeoPolicy::default()),
        Check::Style => rules::style::validator(),
        Check::Readability { threshold } => {
            if strip_markup(raw).is_empty() {
                return Err(ValidationError::NoTextContent);
            }
            readability::validator(
                FleschScorer,
                ReadabilityPolicy {
                    threshold: *threshold,
                },
            )
        }
    };

    let doc = Document::parse(raw, kind);
    Ok(validator.run(&doc))
}

/// Validate a file on disk, inferring the document type from its
/// extension. The file is read fully into memory in one scoped
/// acquisition; a missing or unreadable file is a fatal error.
pub fn validate_file(path: &Path, check: &Check) -> Result<Report, ValidationError> {
    let raw = fs::read_to_string(path).map_err(|source| ValidationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "content loaded");
    validate_content(&raw, DocumentKind::from_path(path), check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readability_rejects_markup_only_input() {
        let result = validate_content(
            "```\ncode only\n```\n",
            DocumentKind::Markdown,
            &Check::Readability { threshold: 60.0 },
        );
        assert!(matches!(result, Err(ValidationError::NoTextContent)));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = validate_file(
            Path::new("/nonexistent/deliverable.md"),
            &Check::Style,
        );
        assert!(matches!(result, Err(ValidationError::Read { .. })));
    }

    #[test]
    fn test_validate_content_dispatches_each_check() {
        let raw = "description: Short and clear\n\n# Big News\n\n## The Story\n\n\
                   We made a fast tool. It is easy to use. You can try it now. The team is proud.\n";

        for check in [
            Check::Accessibility,
            Check::Seo {
                keyword: "news".to_string(),
            },
            Check::Readability { threshold: 60.0 },
            Check::Style,
        ] {
            let report = validate_content(raw, DocumentKind::Markdown, &check)
                .expect("no fatal error");
            assert!(report.passed, "{:?} failed: {:?}", check, report.findings);
        }
    }
}
