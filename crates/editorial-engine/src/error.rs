//! Fatal input errors, reported distinctly from findings
//!
//! These abort a validation run before any rule executes. Findings are
//! never errors: a rule that detects nothing simply returns no findings.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no text content found after removing formatting; the input may be empty or contain only markup and code")]
    NoTextContent,
}
