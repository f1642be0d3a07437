use std::collections::BTreeMap;
use std::path::Path;

/// Severity tiers for findings. Ordered so that `Critical > Warning > Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Whether a finding of this severity blocks the pass verdict
    pub fn blocks(&self) -> bool {
        matches!(self, Severity::Critical)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// One reported observation from a rule. The message is self-contained;
/// the locator, when present, quotes the matched content.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    pub locator: Option<String>,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            locator: None,
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Attach a quote of the matched content
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }
}

/// A named fact surfaced for display alongside findings. Informational
/// only; never consulted by the pass/fail decision.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

/// The result of running one validator over one document.
///
/// Findings appear in rule-evaluation order, never re-sorted. Reports carry
/// no timestamps: re-running on unchanged input must yield an identical
/// report.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub passed: bool,
    pub metrics: BTreeMap<String, MetricValue>,
}

impl Report {
    /// Build a report from collected findings and metrics. The verdict is
    /// derived here and nowhere else: pass iff no finding blocks.
    pub fn from_findings(findings: Vec<Finding>, metrics: BTreeMap<String, MetricValue>) -> Self {
        let passed = !findings.iter().any(|f| f.severity.blocks());
        Self {
            findings,
            passed,
            metrics,
        }
    }

    pub fn critical_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Critical)
    }

    pub fn advisory_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity != Severity::Critical)
    }
}

/// Declared type of a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Markdown,
    Hypertext,
    Plain,
}

impl DocumentKind {
    /// Infer the document kind from a file extension. Unrecognized
    /// extensions are treated as plain text.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("md") | Some("markdown") => DocumentKind::Markdown,
            Some("html") | Some("htm") => DocumentKind::Hypertext,
            _ => DocumentKind::Plain,
        }
    }
}
