//! Report rendering
//!
//! Text output groups blocking findings ahead of advisory ones; JSON
//! output is the report structure itself.

use std::fmt::Write as _;
use std::path::Path;

use shared_types::{MetricValue, Report};

pub fn render_text(report: &Report, file: &Path) -> String {
    let mut out = String::new();

    let verdict = if report.passed { "passed" } else { "failed" };
    let _ = writeln!(out, "Check {}: {}", verdict, file.display());

    let criticals: Vec<_> = report.critical_findings().collect();
    if !criticals.is_empty() {
        let _ = writeln!(out, "\nBlocking findings:");
        for finding in criticals {
            let _ = writeln!(out, "  {}  {}", finding.severity, finding.message);
        }
    }

    let advisories: Vec<_> = report.advisory_findings().collect();
    if !advisories.is_empty() {
        let _ = writeln!(out, "\nAdvisory findings:");
        for finding in advisories {
            let _ = writeln!(out, "  {}  {}", finding.severity, finding.message);
        }
    }

    if !report.metrics.is_empty() {
        let _ = writeln!(out, "\nMetrics:");
        for (name, value) in &report.metrics {
            match value {
                MetricValue::Number(n) => {
                    let _ = writeln!(out, "  {}: {}", name, n);
                }
                MetricValue::Text(t) => {
                    let _ = writeln!(out, "  {}: {}", name, t);
                }
            }
        }
    }

    if report.findings.is_empty() {
        let _ = writeln!(out, "\nNo findings.");
    } else if !report.passed {
        let _ = writeln!(out, "\nFix blocking findings before approval.");
    }

    out.trim_end().to_string()
}

pub fn render_json(report: &Report) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Finding;
    use std::collections::BTreeMap;

    fn sample_report() -> Report {
        let mut metrics = BTreeMap::new();
        metrics.insert(
            "keyword_density".to_string(),
            MetricValue::Number(2.5),
        );
        Report::from_findings(
            vec![
                Finding::warning("Keyword density too low: 0.50% (target: 1%-5%)"),
                Finding::critical("No H1 heading found (required for search structure)"),
            ],
            metrics,
        )
    }

    #[test]
    fn test_text_groups_blocking_first() {
        let text = render_text(&sample_report(), Path::new("page.md"));
        let blocking_at = text.find("Blocking findings").unwrap();
        let advisory_at = text.find("Advisory findings").unwrap();
        assert!(blocking_at < advisory_at);
        assert!(text.starts_with("Check failed: page.md"));
        assert!(text.contains("CRITICAL"));
        assert!(text.contains("keyword_density: 2.5"));
    }

    #[test]
    fn test_text_for_clean_report() {
        let report = Report::from_findings(Vec::new(), BTreeMap::new());
        let text = render_text(&report, Path::new("page.md"));
        assert_eq!(text, "Check passed: page.md\n\nNo findings.");
    }

    #[test]
    fn test_json_round_trips() {
        let report = sample_report();
        let json = render_json(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
