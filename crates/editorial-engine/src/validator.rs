//! Rule orchestration
//!
//! A validator holds a named, ordered set of rules. Rules run sequentially
//! against one shared document, never observe each other's output, and
//! never abort the run; the collected findings reduce to the verdict.

use std::collections::BTreeMap;

use shared_markup::Document;
use shared_types::{Finding, MetricValue, Report};

type RuleFn = Box<dyn Fn(&Document, &mut BTreeMap<String, MetricValue>) -> Vec<Finding>>;

struct NamedRule {
    name: &'static str,
    check: RuleFn,
}

/// An ordered battery of rules reduced to one report
pub struct Validator {
    rules: Vec<NamedRule>,
}

impl Validator {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule. Registration order fixes finding order.
    pub fn rule<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&Document, &mut BTreeMap<String, MetricValue>) -> Vec<Finding> + 'static,
    {
        self.rules.push(NamedRule {
            name,
            check: Box::new(check),
        });
        self
    }

    /// Run every rule against the document and reduce to a report.
    pub fn run(&self, doc: &Document) -> Report {
        let mut findings = Vec::new();
        let mut metrics = BTreeMap::new();

        for rule in &self.rules {
            let produced = (rule.check)(doc, &mut metrics);
            tracing::debug!(rule = rule.name, findings = produced.len(), "rule evaluated");
            findings.extend(produced);
        }

        Report::from_findings(findings, metrics)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
