pub mod types;

pub use types::{DocumentKind, Finding, MetricValue, Report, Severity};
