use serde::{Deserialize, Serialize};

use crate::models::{ComplianceIssue, ImpactLevel, Severity, Standard};

/// Severity totals and coverage accounting for a report.
///
/// Invariant: `errors + warnings + info == issues.len()` on the owning
/// report, after vulnerability findings have been severity-mapped into the
/// issue list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
    /// Distinct control ids appearing in the issue list.
    pub controls_covered: usize,
    /// Static size of the control catalog in scope for the selected
    /// standards and level, independent of what actually triggered.
    pub total_controls: usize,
}

/// Workspace-level aggregate, rebuilt from scratch on every scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// RFC 3339 timestamp of report construction.
    pub timestamp: String,
    pub level: ImpactLevel,
    pub standards: Vec<Standard>,
    pub total_files: usize,
    pub scanned_files: usize,
    /// Flattened current findings: compliance issues first, then
    /// severity-mapped vulnerability findings.
    pub issues: Vec<ComplianceIssue>,
    pub summary: ReportSummary,
}

impl Report {
    /// Recount the severity partition of `issues`. Used by tests to verify
    /// the summary invariant; report construction computes the summary from
    /// the same partition so the two always agree.
    pub fn severity_partition(&self) -> (usize, usize, usize) {
        let errors = self
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        let warnings = self
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();
        let info = self
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Info)
            .count();
        (errors, warnings, info)
    }
}
