//! Report aggregation.
//!
//! Pure, total construction of the workspace report from already-computed
//! per-file results: compliance issues first, vulnerability findings mapped
//! into the same shape after them, with severity buckets, distinct-control
//! coverage and the static total-controls denominator.

use crate::catalog::Catalog;
use crate::config::ScanConfig;
use crate::models::{
    ComplianceIssue, Report, ReportSummary, Severity, VulnerabilityIssue,
};

/// Prefix joined with a vulnerability's category to form its synthesized
/// control id, keeping per-category coverage distinct from native controls.
const SECURITY_CONTROL_PREFIX: &str = "SEC-";

/// Map a vulnerability finding into the unified issue shape.
pub fn vulnerability_as_issue(vulnerability: &VulnerabilityIssue) -> ComplianceIssue {
    ComplianceIssue {
        control: format!("{}{}", SECURITY_CONTROL_PREFIX, vulnerability.category),
        check: vulnerability.vulnerability_id.clone(),
        file: vulnerability.file.clone(),
        line: vulnerability.line,
        column: vulnerability.column,
        severity: vulnerability.severity.as_issue_severity(),
        message: format!("Security Vulnerability: {}", vulnerability.message),
        remediation: vulnerability.remediation.clone(),
    }
}

/// Build a workspace report. The summary buckets are computed from the
/// merged issue list itself, so `errors + warnings + info == issues.len()`
/// holds by construction.
pub fn build_report(
    catalog: &Catalog,
    config: &ScanConfig,
    total_files: usize,
    scanned_files: usize,
    compliance_issues: Vec<ComplianceIssue>,
    vulnerabilities: &[VulnerabilityIssue],
) -> Report {
    let mut issues = compliance_issues;
    issues.extend(vulnerabilities.iter().map(vulnerability_as_issue));

    let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
    let warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();
    let info = issues.iter().filter(|i| i.severity == Severity::Info).count();

    let controls_covered = issues
        .iter()
        .map(|i| i.control.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len();

    let total_controls = catalog.total_controls(&config.standards, config.level);

    Report {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: config.level,
        standards: config.standards.clone(),
        total_files,
        scanned_files,
        issues,
        summary: ReportSummary {
            errors,
            warnings,
            info,
            controls_covered,
            total_controls,
        },
    }
}
