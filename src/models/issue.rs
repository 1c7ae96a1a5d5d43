use serde::{Deserialize, Serialize};

use crate::models::Severity;

/// One detected compliance violation at a specific file and line.
///
/// Value object: created once per (check, file, line) match and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceIssue {
    /// Owning control id (e.g. "SC-8", "GDPR-ART-25", "SEC-secrets").
    pub control: String,
    /// Producing check id.
    pub check: String,
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column of the match start.
    pub column: usize,
    pub severity: Severity,
    pub message: String,
    pub remediation: String,
}

/// Per-file compliance scan outcome.
///
/// A scan is a total reevaluation: the previous result for the file is
/// discarded entirely, never merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub file: String,
    pub issues: Vec<ComplianceIssue>,
    /// True iff no issue has `Error` severity.
    pub compliant: bool,
}

impl ScanResult {
    pub fn new(file: String, issues: Vec<ComplianceIssue>) -> Self {
        let compliant = !issues.iter().any(|i| i.severity == Severity::Error);
        Self {
            file,
            issues,
            compliant,
        }
    }
}
