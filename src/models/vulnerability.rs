use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::models::VulnerabilitySeverity;

/// Description of a known vulnerability class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vulnerability {
    /// Stable identifier (e.g. "HARDCODED_SECRETS").
    pub id: String,
    /// Category used for coverage accounting ("secrets", "network", ...).
    pub category: String,
    pub title: String,
    pub description: String,
    pub severity: VulnerabilitySeverity,
    pub remediation: String,
    pub cwe: Option<String>,
    pub cve: Option<String>,
}

/// A detection pattern for one vulnerability class.
#[derive(Debug, Clone)]
pub struct VulnerabilityCheck {
    pub id: String,
    pub vulnerability: Vulnerability,
    pub pattern: Regex,
    /// Dotted extensions this check applies to; empty means all files.
    pub file_types: Vec<String>,
}

impl VulnerabilityCheck {
    pub fn new(
        id: &str,
        vulnerability: Vulnerability,
        pattern: &str,
        file_types: &[&str],
    ) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ScanError::Pattern {
            check_id: id.to_string(),
            source,
        })?;

        Ok(Self {
            id: id.to_string(),
            vulnerability,
            pattern,
            file_types: file_types.iter().map(|t| t.to_string()).collect(),
        })
    }
}

/// One detected vulnerability instance at a specific file and line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VulnerabilityIssue {
    /// Vulnerability class id.
    pub vulnerability_id: String,
    pub category: String,
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column of the match start.
    pub column: usize,
    pub severity: VulnerabilitySeverity,
    pub message: String,
    /// The matched line, trimmed.
    pub context: String,
    pub remediation: String,
    pub cwe: Option<String>,
    pub cve: Option<String>,
}

/// Per-file security scan outcome with a bounded risk score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecurityScanResult {
    pub file: String,
    pub vulnerabilities: Vec<VulnerabilityIssue>,
    /// Weighted severity sum clamped to [0, 100].
    pub risk_score: u32,
}

impl SecurityScanResult {
    pub fn new(file: String, vulnerabilities: Vec<VulnerabilityIssue>) -> Self {
        let risk_score = risk_score(&vulnerabilities);
        Self {
            file,
            vulnerabilities,
            risk_score,
        }
    }
}

/// Weighted sum of vulnerability severities, clamped at 100.
pub fn risk_score(vulnerabilities: &[VulnerabilityIssue]) -> u32 {
    let score: u32 = vulnerabilities.iter().map(|v| v.severity.risk_weight()).sum();
    score.min(100)
}
