//! Context heuristics.
//!
//! Post-filters that suppress likely false positives from the generic
//! pattern pass, plus dialect-specific multi-line scans for violation shapes
//! a single-line regex cannot express. Dialect findings are unioned with the
//! generic findings, never deduplicated against them.

use crate::models::{VulnerabilityCheck, VulnerabilityIssue, VulnerabilitySeverity};

/// Placeholder tokens that mark a secret-like match as not a real secret.
/// Case-insensitive substring test against the whole line.
const PLACEHOLDER_TOKENS: &[&str] = &[
    "example",
    "sample",
    "test",
    "demo",
    "placeholder",
    "changeme",
    "your_password",
    "your_key",
    "your_token",
    "replace_me",
    "todo",
    "fixme",
    "xxx",
    "yyy",
    "zzz",
];

/// True when a secret-like line contains a known placeholder token.
pub fn is_placeholder_secret(line: &str) -> bool {
    let lower = line.to_lowercase();
    PLACEHOLDER_TOKENS.iter().any(|token| lower.contains(token))
}

/// Validity filter applied to a raw vulnerability pattern match.
pub fn vulnerability_match_valid(vulnerability_id: &str, line: &str) -> bool {
    let lower = line.to_lowercase();

    match vulnerability_id {
        "HARDCODED_SECRETS" => !is_placeholder_secret(line),
        // Mentions inside comments are not configuration.
        "WEAK_ENCRYPTION" => !lower.contains("//") && !lower.contains('#'),
        // Only actual grants carry an assignment-like token.
        "EXCESSIVE_PERMISSIONS" => lower.contains('=') || lower.contains(':'),
        "INSECURE_PROTOCOLS" => {
            !lower.contains("//") && !lower.contains('#') && !lower.contains("example")
        }
        _ => true,
    }
}

/// Whether YAML content is a Kubernetes manifest.
pub fn is_kubernetes_manifest(content: &str) -> bool {
    content.contains("apiVersion:")
        && (content.contains("kind:") || content.contains("metadata:"))
}

const PUBLIC_ACCESS_BLOCK_SETTINGS: &[&str] = &[
    "block_public_acls",
    "block_public_policy",
    "ignore_public_acls",
    "restrict_public_buckets",
];

/// Terraform dialect scan: a declared public-access-block resource with any
/// of its four boolean settings turned off yields a high-severity finding
/// per offending line.
pub fn terraform_issues(
    file: &str,
    content: &str,
    checks: &[VulnerabilityCheck],
) -> Vec<VulnerabilityIssue> {
    let mut issues = Vec::new();

    if !content.contains("aws_s3_bucket_public_access_block") {
        return issues;
    }
    let Some(vulnerability) = find_vulnerability(checks, "excessive_permissions") else {
        return issues;
    };

    for (idx, line) in content.lines().enumerate() {
        if line.contains("false")
            && PUBLIC_ACCESS_BLOCK_SETTINGS
                .iter()
                .any(|setting| line.contains(setting))
        {
            issues.push(VulnerabilityIssue {
                vulnerability_id: vulnerability.id.clone(),
                category: vulnerability.category.clone(),
                file: file.to_string(),
                line: idx + 1,
                column: 0,
                severity: VulnerabilitySeverity::High,
                message: "S3 bucket allows public access".to_string(),
                context: line.trim().to_string(),
                remediation: "Set all public access block settings to true".to_string(),
                cwe: vulnerability.cwe.clone(),
                cve: None,
            });
        }
    }

    issues
}

/// Kubernetes dialect scan: privileged containers and root users. Callers
/// must gate on `is_kubernetes_manifest` first; plain YAML with the same
/// tokens is not flagged.
pub fn kubernetes_issues(
    file: &str,
    content: &str,
    checks: &[VulnerabilityCheck],
) -> Vec<VulnerabilityIssue> {
    let mut issues = Vec::new();

    let Some(vulnerability) = find_vulnerability(checks, "excessive_permissions") else {
        return issues;
    };

    for (idx, line) in content.lines().enumerate() {
        if line.contains("privileged: true") {
            issues.push(VulnerabilityIssue {
                vulnerability_id: vulnerability.id.clone(),
                category: vulnerability.category.clone(),
                file: file.to_string(),
                line: idx + 1,
                column: 0,
                severity: VulnerabilitySeverity::Critical,
                message: "Container running in privileged mode".to_string(),
                context: line.trim().to_string(),
                remediation: "Remove privileged access or use specific capabilities instead"
                    .to_string(),
                cwe: vulnerability.cwe.clone(),
                cve: None,
            });
        }

        if line.contains("runAsUser: 0") {
            issues.push(VulnerabilityIssue {
                vulnerability_id: vulnerability.id.clone(),
                category: vulnerability.category.clone(),
                file: file.to_string(),
                line: idx + 1,
                column: 0,
                severity: VulnerabilitySeverity::High,
                message: "Container running as root user".to_string(),
                context: line.trim().to_string(),
                remediation: "Use a non-root user ID".to_string(),
                cwe: vulnerability.cwe.clone(),
                cve: None,
            });
        }
    }

    issues
}

fn find_vulnerability<'a>(
    checks: &'a [VulnerabilityCheck],
    check_id: &str,
) -> Option<&'a crate::models::Vulnerability> {
    checks
        .iter()
        .find(|c| c.id == check_id)
        .map(|c| &c.vulnerability)
}
