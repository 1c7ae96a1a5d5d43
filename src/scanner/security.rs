//! Security vulnerability evaluation.
//!
//! Runs the vulnerability check database over file content line by line,
//! applies the context heuristics, unions in the dialect-specific scans and
//! computes the bounded risk score.

use crate::models::{SecurityScanResult, VulnerabilityCheck, VulnerabilityIssue};
use crate::scanner::{applicability, heuristics};

/// Scan file content for vulnerabilities. Pure function of the inputs.
pub fn scan_content(
    file: &str,
    content: &str,
    file_name: &str,
    extension: &str,
    checks: &[VulnerabilityCheck],
) -> SecurityScanResult {
    let lines: Vec<&str> = content.lines().collect();
    let mut vulnerabilities = Vec::new();

    for check in checks {
        if !applicability::check_applies(&check.file_types, file_name, extension) {
            continue;
        }

        for (idx, line) in lines.iter().enumerate() {
            let Some(found) = check.pattern.find(line) else {
                continue;
            };
            if !heuristics::vulnerability_match_valid(&check.vulnerability.id, line) {
                continue;
            }

            let vulnerability = &check.vulnerability;
            vulnerabilities.push(VulnerabilityIssue {
                vulnerability_id: vulnerability.id.clone(),
                category: vulnerability.category.clone(),
                file: file.to_string(),
                line: idx + 1,
                column: found.start(),
                severity: vulnerability.severity,
                message: format!("{}: {}", vulnerability.title, vulnerability.description),
                context: line.trim().to_string(),
                remediation: vulnerability.remediation.clone(),
                cwe: vulnerability.cwe.clone(),
                cve: vulnerability.cve.clone(),
            });
        }
    }

    // Dialect scans run alongside the generic pass and are unioned in.
    if extension == ".tf" || extension == ".hcl" {
        vulnerabilities.extend(heuristics::terraform_issues(file, content, checks));
    }
    if (extension == ".yaml" || extension == ".yml")
        && heuristics::is_kubernetes_manifest(content)
    {
        vulnerabilities.extend(heuristics::kubernetes_issues(file, content, checks));
    }

    SecurityScanResult::new(file.to_string(), vulnerabilities)
}
