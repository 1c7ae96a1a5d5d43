//! Security vulnerability check database.
//!
//! Pattern-based checks independent of any compliance standard. Matches are
//! post-filtered by the context heuristics before they become findings (see
//! `scanner::heuristics`).

use crate::error::Result;
use crate::models::{Vulnerability, VulnerabilityCheck, VulnerabilitySeverity};

const CONFIG_AND_SOURCE: &[&str] = &[
    ".tf", ".yaml", ".yml", ".json", ".py", ".js", ".ts", ".sh", ".env", ".conf",
];
const SOURCE_FILES: &[&str] = &[".py", ".js", ".ts", ".java", ".go", ".rs"];

fn vulnerability(
    id: &str,
    category: &str,
    title: &str,
    description: &str,
    severity: VulnerabilitySeverity,
    remediation: &str,
    cwe: Option<&str>,
) -> Vulnerability {
    Vulnerability {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        severity,
        remediation: remediation.to_string(),
        cwe: cwe.map(|c| c.to_string()),
        cve: None,
    }
}

pub(super) fn checks() -> Result<Vec<VulnerabilityCheck>> {
    Ok(vec![
        VulnerabilityCheck::new(
            "hardcoded_secrets",
            vulnerability(
                "HARDCODED_SECRETS",
                "secrets",
                "Hardcoded Secrets",
                "Credentials or API keys embedded directly in source or configuration",
                VulnerabilitySeverity::Critical,
                "Move secrets to environment variables or a secret management service",
                Some("CWE-798"),
            ),
            r#"(?i)(password|passwd|pwd|secret|api[_-]?key|access[_-]?key|auth[_-]?token|private[_-]?key)\s*[:=]\s*["'][^"']{4,}["']"#,
            CONFIG_AND_SOURCE,
        )?,
        VulnerabilityCheck::new(
            "weak_encryption",
            vulnerability(
                "WEAK_ENCRYPTION",
                "cryptography",
                "Weak Encryption Algorithm",
                "Use of a cryptographic algorithm with known practical attacks",
                VulnerabilitySeverity::High,
                "Replace MD5/SHA1/DES/RC4 with SHA-256 or stronger and AES-GCM",
                Some("CWE-327"),
            ),
            r"(?i)\b(md5|sha1|des|rc4|3des)\b",
            CONFIG_AND_SOURCE,
        )?,
        VulnerabilityCheck::new(
            "insecure_protocols",
            vulnerability(
                "INSECURE_PROTOCOLS",
                "network",
                "Insecure Protocol",
                "Use of an unencrypted network protocol",
                VulnerabilitySeverity::High,
                "Use SSH/SFTP/HTTPS instead of telnet, FTP or rlogin",
                Some("CWE-319"),
            ),
            r"(?i)\b(telnet|ftp|rsh|rlogin)\b",
            CONFIG_AND_SOURCE,
        )?,
        VulnerabilityCheck::new(
            "excessive_permissions",
            vulnerability(
                "EXCESSIVE_PERMISSIONS",
                "permissions",
                "Excessive Permissions",
                "Permission grant wider than the principle of least privilege allows",
                VulnerabilitySeverity::High,
                "Scope permissions to the specific principals and resources required",
                Some("CWE-732"),
            ),
            r#"(?i)(0\.0\.0\.0/0|chmod\s+777|\*\s*:\s*\*|"?action"?\s*[:=]\s*"\*")"#,
            CONFIG_AND_SOURCE,
        )?,
        VulnerabilityCheck::new(
            "sql_injection",
            vulnerability(
                "SQL_INJECTION",
                "injection",
                "SQL Injection Risk",
                "SQL statement built by string concatenation or interpolation",
                VulnerabilitySeverity::High,
                "Use parameterized queries or an ORM instead of string building",
                Some("CWE-89"),
            ),
            r#"(?i)["'](select|insert|update|delete)\b[^"']*["']\s*(\+|%|\|\|)"#,
            SOURCE_FILES,
        )?,
        VulnerabilityCheck::new(
            "debug_enabled",
            vulnerability(
                "DEBUG_ENABLED",
                "configuration",
                "Debug Mode Enabled",
                "Debug flag enabled in configuration, exposing internals in production",
                VulnerabilitySeverity::Medium,
                "Disable debug mode outside development environments",
                Some("CWE-489"),
            ),
            r#"(?i)debug\s*[:=]\s*["']?true["']?"#,
            CONFIG_AND_SOURCE,
        )?,
        VulnerabilityCheck::new(
            "tls_verification_disabled",
            vulnerability(
                "TLS_VERIFICATION_DISABLED",
                "network",
                "TLS Verification Disabled",
                "Certificate verification turned off for TLS connections",
                VulnerabilitySeverity::High,
                "Enable certificate verification; pin or trust a proper CA bundle",
                Some("CWE-295"),
            ),
            r"(?i)(verify\s*=\s*false|insecure[_-]?skip[_-]?verify\s*[:=]\s*true|rejectunauthorized\s*:\s*false)",
            CONFIG_AND_SOURCE,
        )?,
        VulnerabilityCheck::new(
            "weak_tls_version",
            vulnerability(
                "WEAK_TLS_VERSION",
                "cryptography",
                "Weak TLS Version",
                "TLS version below 1.2 or legacy SSL configured",
                VulnerabilitySeverity::Medium,
                "Require TLS 1.2 or newer",
                Some("CWE-326"),
            ),
            r"(?i)(tlsv?1\.0|tlsv?1\.1|sslv2|sslv3)",
            CONFIG_AND_SOURCE,
        )?,
    ])
}
