//! NIST Cybersecurity Framework control catalog.

use crate::catalog::IAC_FILE_TYPES;
use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, Severity, Standard};

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        Control {
            id: "NIST-PR-AC-1".to_string(),
            family: ControlFamily::AccessControl,
            title: "Identity and Access Management".to_string(),
            description: "Identities and credentials are issued, managed, verified, revoked, \
                          and audited"
                .to_string(),
            standard: Standard::NistCsf,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "overprivileged-access",
                    "NIST-CSF PR.AC-1: Overprivileged access detected - violates least privilege principle",
                    r#"(?i)policy_arn\s*=\s*"arn:aws:iam::aws:policy/AdministratorAccess""#,
                    IAC_FILE_TYPES,
                    None,
                    "Implement principle of least privilege for user access",
                )?,
                ControlCheck::new(
                    "global-network-access",
                    "NIST-CSF PR.AC-4: Network access should be restricted to authorized users and devices",
                    r#"(?i)cidr_blocks\s*=\s*\[\s*"0\.0\.0\.0/0"\s*\]"#,
                    IAC_FILE_TYPES,
                    None,
                    "Restrict network access to specific IP ranges",
                )?,
            ],
        },
        Control {
            id: "NIST-PR-DS-2".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Data-in-transit Protection".to_string(),
            description: "Data-in-transit is protected".to_string(),
            standard: Standard::NistCsf,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "unencrypted-protocols",
                "NIST-CSF PR.DS-2: Unencrypted protocols (Telnet) should not be used",
                r"(?i)from_port\s*=\s*23.*# Telnet",
                IAC_FILE_TYPES,
                None,
                "Use secure protocols like SSH instead of Telnet",
            )?],
        },
        Control {
            id: "NIST-PR-DS-1".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Data-at-rest Protection".to_string(),
            description: "Data-at-rest is protected".to_string(),
            standard: Standard::NistCsf,
            levels: vec![],
            severity: Severity::Warning,
            checks: vec![ControlCheck::new(
                "financial-data-protection",
                "NIST-CSF PR.DS-1: Financial data requires enhanced protection and versioning",
                r#"(?i)bucket\s*=\s*"corporate-financial-data""#,
                IAC_FILE_TYPES,
                None,
                "Implement versioning and backup strategies for sensitive financial data",
            )?],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nist_csf_controls_load() {
        let controls = controls().unwrap();
        assert_eq!(controls.len(), 3);
        assert!(controls.iter().all(|c| c.standard == Standard::NistCsf));
    }

    #[test]
    fn test_global_cidr_pattern() {
        let controls = controls().unwrap();
        let prac1 = controls.iter().find(|c| c.id == "NIST-PR-AC-1").unwrap();
        let check = prac1
            .checks
            .iter()
            .find(|c| c.id == "global-network-access")
            .unwrap();
        assert!(check.pattern.is_match(r#"cidr_blocks = ["0.0.0.0/0"]"#));
    }
}
