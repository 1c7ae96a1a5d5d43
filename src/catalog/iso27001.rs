//! ISO 27001 control catalog.

use crate::catalog::IAC_FILE_TYPES;
use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, Severity, Standard};

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        Control {
            id: "ISO-A-8-2".to_string(),
            family: ControlFamily::ConfigurationManagement,
            title: "Information Classification".to_string(),
            description: "Information should be classified according to its sensitivity"
                .to_string(),
            standard: Standard::Iso27001,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "unclassified-data",
                    "ISO-27001 A.8.2: Information must be properly classified according to sensitivity",
                    r#"(?i)DataClassification\s*=\s*"unclassified""#,
                    IAC_FILE_TYPES,
                    None,
                    "Implement proper data classification schemes (public, internal, confidential, restricted)",
                )?,
                ControlCheck::new(
                    "unknown-data-owner",
                    "ISO-27001 A.8.1: Data ownership must be clearly defined",
                    r#"(?i)Owner\s*=\s*"unknown""#,
                    IAC_FILE_TYPES,
                    None,
                    "Assign clear data ownership and responsibility",
                )?,
            ],
        },
        Control {
            id: "ISO-A-9-1".to_string(),
            family: ControlFamily::AccessControl,
            title: "Access Control Policy".to_string(),
            description: "Access control policy should be established and maintained"
                .to_string(),
            standard: Standard::Iso27001,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "overprivileged-policy",
                "ISO-27001 A.9.1: Access should follow principle of least privilege",
                r#"(?i)Action\s*=\s*"\*""#,
                IAC_FILE_TYPES,
                None,
                "Implement least privilege access controls instead of wildcard permissions",
            )?],
        },
        Control {
            id: "ISO-A-14-2".to_string(),
            family: ControlFamily::ConfigurationManagement,
            title: "Security in Development Lifecycle".to_string(),
            description: "Information security should be integrated into development lifecycle"
                .to_string(),
            standard: Standard::Iso27001,
            levels: vec![],
            severity: Severity::Warning,
            checks: vec![ControlCheck::new(
                "insecure-development",
                "ISO-27001 A.14.2: Security scanning should be integrated into development",
                r"(?i)security_scanning\s*=\s*false",
                IAC_FILE_TYPES,
                None,
                "Implement security scanning in development and deployment processes",
            )?],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso27001_controls_load() {
        let controls = controls().unwrap();
        assert_eq!(controls.len(), 3);
        assert!(controls.iter().all(|c| c.standard == Standard::Iso27001));
    }

    #[test]
    fn test_wildcard_action_pattern() {
        let controls = controls().unwrap();
        let a91 = controls.iter().find(|c| c.id == "ISO-A-9-1").unwrap();
        assert!(a91.checks[0].pattern.is_match(r#"Action = "*""#));
        assert!(!a91.checks[0].pattern.is_match(r#"Action = "s3:GetObject""#));
    }
}
