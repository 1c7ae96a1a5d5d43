//! PCI-DSS control catalog.

use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, Severity, Standard};

// PCI templates are predominantly CloudFormation JSON, so the original check
// order lists .json first.
const PCI_FILE_TYPES: &[&str] = &[".json", ".yaml", ".yml", ".tf"];

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        Control {
            id: "PCI-REQ-1".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Install and maintain firewall configuration".to_string(),
            description: "Protect cardholder data with firewall configuration".to_string(),
            standard: Standard::PciDss,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "overly-permissive-access",
                    "PCI-DSS Requirement 1: Overly permissive network access detected",
                    r#""CidrIp":\s*"0\.0\.0\.0/0""#,
                    PCI_FILE_TYPES,
                    None,
                    "Restrict network access to necessary IP ranges only",
                )?,
                ControlCheck::new(
                    "http-access-allowed",
                    "PCI-DSS Requirement 1: HTTP access should not be globally accessible",
                    r#""FromPort":\s*80[\s\S]*?"CidrIp":\s*"0\.0\.0\.0/0""#,
                    PCI_FILE_TYPES,
                    None,
                    "Use HTTPS only and restrict access to necessary networks",
                )?,
            ],
        },
        Control {
            id: "PCI-REQ-3".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Protect stored cardholder data".to_string(),
            description: "Encrypt stored cardholder data".to_string(),
            standard: Standard::PciDss,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "cardholder-data-environment",
                    "PCI-DSS Requirement 3: Cardholder data must not be stored in environment variables",
                    r#""CREDIT_CARD_KEY":\s*"[\d-]+""#,
                    PCI_FILE_TYPES,
                    None,
                    "Use secure vault or tokenization for cardholder data",
                )?,
                ControlCheck::new(
                    "storage-encryption-disabled",
                    "PCI-DSS Requirement 3: Storage encryption must be enabled for cardholder data",
                    r#""StorageEncrypted":\s*false"#,
                    PCI_FILE_TYPES,
                    None,
                    "Enable storage encryption for all cardholder data systems",
                )?,
                ControlCheck::new(
                    "pan-masking-disabled",
                    "PCI-DSS Requirement 3: PAN masking must be enabled",
                    r#""MASK_PAN":\s*"false""#,
                    PCI_FILE_TYPES,
                    None,
                    "Enable PAN masking to protect cardholder data",
                )?,
            ],
        },
        Control {
            id: "PCI-REQ-4".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Encrypt transmission of cardholder data".to_string(),
            description: "Encrypt cardholder data during transmission".to_string(),
            standard: Standard::PciDss,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "data-encryption-disabled",
                "PCI-DSS Requirement 4: Data encryption must be enabled for transmission",
                r#""ENCRYPT_DATA":\s*"false""#,
                PCI_FILE_TYPES,
                None,
                "Enable encryption for all cardholder data transmissions",
            )?],
        },
        Control {
            id: "PCI-REQ-10".to_string(),
            family: ControlFamily::AuditAccountability,
            title: "Track and monitor access to network and cardholder data".to_string(),
            description: "Implement logging and monitoring".to_string(),
            standard: Standard::PciDss,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "backup-retention-disabled",
                "PCI-DSS Requirement 10: Backup retention must be configured for audit trails",
                r#""BackupRetentionPeriod":\s*0"#,
                PCI_FILE_TYPES,
                None,
                "Configure appropriate backup retention for audit logs",
            )?],
        },
    ])
}
