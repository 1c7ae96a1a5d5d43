//! HIPAA control catalog.

use crate::catalog::IAC_FILE_TYPES;
use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, Severity, Standard};

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        Control {
            id: "HIPAA-164-308".to_string(),
            family: ControlFamily::AuditAccountability,
            title: "Administrative Safeguards".to_string(),
            description: "Implement administrative safeguards for PHI".to_string(),
            standard: Standard::Hipaa,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "phi-environment-vars",
                    "HIPAA Administrative Safeguards: PHI must not be stored in environment variables",
                    r"(?i)PATIENT_SSN\s*=|MEDICAL_ID\s*=",
                    IAC_FILE_TYPES,
                    None,
                    "Use secure secret management for PHI data",
                )?,
                ControlCheck::new(
                    "phi-access-logging",
                    "HIPAA Administrative Safeguards: PHI access logging must be enabled",
                    r#"(?i)LOG_PHI_ACCESS\s*=\s*["']disabled["']"#,
                    IAC_FILE_TYPES,
                    None,
                    "Enable comprehensive PHI access logging",
                )?,
                ControlCheck::new(
                    "cloudwatch-logs-disabled",
                    "HIPAA Administrative Safeguards: CloudWatch logs must be enabled for audit trails",
                    r"(?i)enabled_cloudwatch_logs_exports\s*=\s*\[\s*\]",
                    IAC_FILE_TYPES,
                    None,
                    "Enable CloudWatch logs for database audit trails",
                )?,
            ],
        },
        Control {
            id: "HIPAA-164-310".to_string(),
            family: ControlFamily::AccessControl,
            title: "Physical Safeguards".to_string(),
            description: "Implement physical safeguards for PHI".to_string(),
            standard: Standard::Hipaa,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "public-phi-access",
                    "HIPAA Physical Safeguards: PHI databases must not be publicly accessible",
                    r"(?i)publicly_accessible\s*=\s*true",
                    IAC_FILE_TYPES,
                    None,
                    "Disable public access to PHI databases",
                )?,
                ControlCheck::new(
                    "public-access-blocks",
                    "HIPAA Physical Safeguards: Block public access to PHI storage",
                    r"(?i)block_public_acls\s*=\s*false",
                    IAC_FILE_TYPES,
                    None,
                    "Enable public access blocks for PHI storage buckets",
                )?,
            ],
        },
        Control {
            id: "HIPAA-164-312".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Technical Safeguards".to_string(),
            description: "Implement technical safeguards for PHI".to_string(),
            standard: Standard::Hipaa,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "storage-encryption",
                    "HIPAA Technical Safeguards: PHI storage must be encrypted",
                    r"(?i)storage_encrypted\s*=\s*false",
                    IAC_FILE_TYPES,
                    None,
                    "Enable encryption for all PHI storage",
                )?,
                ControlCheck::new(
                    "transit-encryption",
                    "HIPAA Technical Safeguards: PHI transmission must be encrypted",
                    r#"(?i)ENCRYPT_TRANSIT\s*=\s*["']false["']"#,
                    IAC_FILE_TYPES,
                    None,
                    "Enable encryption for PHI data in transit",
                )?,
                ControlCheck::new(
                    "backup-retention",
                    "HIPAA Technical Safeguards: PHI backup retention must be configured",
                    r"(?i)backup_retention_period\s*=\s*0",
                    IAC_FILE_TYPES,
                    None,
                    "Configure appropriate backup retention for PHI",
                )?,
            ],
        },
    ])
}
