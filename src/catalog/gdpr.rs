//! GDPR control catalog.

use crate::catalog::IAC_FILE_TYPES;
use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, Severity, Standard};

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        Control {
            id: "GDPR-ART-25".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Data Protection by Design and by Default".to_string(),
            description: "Implement appropriate technical and organisational measures"
                .to_string(),
            standard: Standard::Gdpr,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "data-encryption-check",
                    "GDPR Article 25: Data encryption must be enabled by default",
                    r#"(?i)(name:\s*DATA_ENCRYPTION[\s\S]*?value:\s*["']false["']|DATA_ENCRYPTION\s*=\s*["']false["'])"#,
                    IAC_FILE_TYPES,
                    None,
                    "Enable data encryption to comply with GDPR data protection by design",
                )?,
                ControlCheck::new(
                    "public-access-check",
                    "GDPR Article 25: Public access should be disabled by default for personal data",
                    r#"(?i)public_access\s*[=:]\s*["']?true["']?"#,
                    IAC_FILE_TYPES,
                    None,
                    "Disable public access and implement proper access controls",
                )?,
                ControlCheck::new(
                    "anonymization-check",
                    "GDPR Article 25: Data anonymization should be enabled for personal data",
                    r#"(?i)(name:\s*ANONYMIZE_DATA[\s\S]*?value:\s*["']false["']|ANONYMIZE_DATA\s*=\s*["']false["'])"#,
                    IAC_FILE_TYPES,
                    None,
                    "Enable data anonymization to protect personal data",
                )?,
            ],
        },
        Control {
            id: "GDPR-ART-32".to_string(),
            family: ControlFamily::AuditAccountability,
            title: "Security of Processing".to_string(),
            description: "Implement appropriate technical and organisational measures to \
                          ensure security"
                .to_string(),
            standard: Standard::Gdpr,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "audit-logging-check",
                    "GDPR Article 32: Audit logging must be enabled for data processing activities",
                    r#"(?i)(name:\s*AUDIT_LOGGING[\s\S]*?value:\s*["']disabled["']|AUDIT_LOGGING\s*=\s*["']disabled["'])"#,
                    IAC_FILE_TYPES,
                    None,
                    "Enable comprehensive audit logging for GDPR compliance",
                )?,
                ControlCheck::new(
                    "data-transfer-check",
                    "GDPR Article 44: Cross-border data transfer requires adequate safeguards",
                    r#"(?i)(data_processing_location:\s*["']us-east-1["']|processing_location\s*=\s*["']us-east-1["'])"#,
                    IAC_FILE_TYPES,
                    None,
                    "Implement adequate safeguards for international data transfers",
                )?,
                ControlCheck::new(
                    "backup-location-check",
                    "GDPR Article 44: International backup storage requires GDPR compliance",
                    r#"(?i)(backup_location:\s*["']asia-south-1["']|backup_location\s*=\s*["']asia-south-1["'])"#,
                    IAC_FILE_TYPES,
                    None,
                    "Ensure backup locations comply with GDPR requirements",
                )?,
            ],
        },
        Control {
            id: "GDPR-ART-17".to_string(),
            family: ControlFamily::AccessControl,
            title: "Right to Erasure (Right to be Forgotten)".to_string(),
            description: "Individuals have the right to have their personal data erased"
                .to_string(),
            standard: Standard::Gdpr,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "data-deletion-check",
                    "GDPR Article 17: Data deletion policy must support right to erasure",
                    r#"(?i)(data_deletion_policy:\s*["']never["']|deletion_policy\s*=\s*["']never["'])"#,
                    IAC_FILE_TYPES,
                    None,
                    "Implement data deletion mechanisms to support GDPR right to erasure",
                )?,
                ControlCheck::new(
                    "access-request-check",
                    "GDPR Article 15: Data access request handling must be implemented",
                    r#"(?i)(access_request_handler:\s*["']disabled["']|access_request\s*=\s*["']disabled["'])"#,
                    IAC_FILE_TYPES,
                    None,
                    "Implement data access request handling for GDPR compliance",
                )?,
            ],
        },
        Control {
            id: "GDPR-ART-6".to_string(),
            family: ControlFamily::AccessControl,
            title: "Lawfulness of Processing".to_string(),
            description: "Processing must be based on a lawful basis".to_string(),
            standard: Standard::Gdpr,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "personal-data-consent-check",
                    "GDPR Article 6: Personal data processing requires lawful basis and consent",
                    r"(?i)user_emails:\s*\|[\s\S]*?@[\w.-]+",
                    IAC_FILE_TYPES,
                    None,
                    "Implement consent mechanisms for personal data collection",
                )?,
                ControlCheck::new(
                    "customer-profile-check",
                    "GDPR Article 6: Customer profile data requires explicit consent",
                    r#"(?i)customer_profiles:[\s\S]*"email":"#,
                    IAC_FILE_TYPES,
                    None,
                    "Implement explicit consent for customer profile data processing",
                )?,
            ],
        },
    ])
}
