//! DPDP (India Digital Personal Data Protection Act) control catalog.

use crate::catalog::IAC_FILE_TYPES;
use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, Severity, Standard};

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        Control {
            id: "DPDP-SEC-8".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Data Security and Cross-border Transfer".to_string(),
            description: "Implement appropriate security safeguards for personal data and \
                          regulate cross-border transfers"
                .to_string(),
            standard: Standard::Dpdp,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "cross-border-transfer",
                    "DPDP Act: Cross-border data transfer requires proper safeguards and consent",
                    r#"(?i)bucket\s*=\s*"indian-users-backup-us""#,
                    IAC_FILE_TYPES,
                    None,
                    "Implement proper data localization or obtain consent for cross-border transfers",
                )?,
                ControlCheck::new(
                    "singapore-backup-violation",
                    "DPDP Act: International data storage requires compliance with DPDP regulations",
                    r"(?i)arn:aws:s3:::backup-singapore",
                    IAC_FILE_TYPES,
                    None,
                    "Ensure international data storage complies with DPDP Act requirements",
                )?,
            ],
        },
        Control {
            id: "DPDP-SEC-11".to_string(),
            family: ControlFamily::AccessControl,
            title: "Consent Management".to_string(),
            description: "Implement proper consent mechanisms for personal data processing"
                .to_string(),
            standard: Standard::Dpdp,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "consent-disabled",
                "DPDP Act: Consent management must be implemented for personal data processing",
                r#"(?i)CONSENT_REQUIRED\s*=\s*"false""#,
                IAC_FILE_TYPES,
                None,
                "Implement proper consent collection and management mechanisms",
            )?],
        },
        Control {
            id: "DPDP-SEC-3".to_string(),
            family: ControlFamily::ConfigurationManagement,
            title: "Data Fiduciary Obligations".to_string(),
            description: "Data fiduciaries must comply with DPDP Act obligations".to_string(),
            standard: Standard::Dpdp,
            levels: vec![],
            severity: Severity::Warning,
            checks: vec![ControlCheck::new(
                "data-fiduciary-registration",
                "DPDP Act: Data fiduciaries processing Indian user data must comply with \
                 registration and obligations",
                r#"(?i)function_name\s*=\s*"process-indian-user-data""#,
                IAC_FILE_TYPES,
                None,
                "Ensure proper data fiduciary registration and compliance with DPDP obligations",
            )?],
        },
    ])
}
