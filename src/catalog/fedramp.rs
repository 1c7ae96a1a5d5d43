//! FedRAMP control catalog.
//!
//! Broad topic-matching checks over infrastructure definitions; the
//! evaluator's indicator table decides whether a matched line actually
//! violates the control (see `scanner::evaluator`).

use crate::catalog::IAC_FILE_TYPES;
use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, ImpactLevel, Severity, Standard};

const ALL_LEVELS: [ImpactLevel; 3] = [ImpactLevel::Low, ImpactLevel::Moderate, ImpactLevel::High];
const MODERATE_AND_HIGH: [ImpactLevel; 2] = [ImpactLevel::Moderate, ImpactLevel::High];

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        // Access Control (AC)
        Control {
            id: "AC-2".to_string(),
            family: ControlFamily::AccessControl,
            title: "Account Management".to_string(),
            description: "Organizations must manage information system accounts including \
                          establishing, activating, modifying, reviewing, disabling, and \
                          removing accounts."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Warning,
            checks: vec![ControlCheck::new(
                "AC-2-1",
                "Check for proper user management configurations",
                r"(?i)user|account|role|permission",
                IAC_FILE_TYPES,
                Some(Severity::Warning),
                "Implement proper user account management with role-based access control",
            )?],
        },
        Control {
            id: "AC-3".to_string(),
            family: ControlFamily::AccessControl,
            title: "Access Enforcement".to_string(),
            description: "The information system enforces approved authorizations for logical \
                          access."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "AC-3-1",
                "Verify access control policies are defined",
                r"(?i)policy|allow|deny|grant|revoke|ingress|egress|cidr",
                IAC_FILE_TYPES,
                Some(Severity::Error),
                "Define explicit access control policies and enforcement mechanisms",
            )?],
        },
        // Audit and Accountability (AU)
        Control {
            id: "AU-2".to_string(),
            family: ControlFamily::AuditAccountability,
            title: "Auditable Events".to_string(),
            description: "Organizations must determine what events are auditable and specify \
                          the frequency of auditing."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Warning,
            checks: vec![ControlCheck::new(
                "AU-2-1",
                "Check for logging and monitoring configurations",
                r"(?i)log|audit|monitor|event",
                IAC_FILE_TYPES,
                Some(Severity::Warning),
                "Configure comprehensive logging and monitoring for auditable events",
            )?],
        },
        Control {
            id: "AU-4".to_string(),
            family: ControlFamily::AuditAccountability,
            title: "Audit Storage Capacity".to_string(),
            description: "Organizations must allocate audit storage capacity and configure \
                          auditing to reduce likelihood of capacity being exceeded."
                .to_string(),
            standard: Standard::FedRamp,
            levels: MODERATE_AND_HIGH.to_vec(),
            severity: Severity::Warning,
            checks: vec![ControlCheck::new(
                "AU-4-1",
                "Verify audit storage capacity configuration",
                r"(?i)storage|capacity|retention|size",
                IAC_FILE_TYPES,
                Some(Severity::Warning),
                "Configure adequate audit storage capacity with proper retention policies",
            )?],
        },
        // Configuration Management (CM)
        Control {
            id: "CM-2".to_string(),
            family: ControlFamily::ConfigurationManagement,
            title: "Baseline Configuration".to_string(),
            description: "Organizations must develop, document, and maintain a current \
                          baseline configuration."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Info,
            checks: vec![ControlCheck::new(
                "CM-2-1",
                "Check for configuration management practices",
                r"(?i)version|baseline|configuration|template",
                IAC_FILE_TYPES,
                Some(Severity::Info),
                "Implement configuration management with version control and baseline \
                 documentation",
            )?],
        },
        Control {
            id: "CM-6".to_string(),
            family: ControlFamily::ConfigurationManagement,
            title: "Configuration Settings".to_string(),
            description: "Organizations must establish and document configuration settings \
                          that reflect the most restrictive mode."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "CM-6-1",
                "Verify secure configuration settings",
                r"(?i)encrypt|ssl|tls|secure|setting",
                IAC_FILE_TYPES,
                Some(Severity::Error),
                "Apply secure configuration settings with encryption and security best \
                 practices",
            )?],
        },
        // Identification and Authentication (IA)
        Control {
            id: "IA-2".to_string(),
            family: ControlFamily::IdentificationAuthentication,
            title: "Identification and Authentication".to_string(),
            description: "The information system uniquely identifies and authenticates \
                          organizational users."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "IA-2-1",
                "Check for authentication mechanisms",
                r"(?i)auth|authentication|identity|mfa|2fa",
                IAC_FILE_TYPES,
                Some(Severity::Error),
                "Implement strong authentication mechanisms including multi-factor \
                 authentication",
            )?],
        },
        // System and Communications Protection (SC)
        Control {
            id: "SC-7".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Boundary Protection".to_string(),
            description: "The information system monitors and controls communications at \
                          external boundaries."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "SC-7-1",
                "Verify network boundary protection",
                r"(?i)firewall|security_group|network_acl|boundary",
                IAC_FILE_TYPES,
                Some(Severity::Error),
                "Configure proper network boundary protection with firewalls and security \
                 groups",
            )?],
        },
        Control {
            id: "SC-8".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Transmission Confidentiality and Integrity".to_string(),
            description: "The information system protects the confidentiality and integrity \
                          of transmitted information."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "SC-8-1",
                "Check for encryption in transit",
                r"(?i)https|http|tls|ssl|encryption|certificate",
                IAC_FILE_TYPES,
                Some(Severity::Error),
                "Implement encryption for data in transit using TLS/SSL protocols",
            )?],
        },
        Control {
            id: "SC-28".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Protection of Information at Rest".to_string(),
            description: "The information system protects the confidentiality and integrity \
                          of information at rest."
                .to_string(),
            standard: Standard::FedRamp,
            levels: MODERATE_AND_HIGH.to_vec(),
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "SC-28-1",
                "Check for encryption at rest",
                r"(?i)encrypt|kms|key.*management",
                IAC_FILE_TYPES,
                Some(Severity::Error),
                "Implement encryption for data at rest using appropriate key management",
            )?],
        },
        // System and Information Integrity (SI)
        Control {
            id: "SI-4".to_string(),
            family: ControlFamily::SystemIntegrity,
            title: "Information System Monitoring".to_string(),
            description: "The organization monitors the information system to detect attacks \
                          and indicators of potential attacks."
                .to_string(),
            standard: Standard::FedRamp,
            levels: ALL_LEVELS.to_vec(),
            severity: Severity::Warning,
            checks: vec![ControlCheck::new(
                "SI-4-1",
                "Verify monitoring and alerting configurations",
                r"(?i)monitor|alert|intrusion|detection",
                IAC_FILE_TYPES,
                Some(Severity::Warning),
                "Configure comprehensive monitoring and intrusion detection systems",
            )?],
        },
    ])
}
