//! SOC 2 control catalog.

use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, Severity, Standard};

// SOC 2 checks were written against Kubernetes manifests first, so the
// original ordering lists YAML ahead of Terraform.
const SOC2_FILE_TYPES: &[&str] = &[".yaml", ".yml", ".json", ".tf"];

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        Control {
            id: "SOC2-CC6.1".to_string(),
            family: ControlFamily::AccessControl,
            title: "Logical and Physical Access Controls - Security".to_string(),
            description: "Restrict logical and physical access to confidential information"
                .to_string(),
            standard: Standard::Soc2,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "hardcoded-credentials",
                    "SOC-2 Security: Hardcoded credentials detected in configuration",
                    r"(?i)database-password:\s*[\w=]+|api-key:\s*[\w=]+",
                    SOC2_FILE_TYPES,
                    None,
                    "Use secure secret management instead of hardcoded credentials",
                )?,
                ControlCheck::new(
                    "access-control-disabled",
                    "SOC-2 Confidentiality: Access controls must be implemented",
                    r#"(?i)name:\s*ACCESS_CONTROL[\s\S]*?value:\s*"none""#,
                    SOC2_FILE_TYPES,
                    None,
                    "Implement proper access controls for confidential data",
                )?,
            ],
        },
        Control {
            id: "SOC2-CC7.2".to_string(),
            family: ControlFamily::SystemIntegrity,
            title: "System Monitoring - Availability".to_string(),
            description: "Monitor system capacity and performance".to_string(),
            standard: Standard::Soc2,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "audit-logging-disabled",
                    "SOC-2 Availability: Audit logging must be enabled for monitoring",
                    r#"(?i)name:\s*AUDIT_LOGGING[\s\S]*?value:\s*"disabled""#,
                    SOC2_FILE_TYPES,
                    None,
                    "Enable comprehensive audit logging for system monitoring",
                )?,
                ControlCheck::new(
                    "no-resource-limits",
                    "SOC-2 Availability: Resource limits must be configured",
                    r"(?i)resources:\s*\{\s*\}",
                    SOC2_FILE_TYPES,
                    None,
                    "Configure resource limits to ensure system availability",
                )?,
            ],
        },
        Control {
            id: "SOC2-CC6.7".to_string(),
            family: ControlFamily::SystemProtection,
            title: "Data Transmission and Disposal - Security".to_string(),
            description: "Protect data during transmission and disposal".to_string(),
            standard: Standard::Soc2,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![
                ControlCheck::new(
                    "encryption-disabled",
                    "SOC-2 Security: Data encryption must be enabled for transmission",
                    r#"(?i)name:\s*ENCRYPT_COMMUNICATION[\s\S]*?value:\s*"false""#,
                    SOC2_FILE_TYPES,
                    None,
                    "Enable encryption for all data communications",
                )?,
                ControlCheck::new(
                    "public-service-exposure",
                    "SOC-2 Security: Services should not be publicly exposed without proper controls",
                    r"(?i)type:\s*LoadBalancer",
                    SOC2_FILE_TYPES,
                    None,
                    "Implement proper access controls for public services",
                )?,
            ],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soc2_controls_load() {
        let controls = controls().unwrap();
        assert_eq!(controls.len(), 3);
        assert!(controls.iter().all(|c| c.standard == Standard::Soc2));
    }

    #[test]
    fn test_load_balancer_pattern() {
        let controls = controls().unwrap();
        let cc67 = controls.iter().find(|c| c.id == "SOC2-CC6.7").unwrap();
        let check = cc67
            .checks
            .iter()
            .find(|c| c.id == "public-service-exposure")
            .unwrap();
        assert!(check.pattern.is_match("  type: LoadBalancer"));
    }
}
