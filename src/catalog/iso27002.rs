//! ISO 27002 control catalog.
//!
//! These checks carry no file-type restriction and therefore apply to every
//! file the family gate admits.

use crate::error::Result;
use crate::models::{Control, ControlCheck, ControlFamily, Severity, Standard};

pub(super) fn controls() -> Result<Vec<Control>> {
    Ok(vec![
        Control {
            id: "ISO27002-5-1".to_string(),
            family: ControlFamily::Planning,
            title: "Information security policies".to_string(),
            description: "Management direction and support for information security"
                .to_string(),
            standard: Standard::Iso27002,
            levels: vec![],
            severity: Severity::Warning,
            checks: vec![ControlCheck::new(
                "security-policy-undefined",
                "Information security policy should be defined",
                r#"(?i)security_policy\s*=\s*["']undefined["']"#,
                &[],
                None,
                "Define and document information security policies",
            )?],
        },
        Control {
            id: "ISO27002-8-1".to_string(),
            family: ControlFamily::ConfigurationManagement,
            title: "Responsibility for assets".to_string(),
            description: "Assets should be identified and appropriate protection \
                          responsibilities defined"
                .to_string(),
            standard: Standard::Iso27002,
            levels: vec![],
            severity: Severity::Error,
            checks: vec![ControlCheck::new(
                "asset-unclassified",
                "Assets should be properly classified",
                r#"(?i)asset_classification\s*=\s*["']unclassified["']"#,
                &[],
                None,
                "Implement asset classification and protection responsibilities",
            )?],
        },
    ])
}
