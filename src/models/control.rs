use regex::Regex;

use crate::error::{Result, ScanError};
use crate::models::{ControlFamily, ImpactLevel, Severity, Standard};

/// A single detection check belonging to a control.
///
/// The pattern is compiled once at catalog load; a pattern that fails to
/// compile makes the whole catalog load fail rather than silently dropping
/// the check.
#[derive(Debug, Clone)]
pub struct ControlCheck {
    pub id: String,
    pub message: String,
    pub pattern: Regex,
    /// File types this check applies to, as dotted extensions (".tf").
    /// Empty means the check applies to every file.
    pub file_types: Vec<String>,
    /// Overrides the control severity when present.
    pub severity: Option<Severity>,
    pub remediation: String,
}

impl ControlCheck {
    pub fn new(
        id: &str,
        message: &str,
        pattern: &str,
        file_types: &[&str],
        severity: Option<Severity>,
        remediation: &str,
    ) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ScanError::Pattern {
            check_id: id.to_string(),
            source,
        })?;

        Ok(Self {
            id: id.to_string(),
            message: message.to_string(),
            pattern,
            file_types: file_types.iter().map(|t| t.to_string()).collect(),
            severity,
            remediation: remediation.to_string(),
        })
    }

    /// Severity of issues produced by this check, falling back to the
    /// owning control's severity.
    pub fn effective_severity(&self, control_severity: Severity) -> Severity {
        self.severity.unwrap_or(control_severity)
    }
}

/// A compliance control: a named requirement belonging to a family and a
/// standard, implemented by one or more checks.
#[derive(Debug, Clone)]
pub struct Control {
    pub id: String,
    pub family: ControlFamily,
    pub title: String,
    pub description: String,
    pub standard: Standard,
    /// FedRAMP impact levels this control applies to. Empty for standards
    /// without a level dimension.
    pub levels: Vec<ImpactLevel>,
    pub severity: Severity,
    pub checks: Vec<ControlCheck>,
}

impl Control {
    /// Whether this control is in scope for the given impact level. Controls
    /// without level tagging are always in scope.
    pub fn applies_to_level(&self, level: ImpactLevel) -> bool {
        self.levels.is_empty() || self.levels.contains(&level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_control(levels: Vec<ImpactLevel>) -> Control {
        Control {
            id: "AC-3".to_string(),
            family: ControlFamily::AccessControl,
            title: "Access Enforcement".to_string(),
            description: "Enforce approved authorizations".to_string(),
            standard: Standard::FedRamp,
            levels,
            severity: Severity::Error,
            checks: vec![],
        }
    }

    #[test]
    fn test_check_compiles_pattern() {
        let check = ControlCheck::new(
            "AC-3-1",
            "Verify access control policies",
            r"(?i)policy|allow|deny",
            &[".tf"],
            Some(Severity::Error),
            "Define explicit access control policies",
        )
        .unwrap();

        assert!(check.pattern.is_match("allow_all = true"));
        assert_eq!(check.file_types, vec![".tf".to_string()]);
    }

    #[test]
    fn test_check_invalid_pattern_is_error() {
        let result = ControlCheck::new("BAD-1", "msg", r"(unclosed", &[], None, "fix");
        match result {
            Err(crate::error::ScanError::Pattern { check_id, .. }) => {
                assert_eq!(check_id, "BAD-1");
            }
            other => panic!("expected pattern error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_effective_severity_falls_back_to_control() {
        let check = ControlCheck::new("AC-3-1", "msg", "policy", &[], None, "fix").unwrap();
        assert_eq!(check.effective_severity(Severity::Warning), Severity::Warning);

        let check =
            ControlCheck::new("AC-3-1", "msg", "policy", &[], Some(Severity::Info), "fix")
                .unwrap();
        assert_eq!(check.effective_severity(Severity::Warning), Severity::Info);
    }

    #[test]
    fn test_level_scoping() {
        let control = sample_control(vec![ImpactLevel::Moderate, ImpactLevel::High]);
        assert!(control.applies_to_level(ImpactLevel::Moderate));
        assert!(control.applies_to_level(ImpactLevel::High));
        assert!(!control.applies_to_level(ImpactLevel::Low));

        let untagged = sample_control(vec![]);
        assert!(untagged.applies_to_level(ImpactLevel::Low));
    }
}
