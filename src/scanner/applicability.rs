//! Applicability resolution.
//!
//! Two gates run before any pattern is evaluated against a file: a coarse
//! control-family gate keyed on the file's class, then a per-check file-type
//! test. Both exist to keep semantically meaningless matches out (an
//! access-control regex firing inside a README).

use crate::models::ControlFamily;

/// Coarse classification of a file for the family gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Infrastructure definitions: .tf, .yaml, .yml, .json
    Infrastructure,
    /// Programming-language sources: .py, .js, .ts, .java, .go, .rs
    SourceCode,
    /// Configuration files: name contains "config"/"env", or .conf
    Configuration,
    /// Container build files: Dockerfile and .dockerfile
    ContainerBuild,
    /// Documentation: .md, .txt, .rst
    Documentation,
    /// Anything else; admits every family.
    Other,
}

const INFRA_EXTENSIONS: &[&str] = &[".tf", ".yaml", ".yml", ".json"];
const SOURCE_EXTENSIONS: &[&str] = &[".py", ".js", ".ts", ".java", ".go", ".rs"];
const DOC_EXTENSIONS: &[&str] = &[".md", ".txt", ".rst"];

/// Classify a file by name and dotted lowercase extension. The class checks
/// run in a fixed priority order, so "app-config.tf" classifies as
/// infrastructure, not configuration.
pub fn classify_file(file_name: &str, extension: &str) -> FileClass {
    if INFRA_EXTENSIONS.contains(&extension) {
        return FileClass::Infrastructure;
    }
    if SOURCE_EXTENSIONS.contains(&extension) {
        return FileClass::SourceCode;
    }
    if file_name.contains("config") || file_name.contains("env") || extension == ".conf" {
        return FileClass::Configuration;
    }
    if file_name.to_lowercase().contains("dockerfile") || extension == ".dockerfile" {
        return FileClass::ContainerBuild;
    }
    if DOC_EXTENSIONS.contains(&extension) {
        return FileClass::Documentation;
    }
    FileClass::Other
}

/// Whether a control family is considered at all for a file.
pub fn family_admitted(family: ControlFamily, file_name: &str, extension: &str) -> bool {
    use ControlFamily::*;

    match classify_file(file_name, extension) {
        FileClass::Infrastructure => matches!(
            family,
            AccessControl
                | SystemProtection
                | ConfigurationManagement
                | SystemIntegrity
                | AuditAccountability
                | RiskAssessment
        ),
        FileClass::SourceCode => matches!(
            family,
            AccessControl | SystemProtection | SystemIntegrity | SystemAcquisition
        ),
        FileClass::Configuration => matches!(
            family,
            AccessControl
                | SystemProtection
                | ConfigurationManagement
                | IdentificationAuthentication
        ),
        FileClass::ContainerBuild => matches!(
            family,
            AccessControl | SystemProtection | ConfigurationManagement | SystemIntegrity
        ),
        FileClass::Documentation => {
            matches!(family, SystemAcquisition | Planning | ProgramManagement)
        }
        FileClass::Other => true,
    }
}

/// Per-check file-type test. An empty type list means the check applies to
/// every file. Otherwise the extension must equal a listed type, or the file
/// name must contain the type as a substring; the substring fallback is what
/// matches extensionless convention files like "Dockerfile".
pub fn check_applies(file_types: &[String], file_name: &str, extension: &str) -> bool {
    if file_types.is_empty() {
        return true;
    }
    file_types
        .iter()
        .any(|t| extension == t.as_str() || file_name.contains(t.as_str()))
}
