use serde::{Deserialize, Serialize};

/// Severity of a compliance issue.
///
/// Ordered so that `Error` compares greatest; a file is compliant iff it has
/// no `Error` issue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

/// Severity of a security vulnerability.
///
/// Wider scale than compliance severity; `as_issue_severity` maps it onto
/// the compliance buckets when the two finding kinds are merged into one
/// report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VulnerabilitySeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VulnerabilitySeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            VulnerabilitySeverity::Low => "low",
            VulnerabilitySeverity::Medium => "medium",
            VulnerabilitySeverity::High => "high",
            VulnerabilitySeverity::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(VulnerabilitySeverity::Low),
            "medium" => Some(VulnerabilitySeverity::Medium),
            "high" => Some(VulnerabilitySeverity::High),
            "critical" => Some(VulnerabilitySeverity::Critical),
            _ => None,
        }
    }

    /// Bucket mapping used when vulnerability findings join a compliance
    /// report: critical/high count as errors, medium as warnings, low as
    /// info.
    pub fn as_issue_severity(&self) -> Severity {
        match self {
            VulnerabilitySeverity::Critical | VulnerabilitySeverity::High => Severity::Error,
            VulnerabilitySeverity::Medium => Severity::Warning,
            VulnerabilitySeverity::Low => Severity::Info,
        }
    }

    /// Risk-score weight for this severity.
    pub fn risk_weight(&self) -> u32 {
        match self {
            VulnerabilitySeverity::Critical => 25,
            VulnerabilitySeverity::High => 15,
            VulnerabilitySeverity::Medium => 8,
            VulnerabilitySeverity::Low => 3,
        }
    }
}

/// A supported compliance standard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Standard {
    #[serde(rename = "FedRAMP")]
    FedRamp,
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "HIPAA")]
    Hipaa,
    #[serde(rename = "DPDP")]
    Dpdp,
    #[serde(rename = "PCI-DSS")]
    PciDss,
    #[serde(rename = "ISO-27001")]
    Iso27001,
    #[serde(rename = "ISO-27002")]
    Iso27002,
    #[serde(rename = "SOC-2")]
    Soc2,
    #[serde(rename = "NIST-CSF")]
    NistCsf,
}

impl Standard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::FedRamp => "FedRAMP",
            Standard::Gdpr => "GDPR",
            Standard::Hipaa => "HIPAA",
            Standard::Dpdp => "DPDP",
            Standard::PciDss => "PCI-DSS",
            Standard::Iso27001 => "ISO-27001",
            Standard::Iso27002 => "ISO-27002",
            Standard::Soc2 => "SOC-2",
            Standard::NistCsf => "NIST-CSF",
        }
    }

    /// Parse a standard name. Unknown names resolve to `None`; callers drop
    /// them with a log line rather than erroring, so an unknown standard
    /// always behaves as an empty rule set.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "FedRAMP" => Some(Standard::FedRamp),
            "GDPR" => Some(Standard::Gdpr),
            "HIPAA" => Some(Standard::Hipaa),
            "DPDP" => Some(Standard::Dpdp),
            "PCI-DSS" => Some(Standard::PciDss),
            "ISO-27001" => Some(Standard::Iso27001),
            "ISO-27002" => Some(Standard::Iso27002),
            "SOC-2" => Some(Standard::Soc2),
            "NIST-CSF" => Some(Standard::NistCsf),
            _ => None,
        }
    }

    pub fn all() -> [Standard; 9] {
        [
            Standard::FedRamp,
            Standard::Gdpr,
            Standard::Hipaa,
            Standard::Dpdp,
            Standard::PciDss,
            Standard::Iso27001,
            Standard::Iso27002,
            Standard::Soc2,
            Standard::NistCsf,
        ]
    }
}

/// FedRAMP impact level. Controls carry the set of levels they apply to and
/// are selected for a scan iff that set contains the configured level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(ImpactLevel::Low),
            "Moderate" => Some(ImpactLevel::Moderate),
            "High" => Some(ImpactLevel::High),
            _ => None,
        }
    }
}

impl Default for ImpactLevel {
    fn default() -> Self {
        ImpactLevel::Moderate
    }
}

/// NIST-style control family. Every control in every standard carries one of
/// these so the file-class family gate is total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ControlFamily {
    /// AC - access control and enforcement
    AccessControl,
    /// AU - audit and accountability
    AuditAccountability,
    /// CM - configuration management
    ConfigurationManagement,
    /// IA - identification and authentication
    IdentificationAuthentication,
    /// PL - planning
    Planning,
    /// PM - program management
    ProgramManagement,
    /// RA - risk assessment
    RiskAssessment,
    /// SA - system and services acquisition (development assurance)
    SystemAcquisition,
    /// SC - system and communications protection
    SystemProtection,
    /// SI - system and information integrity
    SystemIntegrity,
}

impl ControlFamily {
    pub fn code(&self) -> &'static str {
        match self {
            ControlFamily::AccessControl => "AC",
            ControlFamily::AuditAccountability => "AU",
            ControlFamily::ConfigurationManagement => "CM",
            ControlFamily::IdentificationAuthentication => "IA",
            ControlFamily::Planning => "PL",
            ControlFamily::ProgramManagement => "PM",
            ControlFamily::RiskAssessment => "RA",
            ControlFamily::SystemAcquisition => "SA",
            ControlFamily::SystemProtection => "SC",
            ControlFamily::SystemIntegrity => "SI",
        }
    }
}
