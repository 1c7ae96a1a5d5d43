//! Scan configuration.
//!
//! An immutable snapshot of the active standards, FedRAMP impact level,
//! include/exclude globs and feature toggles. Loadable from a TOML file;
//! every field has a default mirroring the scanner's out-of-the-box
//! behavior, so a missing or partial file is fine.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ImpactLevel, Standard};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Standards whose controls are evaluated.
    pub standards: Vec<Standard>,
    /// FedRAMP impact level; ignored by other standards.
    pub level: ImpactLevel,
    /// Globs selecting files for workspace scans.
    pub include_patterns: Vec<String>,
    /// Globs excluded from workspace scans.
    pub exclude_patterns: Vec<String>,
    /// Whether the vulnerability pass runs alongside the compliance pass.
    pub security_scan_enabled: bool,
    /// Whether edit/watch events trigger rescans.
    pub live_scanning_enabled: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            standards: vec![Standard::FedRamp],
            level: ImpactLevel::Moderate,
            include_patterns: vec![
                "**/*.tf".to_string(),
                "**/*.yaml".to_string(),
                "**/*.yml".to_string(),
                "**/*.json".to_string(),
                "**/*.md".to_string(),
                "**/*.txt".to_string(),
                "**/*.sh".to_string(),
                "**/*.py".to_string(),
                "**/*.js".to_string(),
                "**/*.ts".to_string(),
            ],
            exclude_patterns: vec![
                "**/node_modules/**".to_string(),
                "**/vendor/**".to_string(),
                "**/.git/**".to_string(),
            ],
            security_scan_enabled: true,
            live_scanning_enabled: true,
        }
    }
}

impl ScanConfig {
    /// Load config from a TOML file. Returns the default if the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|source| crate::error::ScanError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let config: ScanConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn include_matcher(&self) -> Result<GlobSet> {
        build_globset(&self.include_patterns)
    }

    pub fn exclude_matcher(&self) -> Result<GlobSet> {
        build_globset(&self.exclude_patterns)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# Rampart configuration

# Standards to evaluate: FedRAMP, GDPR, HIPAA, DPDP, PCI-DSS,
# ISO-27001, ISO-27002, SOC-2, NIST-CSF.
standards = ["FedRAMP"]

# FedRAMP impact level: Low, Moderate, High.
level = "Moderate"

# Run the security vulnerability pass alongside compliance checks.
security_scan_enabled = true

# Rescan files on change events.
live_scanning_enabled = true

# include_patterns = ["**/*.tf", "**/*.yaml"]
# exclude_patterns = ["**/node_modules/**", "**/vendor/**", "**/.git/**"]
"#
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.standards, vec![Standard::FedRamp]);
        assert_eq!(config.level, ImpactLevel::Moderate);
        assert!(config.security_scan_enabled);
        assert!(config.live_scanning_enabled);
        assert_eq!(config.include_patterns.len(), 10);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let config = ScanConfig::load(Path::new("/nonexistent/rampart.toml")).unwrap();
        assert_eq!(config.standards, vec![Standard::FedRamp]);
    }

    #[test]
    fn test_parse_partial_toml() {
        let parsed: ScanConfig = toml::from_str(
            r#"
standards = ["FedRAMP", "GDPR"]
level = "High"
security_scan_enabled = false
"#,
        )
        .unwrap();
        assert_eq!(parsed.standards, vec![Standard::FedRamp, Standard::Gdpr]);
        assert_eq!(parsed.level, ImpactLevel::High);
        assert!(!parsed.security_scan_enabled);
        // Unspecified fields keep their defaults.
        assert!(parsed.live_scanning_enabled);
        assert!(!parsed.include_patterns.is_empty());
    }

    #[test]
    fn test_starter_toml_parses() {
        let parsed: ScanConfig = toml::from_str(ScanConfig::starter_toml()).unwrap();
        assert_eq!(parsed.standards, vec![Standard::FedRamp]);
    }

    #[test]
    fn test_matchers() {
        let config = ScanConfig::default();
        let include = config.include_matcher().unwrap();
        let exclude = config.exclude_matcher().unwrap();
        assert!(include.is_match("infra/main.tf"));
        assert!(!include.is_match("infra/main.exe"));
        assert!(exclude.is_match("node_modules/pkg/index.js"));
        assert!(!exclude.is_match("src/index.js"));
    }
}
