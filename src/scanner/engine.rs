//! The scan engine: per-file pipeline from content to results.
//!
//! Applicability resolution, pattern evaluation, context heuristics and the
//! security pass, composed over a content-reader seam so hosts can feed
//! editor buffers instead of the filesystem.

use std::path::Path;

use crate::catalog::Catalog;
use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::models::{ComplianceIssue, ScanResult, SecurityScanResult};
use crate::scanner::evaluator::{self, IndicatorTable};
use crate::scanner::{applicability, security};

/// Source of file content. The engine reads through this seam; I/O errors
/// are the caller's to log and skip.
pub trait ContentReader: Send + Sync {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Default reader backed by the filesystem.
pub struct FsReader;

impl ContentReader for FsReader {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Combined per-file outcome of one scan invocation.
#[derive(Debug, Clone)]
pub struct FileScan {
    pub result: ScanResult,
    /// Present when the security pass was enabled for the scan.
    pub security: Option<SecurityScanResult>,
}

/// Rule-evaluation engine. Holds the immutable catalog and indicator table;
/// configuration is passed per invocation as a snapshot.
pub struct ScanEngine {
    catalog: Catalog,
    indicators: IndicatorTable,
    reader: Box<dyn ContentReader>,
}

impl ScanEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            indicators: IndicatorTable::builtin(),
            reader: Box::new(FsReader),
        }
    }

    pub fn with_reader(mut self, reader: Box<dyn ContentReader>) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_indicators(mut self, indicators: IndicatorTable) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read and scan one file. I/O failures surface as `ScanError::Io` for
    /// the caller to log and skip.
    pub fn scan_file(&self, path: &Path, config: &ScanConfig) -> Result<FileScan> {
        let content = self
            .reader
            .read_to_string(path)
            .map_err(|source| ScanError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self.scan_content(path, &content, config))
    }

    /// Scan already-loaded content. Deterministic: identical content and
    /// configuration produce an identical result.
    pub fn scan_content(&self, path: &Path, content: &str, config: &ScanConfig) -> FileScan {
        let file = path.to_string_lossy().to_string();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = file_extension(path);

        let lines: Vec<&str> = content.lines().collect();
        let mut issues: Vec<ComplianceIssue> = Vec::new();

        for control in self
            .catalog
            .controls_in_scope(&config.standards, config.level)
        {
            if !applicability::family_admitted(control.family, &file_name, &extension) {
                continue;
            }
            for check in &control.checks {
                if !applicability::check_applies(&check.file_types, &file_name, &extension) {
                    continue;
                }
                issues.extend(evaluator::evaluate_check(
                    control,
                    check,
                    &file,
                    &lines,
                    &self.indicators,
                ));
            }
        }

        let security = config.security_scan_enabled.then(|| {
            security::scan_content(
                &file,
                content,
                &file_name,
                &extension,
                self.catalog.vulnerability_checks(),
            )
        });

        FileScan {
            result: ScanResult::new(file, issues),
            security,
        }
    }
}

/// Dotted lowercase extension (".tf"), or empty for extensionless files.
fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Severity, Standard};
    use std::path::PathBuf;

    fn engine() -> ScanEngine {
        ScanEngine::new(Catalog::load().unwrap())
    }

    fn config() -> ScanConfig {
        ScanConfig::default()
    }

    #[test]
    fn test_scan_content_is_deterministic() {
        let engine = engine();
        let config = config();
        let path = PathBuf::from("main.tf");
        let content = "resource \"aws_db_instance\" \"db\" {\n  storage_encrypted = false\n}\n";

        let first = engine.scan_content(&path, content, &config);
        let second = engine.scan_content(&path, content, &config);
        assert_eq!(first.result, second.result);
        assert_eq!(first.security, second.security);
    }

    #[test]
    fn test_family_gate_excludes_documentation() {
        let engine = engine();
        let config = config();
        let content = r#"ingress { cidr_blocks = ["0.0.0.0/0"] }"#;

        let tf = engine.scan_content(&PathBuf::from("net.tf"), content, &config);
        assert!(tf.result.issues.iter().any(|i| i.control == "AC-3"));

        let md = engine.scan_content(&PathBuf::from("README.md"), content, &config);
        assert!(md.result.issues.iter().all(|i| i.control != "AC-3"));
    }

    #[test]
    fn test_insecure_transmission_detected() {
        let engine = engine();
        let config = config();
        let content = "endpoint = \"http://internal.example.com\"\n";
        let scan = engine.scan_content(&PathBuf::from("main.tf"), content, &config);
        let sc8: Vec<_> = scan
            .result
            .issues
            .iter()
            .filter(|i| i.control == "SC-8")
            .collect();
        assert_eq!(sc8.len(), 1);
        assert_eq!(sc8[0].severity, Severity::Error);
        assert!(!scan.result.compliant);
    }

    #[test]
    fn test_security_pass_toggle() {
        let engine = engine();
        let mut config = config();
        let path = PathBuf::from("config.tf");
        let content = r#"password = "S3cr3t!9""#;

        let with_security = engine.scan_content(&path, content, &config);
        assert!(with_security.security.is_some());

        config.security_scan_enabled = false;
        let without_security = engine.scan_content(&path, content, &config);
        assert!(without_security.security.is_none());
    }

    #[test]
    fn test_level_widens_scope() {
        let engine = engine();
        let mut config = config();
        config.standards = vec![Standard::FedRamp];
        let content = "storage_encrypted = false\n";
        let path = PathBuf::from("db.tf");

        config.level = crate::models::ImpactLevel::Low;
        let low = engine.scan_content(&path, content, &config);
        assert!(low.result.issues.iter().all(|i| i.control != "SC-28"));

        config.level = crate::models::ImpactLevel::Moderate;
        let moderate = engine.scan_content(&path, content, &config);
        assert!(moderate.result.issues.iter().any(|i| i.control == "SC-28"));
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let engine = engine();
        let config = config();
        let result = engine.scan_file(Path::new("/nonexistent/main.tf"), &config);
        assert!(matches!(result, Err(ScanError::Io { .. })));
    }
}
