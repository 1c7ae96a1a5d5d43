//! Rampart - compliance and security scan engine.
//!
//! Scans infrastructure-as-code and source files for violations of
//! security/compliance control frameworks (FedRAMP, GDPR, HIPAA and others)
//! and reports them as actionable findings with remediation guidance. The
//! crate exposes structured values only; rendering and editor integration
//! belong to the embedding host.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use rampart::{scan_workspace, ScanConfig};
//!
//! # async fn run() -> rampart::error::Result<()> {
//! let report = scan_workspace(Path::new("./infra"), ScanConfig::default()).await?;
//! println!("{} issues, {} errors", report.issues.len(), report.summary.errors);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod scanner;

use std::path::Path;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use models::{
    ComplianceIssue, Control, ControlCheck, ControlFamily, ImpactLevel, Report, ReportSummary,
    ScanResult, SecurityScanResult, Severity, Standard, VulnerabilityIssue,
    VulnerabilitySeverity,
};
pub use scanner::{
    FileEvent, FileScan, FileWatcher, IndicatorTable, ScanEngine, ScanScheduler, WatcherHandle,
};

/// Run a one-shot workspace scan with a freshly loaded catalog.
pub async fn scan_workspace(root: &Path, config: ScanConfig) -> Result<Report> {
    let engine = ScanEngine::new(Catalog::load()?);
    let scheduler = ScanScheduler::new(engine, config);
    scheduler.scan_workspace(root).await
}

/// Scan a single file with a freshly loaded catalog. Embedders doing more
/// than one scan should construct a `ScanEngine` once and reuse it.
pub fn scan_file(path: &Path, config: &ScanConfig) -> Result<FileScan> {
    let engine = ScanEngine::new(Catalog::load()?);
    engine.scan_file(path, config)
}
