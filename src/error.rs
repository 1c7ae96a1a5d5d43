use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    /// Reading a file failed. The engine logs these and skips the file;
    /// a batch scan never aborts because of one.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A check pattern failed to compile. Raised by `Catalog::load` only;
    /// the evaluator never sees an uncompiled pattern.
    #[error("invalid pattern in check {check_id}: {source}")]
    Pattern {
        check_id: String,
        #[source]
        source: regex::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("glob pattern error: {0}")]
    Glob(#[from] globset::Error),

    /// The workspace scan could not start at all (missing root, unreadable
    /// directory). Per-file failures are log-only and never surface here.
    #[error("workspace error: {0}")]
    Workspace(String),
}
