//! Filesystem watching.
//!
//! Monitors compliance-relevant files for changes using the notify crate.
//! The scheduler consumes the emitted events; any other transport producing
//! the same three event kinds works just as well.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use notify::{RecursiveMode, Watcher};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::error::{Result, ScanError};

/// File event types emitted by the watcher.
#[derive(Debug, Clone)]
pub enum FileEvent {
    /// File content was modified.
    Modified { path: PathBuf },
    /// File was created.
    Created { path: PathBuf },
    /// File was deleted.
    Deleted { path: PathBuf },
}

/// Handle to manage the file watcher lifecycle. Dropping it stops the
/// watcher thread.
pub struct WatcherHandle {
    rx: async_channel::Receiver<FileEvent>,
    #[allow(dead_code)]
    watcher_task: JoinHandle<()>,
}

impl WatcherHandle {
    /// Receive the next file event.
    pub async fn recv(&self) -> Option<FileEvent> {
        self.rx.recv().await.ok()
    }
}

/// Filesystem watcher with ignore patterns and extension filtering.
pub struct FileWatcher {
    ignore_patterns: Vec<String>,
    extensions: Vec<String>,
}

impl FileWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom ignore patterns.
    pub fn with_ignore(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Set file extensions to watch.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Start watching a directory tree for file changes.
    ///
    /// Returns a handle whose channel yields `FileEvent`s until the handle
    /// is dropped.
    pub async fn watch_directory(self, path: &Path) -> Result<WatcherHandle> {
        if !path.exists() {
            return Err(ScanError::Workspace(format!(
                "watch path does not exist: {}",
                path.display()
            )));
        }

        let path_buf = path.to_path_buf();
        let (tx, rx) = async_channel::unbounded::<FileEvent>();

        let watcher_task = tokio::task::spawn_blocking(move || {
            let ignore_patterns = Arc::new(self.ignore_patterns);
            let extensions = Arc::new(self.extensions);

            let event_tx = tx.clone();
            let ignore_for_events = ignore_patterns.clone();
            let extensions_for_events = extensions.clone();

            let result = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
                let event = match res {
                    Ok(event) => event,
                    Err(error) => {
                        warn!(%error, "watch error");
                        return;
                    }
                };

                use notify::EventKind;
                for path in &event.paths {
                    if !Self::should_watch_path(path, &ignore_for_events, &extensions_for_events)
                    {
                        continue;
                    }
                    let file_event = match event.kind {
                        EventKind::Modify(_) => FileEvent::Modified { path: path.clone() },
                        EventKind::Create(_) => FileEvent::Created { path: path.clone() },
                        EventKind::Remove(_) => FileEvent::Deleted { path: path.clone() },
                        _ => continue,
                    };
                    let _ = event_tx.send_blocking(file_event);
                }
            });

            match result {
                Ok(mut watcher) => {
                    if let Err(error) = watcher.watch(&path_buf, RecursiveMode::Recursive) {
                        warn!(%error, "failed to watch directory");
                        return;
                    }
                    // Keep the watcher alive until the receiving side goes
                    // away.
                    while !tx.is_closed() {
                        std::thread::sleep(std::time::Duration::from_secs(1));
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to create watcher");
                }
            }
        });

        Ok(WatcherHandle { rx, watcher_task })
    }

    fn should_watch_path(path: &Path, ignore_patterns: &[String], extensions: &[String]) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in ignore_patterns {
            if path_str.contains(pattern.as_str()) {
                return false;
            }
        }

        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            return extensions.iter().any(|watched| watched == ext);
        }

        // Extensionless convention files (Dockerfile) are still relevant.
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase().contains("dockerfile"))
            .unwrap_or(false)
    }
}

impl Default for FileWatcher {
    fn default() -> Self {
        Self {
            ignore_patterns: vec![
                ".git".to_string(),
                "node_modules".to_string(),
                "vendor".to_string(),
                "__pycache__".to_string(),
                ".venv".to_string(),
                ".terraform".to_string(),
                "target".to_string(),
            ],
            extensions: vec![
                "tf".to_string(),
                "yaml".to_string(),
                "yml".to_string(),
                "json".to_string(),
                "hcl".to_string(),
                "py".to_string(),
                "js".to_string(),
                "ts".to_string(),
                "md".to_string(),
                "sh".to_string(),
                "txt".to_string(),
                "conf".to_string(),
                "env".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_watcher_filters() {
        let watcher = FileWatcher::default();
        assert!(watcher.ignore_patterns.contains(&".git".to_string()));
        assert!(watcher.extensions.contains(&"tf".to_string()));
    }

    #[test]
    fn test_should_watch_path_extension() {
        let patterns = vec![".git".to_string()];
        let extensions = vec!["tf".to_string(), "yaml".to_string()];

        assert!(FileWatcher::should_watch_path(
            Path::new("infra/main.tf"),
            &patterns,
            &extensions
        ));
        assert!(!FileWatcher::should_watch_path(
            Path::new("binary.exe"),
            &patterns,
            &extensions
        ));
    }

    #[test]
    fn test_should_watch_path_ignores() {
        let patterns = vec![".git".to_string(), "node_modules".to_string()];
        let extensions = vec!["tf".to_string()];

        assert!(!FileWatcher::should_watch_path(
            Path::new(".git/config.tf"),
            &patterns,
            &extensions
        ));
        assert!(!FileWatcher::should_watch_path(
            Path::new("node_modules/a/main.tf"),
            &patterns,
            &extensions
        ));
    }

    #[test]
    fn test_should_watch_dockerfile() {
        let patterns = vec![];
        let extensions = vec!["tf".to_string()];
        assert!(FileWatcher::should_watch_path(
            Path::new("build/Dockerfile"),
            &patterns,
            &extensions
        ));
    }

    #[tokio::test]
    async fn test_watcher_creation_and_cleanup() {
        let temp_dir = tempfile::tempdir().unwrap();
        let watcher = FileWatcher::default();
        let result = watcher.watch_directory(temp_dir.path()).await;
        assert!(result.is_ok());
        drop(result.unwrap());
    }

    #[tokio::test]
    async fn test_error_on_missing_path() {
        let watcher = FileWatcher::default();
        let result = watcher.watch_directory(Path::new("/nonexistent/path")).await;
        assert!(result.is_err());
    }
}
