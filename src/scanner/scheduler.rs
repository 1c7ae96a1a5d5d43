//! Incremental scan scheduler.
//!
//! Owns the per-file result store and drives the scan pipeline from change
//! events. Per file the states are Idle -> Pending -> Scanning -> Idle:
//! edits enter Pending behind a debounce window and repeated edits collapse
//! into the newest one; saves, creations and focus changes scan immediately;
//! deletions clear the file's results without scanning. Workspace scans run
//! per-file scans concurrently under a semaphore while a per-path lock keeps
//! at most one scan in flight per file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::models::Report;
use crate::scanner::aggregate;
use crate::scanner::engine::ScanEngine;
use crate::scanner::store::ResultStore;
use crate::scanner::watcher::FileEvent;

/// Debounce window for active-edit events.
pub const EDIT_DEBOUNCE: Duration = Duration::from_millis(1000);
/// Debounce window for the passive file-watch channel.
pub const WATCH_DEBOUNCE: Duration = Duration::from_millis(2000);

/// Concurrent per-file scans during a workspace scan.
const MAX_CONCURRENT_SCANS: usize = 10;

/// Capacity of the report-update channel; when the subscriber lags, older
/// updates are dropped in favor of newer ones.
const REPORT_CHANNEL_CAPACITY: usize = 64;

/// Which debounce track an edit event arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    ActiveEdit,
    Watcher,
}

struct Inner {
    engine: ScanEngine,
    config: ScanConfig,
    store: ResultStore,
    /// Outstanding debounce tasks, one at most per path.
    pending: Mutex<HashMap<PathBuf, JoinHandle<()>>>,
    /// Per-path scan locks serializing in-flight scans.
    scan_locks: Mutex<HashMap<PathBuf, Arc<tokio::sync::Mutex<()>>>>,
    enabled: AtomicBool,
    /// Total files discovered by the last workspace scan.
    total_files: Mutex<usize>,
    /// Root of the last workspace scan, used when live scanning is
    /// re-enabled.
    workspace_root: Mutex<Option<PathBuf>>,
    report_tx: async_channel::Sender<Report>,
    report_rx: async_channel::Receiver<Report>,
    debounce_edit: Duration,
    debounce_watch: Duration,
}

/// Cheaply cloneable handle; clones share all scheduler state.
#[derive(Clone)]
pub struct ScanScheduler {
    inner: Arc<Inner>,
}

impl ScanScheduler {
    pub fn new(engine: ScanEngine, config: ScanConfig) -> Self {
        Self::with_debounce(engine, config, EDIT_DEBOUNCE, WATCH_DEBOUNCE)
    }

    /// Construct with custom debounce windows. Tests shrink these to keep
    /// wall-clock time down.
    pub fn with_debounce(
        engine: ScanEngine,
        config: ScanConfig,
        debounce_edit: Duration,
        debounce_watch: Duration,
    ) -> Self {
        let (report_tx, report_rx) = async_channel::bounded(REPORT_CHANNEL_CAPACITY);
        let enabled = config.live_scanning_enabled;

        Self {
            inner: Arc::new(Inner {
                engine,
                config,
                store: ResultStore::new(),
                pending: Mutex::new(HashMap::new()),
                scan_locks: Mutex::new(HashMap::new()),
                enabled: AtomicBool::new(enabled),
                total_files: Mutex::new(0),
                workspace_root: Mutex::new(None),
                report_tx,
                report_rx,
                debounce_edit,
                debounce_watch,
            }),
        }
    }

    /// Receiver for report-updated notifications.
    pub fn subscribe(&self) -> async_channel::Receiver<Report> {
        self.inner.report_rx.clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::SeqCst)
    }

    /// Toggle live scanning. Disabling cancels all pending scans and clears
    /// every current finding; re-enabling triggers a full workspace scan of
    /// the last known root.
    pub async fn set_enabled(&self, enabled: bool) {
        let was_enabled = self.inner.enabled.swap(enabled, Ordering::SeqCst);
        if was_enabled == enabled {
            return;
        }

        if !enabled {
            info!("live scanning disabled, clearing findings");
            self.cancel_all_pending();
            self.inner.store.clear();
            *self.inner.total_files.lock().unwrap() = 0;
            self.emit_report();
            return;
        }

        info!("live scanning enabled");
        let root = self.inner.workspace_root.lock().unwrap().clone();
        match root {
            Some(root) => {
                if let Err(error) = self.scan_workspace(&root).await {
                    warn!(%error, "workspace rescan after enable failed");
                }
            }
            None => debug!("no workspace root known yet, skipping initial scan"),
        }
    }

    /// Entry point for file-change notifications from any transport.
    pub async fn handle_event(&self, event: FileEvent) {
        if !self.is_enabled() {
            return;
        }

        match event {
            FileEvent::Modified { path } => self.debounce(path, EventSource::Watcher),
            FileEvent::Created { path } => self.scan_now(&path).await,
            FileEvent::Deleted { path } => self.handle_deleted(&path),
        }
    }

    /// An active editing session changed the file's buffer. Debounced on
    /// the shorter track; only the newest edit inside the window scans.
    pub fn document_edited(&self, path: PathBuf) {
        if !self.is_enabled() {
            return;
        }
        self.debounce(path, EventSource::ActiveEdit);
    }

    /// A file was saved; scan immediately.
    pub async fn file_saved(&self, path: &Path) {
        if !self.is_enabled() {
            return;
        }
        self.scan_now(path).await;
    }

    /// Editor focus moved to a file; scan immediately.
    pub async fn file_focused(&self, path: &Path) {
        if !self.is_enabled() {
            return;
        }
        self.scan_now(path).await;
    }

    /// Scan one file immediately, superseding any pending debounce.
    pub async fn scan_now(&self, path: &Path) {
        self.cancel_pending(path);
        self.scan_file_now(path).await;
    }

    /// Scan every matching file under `root` and build the workspace
    /// report. Per-file scans run concurrently; per-file failures are
    /// logged and skipped, and only a scan that cannot start at all is an
    /// error.
    pub async fn scan_workspace(&self, root: &Path) -> Result<Report> {
        if !root.is_dir() {
            return Err(ScanError::Workspace(format!(
                "no workspace root at {}",
                root.display()
            )));
        }
        *self.inner.workspace_root.lock().unwrap() = Some(root.to_path_buf());

        let files = self.discover_files(root)?;
        info!(files = files.len(), root = %root.display(), "workspace scan started");
        *self.inner.total_files.lock().unwrap() = files.len();

        self.scan_paths(files).await;

        let report = self.current_report();
        info!(
            issues = report.issues.len(),
            errors = report.summary.errors,
            "workspace scan completed"
        );
        self.send_report(report.clone());
        Ok(report)
    }

    /// Scan an explicit file list and build a report from the store.
    pub async fn scan_files(&self, files: &[PathBuf]) -> Report {
        *self.inner.total_files.lock().unwrap() = files.len();
        self.scan_paths(files.to_vec()).await;
        let report = self.current_report();
        self.send_report(report.clone());
        report
    }

    /// Build the report for the current store contents.
    pub fn current_report(&self) -> Report {
        let snapshot = self.inner.store.snapshot();
        let total_files = *self.inner.total_files.lock().unwrap();
        aggregate::build_report(
            self.inner.engine.catalog(),
            &self.inner.config,
            total_files.max(snapshot.scanned_files),
            snapshot.scanned_files,
            snapshot.issues,
            &snapshot.vulnerabilities,
        )
    }

    fn handle_deleted(&self, path: &Path) {
        self.cancel_pending(path);
        if self.inner.store.remove(path) {
            debug!(path = %path.display(), "cleared findings for deleted file");
            self.emit_report();
        }
    }

    fn debounce(&self, path: PathBuf, source: EventSource) {
        let window = match source {
            EventSource::ActiveEdit => self.inner.debounce_edit,
            EventSource::Watcher => self.inner.debounce_watch,
        };

        let scheduler = self.clone();
        let task_path = path.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            scheduler
                .inner
                .pending
                .lock()
                .unwrap()
                .remove(&task_path);
            if scheduler.is_enabled() {
                scheduler.scan_file_now(&task_path).await;
            }
        });

        // The newest edit wins; any previous pending scan for this path is
        // dropped before it starts.
        let mut pending = self.inner.pending.lock().unwrap();
        if let Some(superseded) = pending.insert(path, task) {
            superseded.abort();
        }
    }

    fn cancel_pending(&self, path: &Path) {
        if let Some(task) = self.inner.pending.lock().unwrap().remove(path) {
            task.abort();
        }
    }

    fn cancel_all_pending(&self) {
        let mut pending = self.inner.pending.lock().unwrap();
        for (_, task) in pending.drain() {
            task.abort();
        }
    }

    async fn scan_paths(&self, files: Vec<PathBuf>) {
        let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_SCANS));
        let mut tasks = Vec::with_capacity(files.len());

        for path in files {
            let scheduler = self.clone();
            let semaphore = semaphore.clone();
            tasks.push(tokio::spawn(async move {
                let Ok(_permit) = semaphore.acquire().await else {
                    return;
                };
                scheduler.scan_file_now(&path).await;
            }));
        }

        for task in tasks {
            if let Err(error) = task.await {
                warn!(%error, "scan task join failed");
            }
        }
    }

    /// The single-file scan path. The generation is taken at request time;
    /// the per-path lock then serializes the actual scan so a workspace scan
    /// and a concurrently triggered single-file scan for the same path never
    /// interleave, and the commit is dropped if a newer request superseded
    /// this one while it waited or ran.
    async fn scan_file_now(&self, path: &Path) {
        let generation = self.inner.store.begin_scan(path);
        let lock = self.scan_lock(path);
        let _guard = lock.lock().await;

        let scan = match self.inner.engine.scan_file(path, &self.inner.config) {
            Ok(scan) => scan,
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable file");
                return;
            }
        };

        if self.inner.store.commit(path, generation, scan) {
            self.emit_report();
        } else {
            debug!(path = %path.display(), generation, "dropped stale scan result");
        }
    }

    fn scan_lock(&self, path: &Path) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.inner.scan_locks.lock().unwrap();
        locks
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let include = self.inner.config.include_matcher()?;
        let exclude = self.inner.config.exclude_matcher()?;

        let mut files = Vec::new();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            if include.is_match(relative) && !exclude.is_match(relative) {
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }

    fn emit_report(&self) {
        self.send_report(self.current_report());
    }

    fn send_report(&self, report: Report) {
        // Dropping an update when the channel is full is fine; a newer
        // report supersedes it.
        let _ = self.inner.report_tx.try_send(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn scheduler() -> ScanScheduler {
        let engine = ScanEngine::new(Catalog::load().unwrap());
        ScanScheduler::with_debounce(
            engine,
            ScanConfig::default(),
            Duration::from_millis(40),
            Duration::from_millis(80),
        )
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_root_is_workspace_error() {
        let scheduler = scheduler();
        let result = scheduler.scan_workspace(Path::new("/nonexistent/workspace")).await;
        assert!(matches!(result, Err(ScanError::Workspace(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_empty_report_when_nothing_scanned() {
        let scheduler = scheduler();
        let report = scheduler.current_report();
        assert_eq!(report.scanned_files, 0);
        assert!(report.issues.is_empty());
        assert_eq!(report.summary.errors, 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_disabled_scheduler_ignores_events() {
        let scheduler = scheduler();
        scheduler.set_enabled(false).await;
        scheduler
            .handle_event(FileEvent::Created {
                path: PathBuf::from("/nonexistent/file.tf"),
            })
            .await;
        assert_eq!(scheduler.current_report().scanned_files, 0);
    }
}
