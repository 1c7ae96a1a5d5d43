//! Incremental scan scheduler integration tests.
//!
//! Verifies debounce collapse, enable/disable semantics, deletion handling
//! and the stale-scan commit guard using short debounce windows against a
//! temporary workspace.

mod common;

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use common::TestWorkspace;
use rampart::scanner::{ContentReader, FileEvent, ScanEngine, ScanScheduler};
use rampart::{Catalog, ScanConfig};

const EDIT_WINDOW: Duration = Duration::from_millis(40);
const WATCH_WINDOW: Duration = Duration::from_millis(80);

fn scheduler() -> ScanScheduler {
    let engine = ScanEngine::new(Catalog::load().unwrap());
    ScanScheduler::with_debounce(engine, ScanConfig::default(), EDIT_WINDOW, WATCH_WINDOW)
}

/// Drain all currently queued report notifications.
fn drain_reports(reports: &async_channel::Receiver<rampart::Report>) -> usize {
    let mut count = 0;
    while reports.try_recv().is_ok() {
        count += 1;
    }
    count
}

/// Test 1: N rapid edits inside the debounce window trigger exactly one
/// scan, and that scan sees the content present after the last event.
#[tokio::test(flavor = "multi_thread")]
async fn test_debounce_collapses_rapid_edits() {
    let workspace = TestWorkspace::new().unwrap();
    let scheduler = scheduler();
    let reports = scheduler.subscribe();

    let path = workspace
        .write_file("config.tf", "password = \"draft-1\"\n")
        .unwrap();

    for revision in 2..=5 {
        workspace
            .write_file(
                "config.tf",
                &format!("password = \"draft-{}\"\n", revision),
            )
            .unwrap();
        scheduler.document_edited(path.clone());
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    // Final content, written before the last debounce window elapses.
    workspace
        .write_file("config.tf", "password = \"S3cr3t!9\"\n")
        .unwrap();
    scheduler.document_edited(path.clone());

    tokio::time::sleep(EDIT_WINDOW * 6).await;

    assert_eq!(
        drain_reports(&reports),
        1,
        "exactly one scan should have committed"
    );
    let report = scheduler.current_report();
    assert_eq!(report.scanned_files, 1);
    assert!(
        report
            .issues
            .iter()
            .any(|i| i.check == "HARDCODED_SECRETS"),
        "the committed scan must reflect the final content"
    );
}

/// Test 2: deleting a file clears its findings without scanning.
#[tokio::test(flavor = "multi_thread")]
async fn test_delete_clears_findings() {
    let workspace = TestWorkspace::new().unwrap();
    let scheduler = scheduler();

    let path = workspace
        .write_file("secrets.tf", "password = \"S3cr3t!9\"\n")
        .unwrap();
    scheduler.scan_now(&path).await;
    assert_eq!(scheduler.current_report().scanned_files, 1);
    assert!(!scheduler.current_report().issues.is_empty());

    workspace.remove_file("secrets.tf").unwrap();
    scheduler
        .handle_event(FileEvent::Deleted { path: path.clone() })
        .await;

    let report = scheduler.current_report();
    assert_eq!(report.scanned_files, 0);
    assert!(report.issues.is_empty());
}

/// Test 3: toggling live scanning off clears findings; toggling back on
/// rescans the workspace and repopulates them.
#[tokio::test(flavor = "multi_thread")]
async fn test_toggle_clears_and_repopulates() {
    let workspace = TestWorkspace::new().unwrap();
    let scheduler = scheduler();

    workspace
        .write_file("secrets.tf", "password = \"S3cr3t!9\"\n")
        .unwrap();
    let report = scheduler.scan_workspace(workspace.root()).await.unwrap();
    let baseline = report.issues.len();
    assert!(baseline > 0);

    scheduler.set_enabled(false).await;
    assert!(scheduler.current_report().issues.is_empty());
    assert_eq!(scheduler.current_report().scanned_files, 0);

    scheduler.set_enabled(true).await;
    let repopulated = scheduler.current_report();
    assert_eq!(repopulated.issues.len(), baseline);
}

/// Test 4: while disabled, no trigger path schedules a scan.
#[tokio::test(flavor = "multi_thread")]
async fn test_disabled_gates_all_triggers() {
    let workspace = TestWorkspace::new().unwrap();
    let scheduler = scheduler();
    scheduler.set_enabled(false).await;

    let path = workspace
        .write_file("main.tf", "password = \"S3cr3t!9\"\n")
        .unwrap();

    scheduler.document_edited(path.clone());
    scheduler
        .handle_event(FileEvent::Modified { path: path.clone() })
        .await;
    scheduler.file_saved(&path).await;
    scheduler.file_focused(&path).await;
    tokio::time::sleep(WATCH_WINDOW * 3).await;

    assert_eq!(scheduler.current_report().scanned_files, 0);
}

/// Test 5: a save triggers an immediate scan with no debounce delay.
#[tokio::test(flavor = "multi_thread")]
async fn test_save_scans_immediately() {
    let workspace = TestWorkspace::new().unwrap();
    let scheduler = scheduler();

    let path = workspace
        .write_file("main.tf", "endpoint = \"http://x\"\n")
        .unwrap();
    scheduler.file_saved(&path).await;

    let report = scheduler.current_report();
    assert_eq!(report.scanned_files, 1);
    assert!(report.issues.iter().any(|i| i.control == "SC-8"));
}

/// Reader that delays the first read long enough for a newer scan of the
/// same file to be requested and complete.
struct StaggeredReader {
    responses: Mutex<Vec<(Duration, String)>>,
}

impl ContentReader for StaggeredReader {
    fn read_to_string(&self, _path: &Path) -> std::io::Result<String> {
        let (delay, content) = {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                (Duration::ZERO, String::new())
            } else {
                responses.remove(0)
            }
        };
        std::thread::sleep(delay);
        Ok(content)
    }
}

/// Test 6: a slow stale scan completing after a newer one must not
/// overwrite the newer result.
#[tokio::test(flavor = "multi_thread")]
async fn test_stale_scan_does_not_overwrite() {
    let reader = StaggeredReader {
        responses: Mutex::new(vec![
            // First (stale) scan: slow, sees the secret.
            (
                Duration::from_millis(200),
                "password = \"S3cr3t!9\"\n".to_string(),
            ),
            // Second scan: fast, sees clean content.
            (Duration::ZERO, "clean = true\n".to_string()),
        ]),
    };
    let engine = ScanEngine::new(Catalog::load().unwrap()).with_reader(Box::new(reader));
    let scheduler = ScanScheduler::with_debounce(
        engine,
        ScanConfig::default(),
        EDIT_WINDOW,
        WATCH_WINDOW,
    );

    let path = std::path::PathBuf::from("virtual.tf");
    let slow = {
        let scheduler = scheduler.clone();
        let path = path.clone();
        tokio::spawn(async move { scheduler.scan_now(&path).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let fast = {
        let scheduler = scheduler.clone();
        let path = path.clone();
        tokio::spawn(async move { scheduler.scan_now(&path).await })
    };

    slow.await.unwrap();
    fast.await.unwrap();

    let report = scheduler.current_report();
    assert_eq!(report.scanned_files, 1);
    assert!(
        report
            .issues
            .iter()
            .all(|i| i.check != "HARDCODED_SECRETS"),
        "the stale scan's secret finding must have been dropped"
    );
}

/// Test 7: workspace scans cover matching files and honor the exclude
/// globs.
#[tokio::test(flavor = "multi_thread")]
async fn test_workspace_scan_honors_excludes() {
    let workspace = TestWorkspace::new().unwrap();
    let scheduler = scheduler();

    workspace
        .write_file("infra/main.tf", "password = \"S3cr3t!9\"\n")
        .unwrap();
    workspace
        .write_file("node_modules/dep/index.js", "password = \"S3cr3t!9\"\n")
        .unwrap();
    workspace.write_file("notes.bin", "ignored\n").unwrap();

    let report = scheduler.scan_workspace(workspace.root()).await.unwrap();
    assert_eq!(report.total_files, 1);
    assert_eq!(report.scanned_files, 1);
    assert!(report.issues.iter().all(|i| i.file.contains("main.tf")));
}
