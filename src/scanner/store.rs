//! Keyed per-file result store.
//!
//! One slot per file path, replaced whole on commit; a report snapshot can
//! never observe a half-updated file. Each slot carries a monotonically
//! increasing requested-generation counter: a completing scan commits only
//! if its generation is still the newest requested for that path, so a slow
//! stale scan can never overwrite a newer result.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::models::{ComplianceIssue, VulnerabilityIssue};
use crate::scanner::engine::FileScan;

#[derive(Default)]
struct Slot {
    requested: u64,
    committed: Option<FileScan>,
}

/// Consistent view of all committed per-file results.
pub struct StoreSnapshot {
    pub scanned_files: usize,
    pub issues: Vec<ComplianceIssue>,
    pub vulnerabilities: Vec<VulnerabilityIssue>,
}

#[derive(Default)]
pub struct ResultStore {
    slots: Mutex<HashMap<PathBuf, Slot>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new scan request for a path and return its generation.
    pub fn begin_scan(&self, path: &Path) -> u64 {
        let mut slots = self.slots.lock().unwrap();
        let slot = slots.entry(path.to_path_buf()).or_default();
        slot.requested += 1;
        slot.requested
    }

    /// Commit a completed scan. Returns false (and drops the result) when a
    /// newer scan has been requested for the path since this one started, or
    /// when the path was deleted mid-scan.
    pub fn commit(&self, path: &Path, generation: u64, scan: FileScan) -> bool {
        let mut slots = self.slots.lock().unwrap();
        match slots.get_mut(path) {
            Some(slot) if slot.requested == generation => {
                slot.committed = Some(scan);
                true
            }
            _ => false,
        }
    }

    /// Drop a file's slot entirely. Returns true if a slot existed.
    pub fn remove(&self, path: &Path) -> bool {
        self.slots.lock().unwrap().remove(path).is_some()
    }

    pub fn clear(&self) {
        self.slots.lock().unwrap().clear();
    }

    /// Snapshot all committed results, ordered by file path so reports are
    /// stable across identical store states.
    pub fn snapshot(&self) -> StoreSnapshot {
        let slots = self.slots.lock().unwrap();

        let mut committed: Vec<(&PathBuf, &FileScan)> = slots
            .iter()
            .filter_map(|(path, slot)| slot.committed.as_ref().map(|scan| (path, scan)))
            .collect();
        committed.sort_by(|a, b| a.0.cmp(b.0));

        let mut issues = Vec::new();
        let mut vulnerabilities = Vec::new();
        for (_, scan) in &committed {
            issues.extend(scan.result.issues.iter().cloned());
            if let Some(security) = &scan.security {
                vulnerabilities.extend(security.vulnerabilities.iter().cloned());
            }
        }

        StoreSnapshot {
            scanned_files: committed.len(),
            issues,
            vulnerabilities,
        }
    }
}
