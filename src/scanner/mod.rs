//! Scan engine internals.
//!
//! Applicability gates, pattern evaluation, context heuristics, security
//! pass, aggregation, the per-file result store, the incremental scan
//! scheduler and the filesystem watcher.

pub mod aggregate;
pub mod applicability;
pub mod engine;
pub mod evaluator;
pub mod heuristics;
pub mod scheduler;
pub mod security;
pub mod store;
pub mod watcher;

pub use applicability::{classify_file, FileClass};
pub use engine::{ContentReader, FileScan, FsReader, ScanEngine};
pub use evaluator::IndicatorTable;
pub use scheduler::{EventSource, ScanScheduler, EDIT_DEBOUNCE, WATCH_DEBOUNCE};
pub use store::ResultStore;
pub use watcher::{FileEvent, FileWatcher, WatcherHandle};
