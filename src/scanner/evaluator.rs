//! Line-oriented pattern evaluation for control checks.
//!
//! Every candidate check runs against every line of the file; a match
//! produces at most one issue per (check, line). Broad topic-matching
//! controls are additionally gated by an indicator predicate that decides
//! whether the matched line actually shows a violation rather than merely
//! mentioning the topic.

use std::collections::HashMap;

use crate::models::{ComplianceIssue, Control, ControlCheck};

/// Predicate over the lowercased text of a matched line.
pub type LinePredicate = fn(&str) -> bool;

/// Mapping from control id to its violation-indicator predicate.
///
/// Controls without an entry accept pattern matches directly; their
/// patterns are already violation-shaped. The table is injected into the
/// evaluator so hosts can extend it without touching the match loop.
pub struct IndicatorTable {
    predicates: HashMap<String, LinePredicate>,
}

impl IndicatorTable {
    pub fn empty() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    /// The built-in table covering the broad FedRAMP topic controls.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert("SC-8", indicates_insecure_transmission);
        table.insert("SC-28", indicates_unencrypted_storage);
        table.insert("AC-3", indicates_permissive_access);
        table.insert("IA-2", indicates_missing_authentication);
        table
    }

    pub fn insert(&mut self, control_id: &str, predicate: LinePredicate) {
        self.predicates.insert(control_id.to_string(), predicate);
    }

    /// Whether a matched line is accepted as a violation of the control.
    pub fn permits(&self, control_id: &str, line: &str) -> bool {
        match self.predicates.get(control_id) {
            Some(predicate) => predicate(&line.to_lowercase()),
            None => true,
        }
    }
}

fn indicates_insecure_transmission(line: &str) -> bool {
    line.contains("http:") || line.contains("ssl = false") || line.contains("encryption = false")
}

fn indicates_unencrypted_storage(line: &str) -> bool {
    line.contains("encrypted = false") || line.contains("encryption: false")
}

fn indicates_permissive_access(line: &str) -> bool {
    line.contains("0.0.0.0/0") || line.contains('*')
}

fn indicates_missing_authentication(line: &str) -> bool {
    line.contains("anonymous") || line.contains("public")
}

/// Run one check over the file content. Lines are 0-based internally and
/// reported 1-based; the column is the byte offset of the match start.
pub fn evaluate_check(
    control: &Control,
    check: &ControlCheck,
    file: &str,
    lines: &[&str],
    indicators: &IndicatorTable,
) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(found) = check.pattern.find(line) else {
            continue;
        };
        if !indicators.permits(&control.id, line) {
            continue;
        }

        issues.push(ComplianceIssue {
            control: control.id.clone(),
            check: check.id.clone(),
            file: file.to_string(),
            line: idx + 1,
            column: found.start(),
            severity: check.effective_severity(control.severity),
            message: check.message.clone(),
            remediation: check.remediation.clone(),
        });
    }

    issues
}
