//! Report invariant tests.
//!
//! The summary partition, coverage bounds and the bounded risk score,
//! verified over a mixed workspace scanned end to end.

mod common;

use common::TestWorkspace;
use rampart::{scan_file, scan_workspace, Report, ScanConfig, Standard};

fn mixed_workspace() -> TestWorkspace {
    let workspace = TestWorkspace::new().unwrap();
    workspace
        .write_file(
            "infra/db.tf",
            "storage_encrypted = false\nendpoint = \"http://db.internal\"\npassword = \"S3cr3t!9\"\n",
        )
        .unwrap();
    workspace
        .write_file(
            "deploy/pod.yaml",
            "apiVersion: v1\nkind: Pod\nspec:\n  privileged: true\n  runAsUser: 0\n",
        )
        .unwrap();
    workspace
        .write_file("README.md", "ingress { cidr_blocks = [\"0.0.0.0/0\"] }\n")
        .unwrap();
    workspace
}

async fn scan(workspace: &TestWorkspace, config: ScanConfig) -> Report {
    scan_workspace(workspace.root(), config).await.unwrap()
}

/// Test 1: errors + warnings + info always equals the issue count.
#[tokio::test(flavor = "multi_thread")]
async fn test_summary_partition_equals_issue_count() {
    let workspace = mixed_workspace();
    let report = scan(&workspace, ScanConfig::default()).await;

    assert!(!report.issues.is_empty());
    assert_eq!(
        report.summary.errors + report.summary.warnings + report.summary.info,
        report.issues.len()
    );
    let (errors, warnings, info) = report.severity_partition();
    assert_eq!(report.summary.errors, errors);
    assert_eq!(report.summary.warnings, warnings);
    assert_eq!(report.summary.info, info);
}

/// Test 2: covered controls never exceed the controls in scope plus the
/// synthesized security categories.
#[tokio::test(flavor = "multi_thread")]
async fn test_coverage_bounds() {
    let workspace = mixed_workspace();
    let report = scan(&workspace, ScanConfig::default()).await;

    let distinct: std::collections::HashSet<_> =
        report.issues.iter().map(|i| i.control.clone()).collect();
    assert_eq!(report.summary.controls_covered, distinct.len());

    let native: std::collections::HashSet<_> = report
        .issues
        .iter()
        .filter(|i| !i.control.starts_with("SEC-"))
        .map(|i| i.control.clone())
        .collect();
    assert!(native.len() <= report.summary.total_controls);
}

/// Test 3: the total-controls denominator sums the selected standards and
/// is independent of findings.
#[tokio::test(flavor = "multi_thread")]
async fn test_total_controls_static() {
    let workspace = TestWorkspace::new().unwrap();
    workspace.write_file("empty.tf", "\n").unwrap();

    let mut config = ScanConfig::default();
    config.standards = vec![Standard::FedRamp, Standard::Gdpr, Standard::Soc2];
    let report = scan(&workspace, config).await;

    // 11 FedRAMP at Moderate + 4 GDPR + 3 SOC-2.
    assert_eq!(report.summary.total_controls, 18);
}

/// Test 4: the risk score saturates at 100.
#[test]
fn test_risk_score_clamped() {
    let workspace = TestWorkspace::new().unwrap();
    let mut manifest = String::from("apiVersion: v1\nkind: Pod\nspec:\n");
    for _ in 0..6 {
        manifest.push_str("  privileged: true\n");
    }
    let path = workspace.write_file("pod.yaml", &manifest).unwrap();

    let scan = scan_file(&path, &ScanConfig::default()).unwrap();
    let security = scan.security.unwrap();
    assert!(security.vulnerabilities.len() >= 6);
    assert_eq!(security.risk_score, 100);
}

/// Test 5: scanning an unchanged workspace twice produces the same finding
/// set.
#[tokio::test(flavor = "multi_thread")]
async fn test_rescan_is_stable() {
    let workspace = mixed_workspace();

    let first = scan(&workspace, ScanConfig::default()).await;
    let second = scan(&workspace, ScanConfig::default()).await;

    assert_eq!(first.issues, second.issues);
    assert_eq!(first.summary.errors, second.summary.errors);
    assert_eq!(first.summary.controls_covered, second.summary.controls_covered);
}

/// Test 6: vulnerability findings map into the report's error buckets with
/// synthesized SEC- control ids.
#[tokio::test(flavor = "multi_thread")]
async fn test_vulnerability_bucket_mapping() {
    let workspace = TestWorkspace::new().unwrap();
    workspace
        .write_file("secrets.tf", "password = \"S3cr3t!9\"\n")
        .unwrap();

    let report = scan(&workspace, ScanConfig::default()).await;
    let security_issues: Vec<_> = report
        .issues
        .iter()
        .filter(|i| i.control.starts_with("SEC-"))
        .collect();
    assert!(!security_issues.is_empty());
    assert!(security_issues
        .iter()
        .any(|i| i.control == "SEC-secrets" && i.severity == rampart::Severity::Error));
    assert!(security_issues
        .iter()
        .all(|i| i.message.starts_with("Security Vulnerability: ")));
}
