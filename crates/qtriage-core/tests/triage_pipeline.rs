//! End-to-end pipeline: JSON report file → plan, with injected minimizers.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use qtriage_core::{
    plan_remediation, BinaryQuadraticModel, EffortBudget, ExhaustiveMinimizer, IncidentReport,
    MinimizerService, Result, Sample, TriageError, Variable,
};

fn report_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[tokio::test]
async fn plans_from_a_report_file() {
    let file = report_file(
        r#"{
            "issues": [
                {"severity": "BLOCKER", "effort": "50min"},
                {"severity": "INFO", "effort": "10min"},
                {"severity": "MAJOR", "effort": "80min"}
            ]
        }"#,
    );
    let report = IncidentReport::from_path(file.path()).unwrap();
    assert_eq!(report.issues.len(), 3);

    let plan = plan_remediation(
        &report,
        EffortBudget::default(),
        &ExhaustiveMinimizer::new(),
        Some(Duration::from_secs(30)),
    )
    .await
    .unwrap();

    assert_eq!(plan.energy, -140.0);
    assert_eq!(plan.selected, vec![0, 1, 2]);
}

#[tokio::test]
async fn unrecognized_fields_degrade_instead_of_failing() {
    let file = report_file(
        r#"{
            "issues": [
                {"severity": "URGENT", "effort": "2h"},
                {"severity": "MINOR", "effort": "20min"}
            ]
        }"#,
    );
    let report = IncidentReport::from_path(file.path()).unwrap();

    // Incident 0 normalizes to cost 0 / weight 0 and must not error.
    let plan = plan_remediation(
        &report,
        EffortBudget::default(),
        &ExhaustiveMinimizer::new(),
        None,
    )
    .await
    .unwrap();
    assert!(plan.selected.iter().all(|&i| i < 2));
}

#[test]
fn malformed_json_is_fatal() {
    let file = report_file(r#"{"issues": ["#);
    let result = IncidentReport::from_path(file.path());
    assert!(matches!(result, Err(TriageError::Serialization(_))));
}

#[test]
fn missing_file_is_fatal() {
    let result = IncidentReport::from_path(std::path::Path::new("/nonexistent/report.json"));
    assert!(matches!(result, Err(TriageError::Io(_))));
}

/// A canned backend standing in for any external service, proving the
/// boundary is injectable.
struct CannedMinimizer {
    sample: Sample,
}

#[async_trait]
impl MinimizerService for CannedMinimizer {
    async fn minimize(&self, _model: &BinaryQuadraticModel) -> Result<Sample> {
        Ok(self.sample.clone())
    }
}

#[tokio::test]
async fn injected_backend_drives_the_plan() {
    let report = IncidentReport {
        issues: vec![
            qtriage_core::Incident {
                severity: Some("MAJOR".to_string()),
                effort: "30min".to_string(),
            },
            qtriage_core::Incident {
                severity: Some("INFO".to_string()),
                effort: "5min".to_string(),
            },
        ],
    };

    // The canned sample sets a slack bit too; it must not leak into the
    // selection.
    let mut assignment = BTreeMap::new();
    assignment.insert(Variable::Decision(0), 1);
    assignment.insert(Variable::Decision(1), 0);
    assignment.insert(Variable::Slack(2), 1);
    let backend = CannedMinimizer {
        sample: Sample {
            assignment,
            energy: -42.0,
        },
    };

    let plan = plan_remediation(&report, EffortBudget::default(), &backend, None)
        .await
        .unwrap();
    assert_eq!(plan.energy, -42.0);
    assert_eq!(plan.selected, vec![0]);
}

#[tokio::test]
async fn solver_failure_surfaces_unretried() {
    struct CountingFailure {
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl MinimizerService for CountingFailure {
        async fn minimize(&self, _model: &BinaryQuadraticModel) -> Result<Sample> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Err(TriageError::SolverUnavailable("sampler offline".to_string()))
        }
    }

    let backend = CountingFailure {
        calls: std::sync::atomic::AtomicUsize::new(0),
    };
    let report = IncidentReport {
        issues: vec![qtriage_core::Incident {
            severity: Some("INFO".to_string()),
            effort: "5min".to_string(),
        }],
    };

    let result = plan_remediation(&report, EffortBudget::default(), &backend, None).await;
    assert!(matches!(result, Err(TriageError::SolverUnavailable(_))));
    assert_eq!(backend.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}
