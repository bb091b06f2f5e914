//! Integration tests for the summary report, snapshots and config.

use shelfgrid::config::MatrixConfig;
use shelfgrid::store::DEFAULT_SIZE;
use shelfgrid::{LibraryMatrix, MatrixError, MatrixOperations, MatrixSnapshot, SummaryReport};

fn matrix(rows: Vec<Vec<f64>>, labels: &[&str]) -> LibraryMatrix {
    LibraryMatrix::from_rows(rows, labels.iter().map(|s| s.to_string()).collect()).unwrap()
}

// ---------------------------------------------------------------------------
// Summary report
// ---------------------------------------------------------------------------

#[test]
fn report_composes_primitives() {
    let m = matrix(vec![vec![4.0, 3.0], vec![6.0, 3.0]], &["Fiction", "Science"]);
    let report = m.summary_report();

    assert_eq!(report.size, 2);
    assert_eq!(report.row_sums, m.row_sums());
    assert_eq!(report.col_sums, m.col_sums());
    assert_eq!(report.row_averages, m.row_averages());
    assert_eq!(report.col_averages, m.col_averages());
    assert_eq!(report.determinant, m.determinant());
    assert_eq!(report.total_count, 16.0);
    assert_eq!(report.peak_column_index, 0);
    assert_eq!(report.peak_row_index, 1);
    assert_eq!(report.peak_row_label, "Science");
    assert_eq!(report.peak_column_total(), 10.0);
    assert_eq!(report.peak_row_total(), 9.0);
    assert_eq!(report.average_per_column(), 8.0);
    assert_eq!(report.cells, vec![vec![4.0, 3.0], vec![6.0, 3.0]]);
}

#[test]
fn peak_column_ties_resolve_to_lowest_index() {
    // column sums are [5, 5, 3]
    let m = matrix(
        vec![
            vec![2.0, 4.0, 1.0],
            vec![3.0, 1.0, 1.0],
            vec![0.0, 0.0, 1.0],
        ],
        &["a", "b", "c"],
    );
    assert_eq!(m.col_sums().to_vec(), vec![5.0, 5.0, 3.0]);
    assert_eq!(m.summary_report().peak_column_index, 0);
}

#[test]
fn peak_row_ties_resolve_to_first_label() {
    let m = matrix(vec![vec![1.0, 1.0], vec![2.0, 0.0]], &["Travel", "Music"]);
    let report = m.summary_report();
    assert_eq!(report.peak_row_index, 0);
    assert_eq!(report.peak_row_label, "Travel");
}

#[test]
fn report_total_matches_both_axes() {
    let (m, _) = MatrixConfig::new(12).with_seed(3).build().unwrap();
    let report = m.summary_report();
    assert_eq!(report.total_count, report.row_sums.sum());
    assert_eq!(report.total_count, report.col_sums.sum());
}

#[test]
fn report_serializes_expected_fields() {
    let m = matrix(vec![vec![1.0]], &["Law"]);
    let json = serde_json::to_value(m.summary_report()).unwrap();
    for field in [
        "size",
        "row_sums",
        "col_sums",
        "row_averages",
        "col_averages",
        "determinant",
        "total_count",
        "peak_column_index",
        "peak_row_label",
        "cells",
    ] {
        assert!(json.get(field).is_some(), "missing {}", field);
    }
    assert_eq!(json["peak_row_label"], "Law");
}

#[test]
fn report_keeps_overflowing_determinant_through_json() {
    let m = matrix(vec![vec![1e200, 0.0], vec![0.0, 1e200]], &["Law", "Arts"]);
    let report = m.summary_report();
    assert_eq!(report.determinant, f64::INFINITY);

    let text = serde_json::to_string(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["determinant"], "Infinity");

    let parsed: SummaryReport = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn report_determinant_text_covers_every_non_finite_value() {
    let mut report = matrix(vec![vec![1.0]], &["Law"]).summary_report();
    for (value, text) in [
        (f64::NEG_INFINITY, "-Infinity"),
        (f64::NAN, "NaN"),
        (-6.0, "-6.0"),
    ] {
        report.determinant = value;
        let encoded = serde_json::to_string(&report).unwrap();
        let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(json["determinant"].to_string().trim_matches('"'), text);

        let parsed: SummaryReport = serde_json::from_str(&encoded).unwrap();
        if value.is_nan() {
            assert!(parsed.determinant.is_nan());
        } else {
            assert_eq!(parsed.determinant, value);
        }
    }
}

#[test]
fn report_rejects_unknown_determinant_text() {
    let report = matrix(vec![vec![1.0]], &["Law"]).summary_report();
    let mut json = serde_json::to_value(&report).unwrap();
    json["determinant"] = serde_json::json!("huge");
    assert!(serde_json::from_value::<SummaryReport>(json).is_err());
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn snapshot_restores_matrix() {
    let (m, _) = MatrixConfig::new(4).with_seed(11).build().unwrap();
    let snapshot = MatrixSnapshot::from(&m);
    assert_eq!(snapshot.size, 4);
    assert_eq!(snapshot.labels.len(), 4);

    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: MatrixSnapshot = serde_json::from_str(&json).unwrap();
    let restored = LibraryMatrix::try_from(parsed).unwrap();
    assert_eq!(restored, m);
}

#[test]
fn snapshot_with_wrong_row_count_is_rejected() {
    let snapshot = MatrixSnapshot {
        size: 3,
        cells: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        labels: vec!["a".into(), "b".into()],
    };
    assert!(matches!(
        LibraryMatrix::try_from(snapshot),
        Err(MatrixError::Shape(_))
    ));
}

#[test]
fn snapshot_with_wrong_label_count_is_rejected() {
    let snapshot = MatrixSnapshot {
        size: 2,
        cells: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        labels: vec!["a".into()],
    };
    assert_eq!(
        LibraryMatrix::try_from(snapshot),
        Err(MatrixError::LabelCount {
            expected: 2,
            found: 1
        })
    );
}

// ---------------------------------------------------------------------------
// MatrixConfig
// ---------------------------------------------------------------------------

#[test]
fn config_default_values() {
    let cfg = MatrixConfig::default();
    assert_eq!(cfg.size, DEFAULT_SIZE);
    assert!(cfg.labels.is_none());
    assert!(cfg.seed.is_none());
    assert_eq!(cfg.resolved_labels().len(), DEFAULT_SIZE);
}

#[test]
fn config_seed_is_reproducible() {
    let (a, _) = MatrixConfig::new(6).with_seed(42).build().unwrap();
    let (b, _) = MatrixConfig::new(6).with_seed(42).build().unwrap();
    assert_eq!(a, b);
}

#[test]
fn config_custom_labels_are_used() {
    let cfg = MatrixConfig {
        size: 2,
        labels: Some(vec!["Mon".into(), "Tue".into()]),
        seed: Some(1),
    };
    let (m, _) = cfg.build().unwrap();
    assert_eq!(m.labels(), &["Mon".to_string(), "Tue".to_string()]);
}

#[test]
fn config_zero_size_fails() {
    let err = MatrixConfig::new(0).build().unwrap_err();
    assert_eq!(err, MatrixError::InvalidSize(0));
}

#[test]
fn config_partial_json_uses_defaults() {
    let cfg: MatrixConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
    assert_eq!(cfg.size, DEFAULT_SIZE);
    assert_eq!(cfg.seed, Some(5));
}
