//! Tests for colprof-model types.

use colprof_model::{
    Analysis, ColumnReport, ColumnType, Dataset, DatasetReport, InvalidRow, Mode, Number,
    NumericAnalysis, ValueCount, is_float_literal, is_integer_literal,
};
use colprof_model::{Column, ColumnError};
use proptest::prelude::*;

fn numeric_column() -> Column {
    let mut column = Column::with_values("n", ["1", "2", "x"]);
    column.column_type = ColumnType::Integer;
    column.outliers = vec!["x".to_string()];
    column.most_common = vec![
        ValueCount::new("1", 1),
        ValueCount::new("2", 1),
        ValueCount::new("x", 1),
    ];
    column.analysis = Some(Analysis::Numeric(NumericAnalysis {
        count: 2,
        mode: Mode::NoUniqueMode,
        min: Number::Integer(1),
        max: Number::Integer(2),
        mean: 1.5,
        median_low: Number::Integer(1),
        median: Number::Float(1.5),
        median_high: Number::Integer(2),
    }));
    column
}

#[test]
fn numeric_report_carries_statistics() {
    let report = ColumnReport::from_column(&numeric_column());
    assert_eq!(report.column_type, ColumnType::Integer);
    assert_eq!(report.mode.as_deref(), Some("N/A"));
    assert_eq!(report.min, Some(Number::Integer(1)));
    assert_eq!(report.mean.as_deref(), Some("1.50000"));
    assert_eq!(report.median, Some(Number::Float(1.5)));
    assert_eq!(report.outlier_count, 1);
}

#[test]
fn dataset_report_collects_column_issues() {
    let mut broken = Column::new("blank");
    broken.issues.push(ColumnError::Profiling {
        header: "blank".to_string(),
    });
    let dataset = Dataset {
        headers: vec!["n".into(), "blank".into()],
        columns: vec![numeric_column(), broken],
        invalid_rows: vec![InvalidRow {
            position: 3,
            line: Some(3),
            fields: vec!["only".into()],
        }],
        ..Dataset::default()
    };

    let report = DatasetReport::from_dataset(&dataset);
    assert_eq!(report.columns.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].column_index, 1);
    assert_eq!(report.invalid_rows[0].position, 3);

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["columns"][0]["medianHigh"], 2);
    assert_eq!(json["columns"][0]["median"], 1.5);
    assert_eq!(json["invalidRows"][0]["fields"][0], "only");
}

#[test]
fn analysis_serializes_with_kind_tag() {
    let analysis = numeric_column().analysis.expect("analysis");
    let json = serde_json::to_value(&analysis).expect("serialize analysis");
    assert_eq!(json["kind"], "numeric");
    assert_eq!(json["medianLow"], 1);
}

proptest! {
    #[test]
    fn unsigned_integers_match_integer_pattern(n in any::<u64>()) {
        let text = n.to_string();
        prop_assert!(is_integer_literal(&text));
        prop_assert!(!is_float_literal(&text));
    }

    #[test]
    fn decimal_fractions_match_float_pattern(whole in 0u32..100_000, frac in 0u32..1000) {
        let text = format!("{whole}.{frac:03}");
        prop_assert!(is_float_literal(&text));
        prop_assert!(Number::parse_as(&text, ColumnType::Float).is_ok());
    }
}
