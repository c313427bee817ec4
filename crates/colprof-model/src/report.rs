//! Flat, serializable views of analyzed columns for renderers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::column::{Column, ColumnType, ValueCount};
use crate::dataset::{Dataset, InvalidRow};
use crate::number::Number;

/// One analyzed column as a flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnReport {
    pub header: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub empty: bool,
    pub mode: Option<String>,
    pub min: Option<Number>,
    pub max: Option<Number>,
    /// Mean in fixed 5-decimal form.
    pub mean: Option<String>,
    pub median_low: Option<Number>,
    pub median: Option<Number>,
    pub median_high: Option<Number>,
    pub outlier_count: usize,
    pub most_common: Vec<ValueCount>,
}

impl ColumnReport {
    pub fn from_column(column: &Column) -> Self {
        let numeric = column.analysis.as_ref().and_then(Analysis::as_numeric);
        Self {
            header: column.header.clone(),
            column_type: column.column_type,
            empty: column.empty,
            mode: column.analysis.as_ref().map(Analysis::mode_text),
            min: numeric.map(|a| a.min),
            max: numeric.map(|a| a.max),
            mean: numeric.map(|a| a.mean_text()),
            median_low: numeric.map(|a| a.median_low),
            median: numeric.map(|a| a.median),
            median_high: numeric.map(|a| a.median_high),
            outlier_count: column.outliers.len(),
            most_common: column.most_common.clone(),
        }
    }
}

/// A column failure in reportable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    pub column_index: usize,
    pub header: String,
    pub message: String,
}

/// Whole-dataset view: source, row diagnostics and column reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReport {
    pub source: Option<PathBuf>,
    pub headers: Vec<String>,
    pub valid_row_count: usize,
    pub invalid_rows: Vec<InvalidRow>,
    pub columns: Vec<ColumnReport>,
    pub failures: Vec<FailureReport>,
}

impl DatasetReport {
    /// Build a report from an analyzed dataset; failures come from each
    /// column's recorded issues.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let failures = dataset
            .columns
            .iter()
            .enumerate()
            .flat_map(|(idx, column)| {
                column.issues.iter().map(move |issue| FailureReport {
                    column_index: idx,
                    header: column.header.clone(),
                    message: issue.to_string(),
                })
            })
            .collect();
        Self {
            source: dataset.source.clone(),
            headers: dataset.headers.clone(),
            valid_row_count: dataset.row_count(),
            invalid_rows: dataset.invalid_rows.clone(),
            columns: dataset.columns.iter().map(ColumnReport::from_column).collect(),
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EnumAnalysis, Mode};

    #[test]
    fn enum_column_has_mode_but_no_numbers() {
        let mut column = Column::with_values("color", ["red", "red", "blue"]);
        column.column_type = ColumnType::Enum;
        column.most_common = vec![ValueCount::new("red", 2), ValueCount::new("blue", 1)];
        column.analysis = Some(Analysis::Enum(EnumAnalysis {
            mode: Mode::Unique("red".to_string()),
        }));

        let report = ColumnReport::from_column(&column);
        assert_eq!(report.mode.as_deref(), Some("red"));
        assert!(report.min.is_none());
        assert!(report.mean.is_none());
        assert_eq!(report.outlier_count, 0);
        assert_eq!(report.most_common.len(), 2);
    }

    #[test]
    fn report_serializes_type_key() {
        let report = ColumnReport::from_column(&Column::new("x"));
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["type"], "Unclassified");
        assert_eq!(json["outlierCount"], 0);
        assert!(json["mode"].is_null());
    }
}
