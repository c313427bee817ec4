//! Analysis entry points: run profiling, classification, outlier detection
//! and statistics over every column.

use std::collections::BTreeMap;

use colprof_model::{Column, ColumnError, ColumnType, ConfigError, Dataset, ProfileConfig};
use rayon::prelude::*;
use tracing::{debug, debug_span, info, info_span, warn};

use crate::classify::classify;
use crate::clean::{CleanSummary, clean};
use crate::frequency::profile_frequencies;
use crate::outliers::detect_outliers;
use crate::stats::analyze_statistics;

/// A column whose analysis stopped early.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFailure {
    pub index: usize,
    pub error: ColumnError,
}

/// Outcome of [`analyze`] across all columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    pub columns: usize,
    pub empty_columns: usize,
    /// Columns per assigned type, empty and failed columns excluded.
    pub type_counts: BTreeMap<ColumnType, usize>,
    pub failures: Vec<ColumnFailure>,
}

impl AnalysisReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Analyze one column in place.
///
/// Derived fields are reset first, so analyzing twice gives the same result.
/// Fatal errors are returned and also recorded in `column.issues`.
pub fn analyze_column(column: &mut Column, config: &ProfileConfig) -> Result<(), ColumnError> {
    column.reset_analysis();
    if let Err(error) = profile_frequencies(column, config) {
        column.issues.push(error.clone());
        return Err(error);
    }
    if column.empty {
        debug!(column = %column.header, "column is effectively empty");
        return Ok(());
    }
    column.column_type = classify(column, config);
    detect_outliers(column);
    match analyze_statistics(column) {
        Ok(analysis) => column.analysis = analysis,
        Err(error) => {
            column.issues.push(error.clone());
            return Err(error);
        }
    }
    debug!(
        column = %column.header,
        column_type = %column.column_type,
        distinct = column.most_common.len(),
        missing = column.missing_count(),
        outliers = column.outliers.len(),
        "analyzed column"
    );
    Ok(())
}

fn run_column(index: usize, column: &mut Column, config: &ProfileConfig) -> Option<ColumnFailure> {
    let span = debug_span!("column", index, header = %column.header);
    let _guard = span.enter();
    analyze_column(column, config).err().map(|error| {
        warn!(%error, "column analysis failed");
        ColumnFailure { index, error }
    })
}

/// Analyze every column of the dataset in place.
///
/// Columns are independent: a failure in one is recorded and the others
/// carry on. With `config.parallel` set, columns run on the rayon pool.
pub fn analyze(
    dataset: &mut Dataset,
    config: &ProfileConfig,
) -> Result<AnalysisReport, ConfigError> {
    config.validate()?;
    let span = info_span!(
        "analyze",
        columns = dataset.columns.len(),
        parallel = config.parallel
    );
    let _guard = span.enter();

    let failures: Vec<ColumnFailure> = if config.parallel {
        dataset
            .columns
            .par_iter_mut()
            .enumerate()
            .filter_map(|(index, column)| run_column(index, column, config))
            .collect()
    } else {
        dataset
            .columns
            .iter_mut()
            .enumerate()
            .filter_map(|(index, column)| run_column(index, column, config))
            .collect()
    };

    let mut report = AnalysisReport {
        columns: dataset.columns.len(),
        failures,
        ..AnalysisReport::default()
    };
    for (index, column) in dataset.columns.iter().enumerate() {
        if column.empty {
            report.empty_columns += 1;
        } else if !report.failures.iter().any(|f| f.index == index) {
            *report.type_counts.entry(column.column_type).or_default() += 1;
        }
    }
    info!(
        columns = report.columns,
        empty_columns = report.empty_columns,
        failed_columns = report.failures.len(),
        "analysis complete"
    );
    Ok(report)
}

/// Clean then analyze, the fixed order a dataset goes through after loading.
pub fn profile(
    dataset: &mut Dataset,
    config: &ProfileConfig,
) -> Result<(CleanSummary, AnalysisReport), ConfigError> {
    config.validate()?;
    let cleaned = clean(dataset, config);
    let report = analyze(dataset, config)?;
    Ok((cleaned, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(columns: Vec<Column>) -> Dataset {
        Dataset {
            headers: columns.iter().map(|c| c.header.clone()).collect(),
            columns,
            ..Dataset::default()
        }
    }

    #[test]
    fn failing_column_does_not_stop_siblings() {
        let mut data = dataset(vec![
            Column::new("blank"),
            Column::with_values("n", ["1", "2", "3"]),
        ]);
        let report = analyze(&mut data, &ProfileConfig::default()).expect("valid config");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 0);
        assert!(matches!(
            report.failures[0].error,
            ColumnError::Profiling { .. }
        ));
        assert_eq!(data.columns[0].issues.len(), 1);
        assert_eq!(data.columns[1].column_type, ColumnType::Integer);
        assert_eq!(report.type_counts.get(&ColumnType::Integer), Some(&1));
    }

    #[test]
    fn analyzing_twice_is_stable() {
        let mut data = dataset(vec![Column::with_values(
            "f",
            ["1.5", "x", "2.5", "3.5", "4.5", "5.5", "6.5", "7.5", "8.5", "9.5"],
        )]);
        let config = ProfileConfig::default();
        analyze(&mut data, &config).expect("first run");
        let first = data.clone();
        analyze(&mut data, &config).expect("second run");
        assert_eq!(data, first);
        assert_eq!(data.columns[0].outliers, vec!["x"]);
    }

    #[test]
    fn empty_columns_are_not_classified() {
        let mut data = dataset(vec![Column::with_values("e", vec![String::new(); 10])]);
        let report = analyze(&mut data, &ProfileConfig::default()).expect("analyze");
        assert_eq!(report.empty_columns, 1);
        assert_eq!(data.columns[0].column_type, ColumnType::Unclassified);
        assert!(data.columns[0].analysis.is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut data = dataset(vec![Column::with_values("n", ["1"])]);
        let config = ProfileConfig::default().with_type_threshold(2.0);
        assert!(analyze(&mut data, &config).is_err());
    }
}
