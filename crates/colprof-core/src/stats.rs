//! Statistical analysis dispatched on the column type.

use std::collections::HashMap;
use std::hash::Hash;

use colprof_model::{
    Analysis, Column, ColumnError, ColumnType, EnumAnalysis, Mode, Number, NumberError,
    NumericAnalysis, StringAnalysis,
};
use tracing::warn;

/// Unique most frequent item, or [`Mode::NoUniqueMode`] when the highest
/// count is shared or there are no items.
pub fn unique_mode<T, K, F>(items: &[T], key: F) -> Mode<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        counts.entry(key(item)).or_insert((0, idx)).0 += 1;
    }
    let Some(best) = counts.values().map(|&(count, _)| count).max() else {
        return Mode::NoUniqueMode;
    };
    let mut winners = counts.values().filter(|&&(count, _)| count == best);
    match (winners.next(), winners.next()) {
        (Some(&(_, first)), None) => Mode::Unique(items[first].clone()),
        _ => Mode::NoUniqueMode,
    }
}

/// Mode of raw text values.
pub fn text_mode(values: &[String]) -> Mode<String> {
    unique_mode(values, Clone::clone)
}

/// Hashable identity of a number; floats compare by bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum NumberKey {
    Integer(i64),
    Float(u64),
}

fn number_key(number: &Number) -> NumberKey {
    match *number {
        Number::Integer(v) => NumberKey::Integer(v),
        Number::Float(v) => NumberKey::Float(v.to_bits()),
    }
}

/// Mean rounded half-to-even to 5 decimal places.
fn rounded_mean(numbers: &[Number]) -> f64 {
    let count = numbers.len() as f64;
    let mean = if numbers.iter().all(|n| matches!(n, Number::Integer(_))) {
        let sum: i128 = numbers
            .iter()
            .map(|n| match n {
                Number::Integer(v) => i128::from(*v),
                Number::Float(_) => 0,
            })
            .sum();
        sum as f64 / count
    } else {
        numbers.iter().map(|n| n.as_f64()).sum::<f64>() / count
    };
    format!("{mean:.5}").parse().unwrap_or(mean)
}

/// Mode, extremes, rounded mean and median family of a set of numbers.
///
/// Returns `None` for an empty slice.
pub fn summarize(numbers: &[Number]) -> Option<NumericAnalysis> {
    if numbers.is_empty() {
        return None;
    }
    let mut sorted = numbers.to_vec();
    sorted.sort_by(Number::total_cmp);
    let n = sorted.len();
    let (median_low, median, median_high) = if n % 2 == 1 {
        let mid = sorted[n / 2];
        (mid, mid, mid)
    } else {
        let low = sorted[n / 2 - 1];
        let high = sorted[n / 2];
        (low, low.midpoint(high), high)
    };
    Some(NumericAnalysis {
        count: n,
        mode: unique_mode(numbers, number_key),
        min: sorted[0],
        max: sorted[n - 1],
        mean: rounded_mean(numbers),
        median_low,
        median,
        median_high,
    })
}

/// Coerce the column's values and summarize them.
///
/// Values failing the type pattern are already outliers and are skipped.
/// Values that match but still fail to coerce become outliers too and are
/// recorded as coercion issues on the column.
fn numeric_analysis(column: &mut Column) -> Result<NumericAnalysis, ColumnError> {
    let column_type = column.column_type;
    let mut numbers = Vec::with_capacity(column.values.len());
    let mut rejected: Vec<usize> = Vec::new();
    for (idx, value) in column.values.iter().enumerate() {
        match Number::parse_as(value, column_type) {
            Ok(number) => numbers.push(number),
            Err(NumberError::PatternMismatch { .. }) => {}
            Err(source) => {
                warn!(column = %column.header, row = idx + 1, %source, "value excluded from statistics");
                column.issues.push(ColumnError::Coercion {
                    header: column.header.clone(),
                    value: value.clone(),
                    source,
                });
                rejected.push(idx);
            }
        }
    }
    if !rejected.is_empty() {
        column.outliers = column
            .values
            .iter()
            .enumerate()
            .filter(|(idx, value)| {
                rejected.contains(idx) || column_type.validates(value) == Some(false)
            })
            .map(|(_, value)| value.clone())
            .collect();
    }
    summarize(&numbers).ok_or_else(|| ColumnError::NoNumericValues {
        header: column.header.clone(),
    })
}

/// Build the analysis for the column's type. Bool and Unclassified columns
/// get none.
pub fn analyze_statistics(column: &mut Column) -> Result<Option<Analysis>, ColumnError> {
    match column.column_type {
        ColumnType::String => Ok(Some(Analysis::String(StringAnalysis {
            mode: text_mode(&column.values),
        }))),
        ColumnType::Enum => Ok(Some(Analysis::Enum(EnumAnalysis {
            mode: text_mode(&column.values),
        }))),
        ColumnType::Float | ColumnType::Integer => {
            numeric_analysis(column).map(|analysis| Some(Analysis::Numeric(analysis)))
        }
        ColumnType::Bool | ColumnType::Unclassified => Ok(None),
    }
}
