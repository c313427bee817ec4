//! Type classification by ordered heuristics.

use colprof_model::{
    Column, ColumnType, MISSING, NarrowColumnPolicy, ProfileConfig, RatioDenominator,
    is_float_literal, is_integer_literal,
};

const BOOLEAN_LITERALS: [&str; 2] = ["true", "false"];

/// Share of values matching the Float and Integer patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TypeRatios {
    pub float: f64,
    pub integer: f64,
}

impl TypeRatios {
    pub fn measure(values: &[String], denominator: RatioDenominator) -> Self {
        let mut floats = 0usize;
        let mut integers = 0usize;
        let mut missing = 0usize;
        for value in values {
            if is_float_literal(value) {
                floats += 1;
            } else if is_integer_literal(value) {
                integers += 1;
            } else if value.as_str() == MISSING {
                missing += 1;
            }
        }
        let total = match denominator {
            RatioDenominator::AllValues => values.len(),
            RatioDenominator::NonMissing => values.len() - missing,
        };
        if total == 0 {
            return Self::default();
        }
        Self {
            float: floats as f64 / total as f64,
            integer: integers as f64 / total as f64,
        }
    }
}

/// Assign a semantic type from the column's values and most-common entries.
///
/// Needs `most_common` filled in. Empty columns stay Unclassified.
pub fn classify(column: &Column, config: &ProfileConfig) -> ColumnType {
    if column.empty {
        return ColumnType::Unclassified;
    }
    let Some(top) = column.most_common.first() else {
        return ColumnType::Unclassified;
    };
    let ratios = TypeRatios::measure(&column.values, config.ratio_denominator);
    if ratios.float >= config.type_threshold {
        return ColumnType::Float;
    }
    if ratios.integer >= config.type_threshold {
        return ColumnType::Integer;
    }
    let distinct = column.most_common.len();
    if distinct <= config.bool_cardinality_limit {
        let lowered = top.value.to_lowercase();
        if BOOLEAN_LITERALS.contains(&lowered.as_str()) {
            return ColumnType::Bool;
        }
        return match config.narrow_column_policy {
            NarrowColumnPolicy::Enum => ColumnType::Enum,
            NarrowColumnPolicy::String => ColumnType::String,
            NarrowColumnPolicy::Unclassified => ColumnType::Unclassified,
        };
    }
    if distinct < config.enum_cardinality_limit {
        ColumnType::Enum
    } else {
        ColumnType::String
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::profile_frequencies;

    fn profiled(values: &[&str]) -> Column {
        let mut column = Column::with_values("c", values.iter().copied());
        profile_frequencies(&mut column, &ProfileConfig::default()).expect("profile");
        column
    }

    #[test]
    fn ninety_percent_floats_is_float() {
        let column = profiled(&["1.5", "2.5", "3.5", "4.5", "5.5", "6.5", "7.5", "8.5", "9.5", "x"]);
        assert_eq!(classify(&column, &ProfileConfig::default()), ColumnType::Float);
    }

    #[test]
    fn integers_do_not_count_as_floats() {
        let column = profiled(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        let ratios = TypeRatios::measure(&column.values, RatioDenominator::AllValues);
        assert_eq!(ratios.float, 0.0);
        assert_eq!(ratios.integer, 1.0);
        assert_eq!(classify(&column, &ProfileConfig::default()), ColumnType::Integer);
    }

    #[test]
    fn boolean_column() {
        let column = profiled(&["TRUE", "false", "true"]);
        assert_eq!(classify(&column, &ProfileConfig::default()), ColumnType::Bool);
    }

    #[test]
    fn narrow_non_boolean_follows_policy() {
        let column = profiled(&["yes", "no", "yes"]);
        assert_eq!(classify(&column, &ProfileConfig::default()), ColumnType::Enum);
        let config = ProfileConfig::default().with_narrow_column_policy(NarrowColumnPolicy::String);
        assert_eq!(classify(&column, &config), ColumnType::String);
        let config =
            ProfileConfig::default().with_narrow_column_policy(NarrowColumnPolicy::Unclassified);
        assert_eq!(classify(&column, &config), ColumnType::Unclassified);
    }

    #[test]
    fn cardinality_splits_enum_and_string() {
        let nine: Vec<String> = (0..9).map(|i| format!("v{i}")).collect();
        let column = profiled(&nine.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(classify(&column, &ProfileConfig::default()), ColumnType::Enum);

        let ten: Vec<String> = (0..10).map(|i| format!("v{i}")).collect();
        let column = profiled(&ten.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(classify(&column, &ProfileConfig::default()), ColumnType::String);
    }

    #[test]
    fn non_missing_denominator_ignores_blanks() {
        let values: Vec<String> = ["3.5", "", "4.25"].iter().map(|v| v.to_string()).collect();
        let all = TypeRatios::measure(&values, RatioDenominator::AllValues);
        let present = TypeRatios::measure(&values, RatioDenominator::NonMissing);
        assert!((all.float - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(present.float, 1.0);
        assert_eq!(
            TypeRatios::measure(&[String::new()], RatioDenominator::NonMissing),
            TypeRatios::default()
        );
    }

    #[test]
    fn empty_column_is_unclassified() {
        let mut column = profiled(&["", "", ""]);
        assert!(column.empty);
        assert_eq!(classify(&column, &ProfileConfig::default()), ColumnType::Unclassified);
        column.empty = false;
        column.most_common.clear();
        assert_eq!(classify(&column, &ProfileConfig::default()), ColumnType::Unclassified);
    }
}
