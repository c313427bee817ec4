//! Outlier detection for numeric columns.

use colprof_model::Column;

/// Values of a Float or Integer column that fail the type's pattern, in row
/// order. Other types have no outliers.
pub fn find_outliers(column: &Column) -> Vec<String> {
    if !column.column_type.is_numeric() {
        return Vec::new();
    }
    column
        .values
        .iter()
        .filter(|value| column.column_type.validates(value) == Some(false))
        .cloned()
        .collect()
}

/// Replace the column's outliers with the ones found for its current type.
pub fn detect_outliers(column: &mut Column) {
    column.outliers = find_outliers(column);
}

#[cfg(test)]
mod tests {
    use super::*;
    use colprof_model::ColumnType;

    #[test]
    fn float_outliers_include_missing_and_integers() {
        let mut column = Column::with_values("c", ["1.5", "", "2", "2.5", "abc"]);
        column.column_type = ColumnType::Float;
        detect_outliers(&mut column);
        assert_eq!(column.outliers, vec!["", "2", "abc"]);
    }

    #[test]
    fn integer_outliers() {
        let mut column = Column::with_values("c", ["1", "01", "2.0", "3"]);
        column.column_type = ColumnType::Integer;
        detect_outliers(&mut column);
        assert_eq!(column.outliers, vec!["01", "2.0"]);
    }

    #[test]
    fn non_numeric_types_have_none() {
        let mut column = Column::with_values("c", ["a", "1.5"]);
        column.column_type = ColumnType::String;
        detect_outliers(&mut column);
        assert!(column.outliers.is_empty());
    }
}
