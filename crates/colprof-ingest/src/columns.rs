//! Column building: transpose valid rows into columns.

use colprof_model::Column;

/// Build one column per header position from rows of equal width.
///
/// Duplicate headers produce independent columns. Rows shorter than the
/// header leave the missing positions untouched, which cannot happen for
/// rows that passed [`partition_rows`](crate::partition_rows).
pub fn build_columns(headers: &[String], rows: &[Vec<String>]) -> Vec<Column> {
    let mut columns: Vec<Column> = headers
        .iter()
        .map(|header| {
            let mut column = Column::new(header.as_str());
            column.values.reserve(rows.len());
            column
        })
        .collect();
    for row in rows {
        for (column, value) in columns.iter_mut().zip(row) {
            column.values.push(value.clone());
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn transposes_in_row_order() {
        let headers = strings(&["id", "score"]);
        let rows = vec![strings(&["1", "3.5"]), strings(&["2", "-"])];
        let columns = build_columns(&headers, &rows);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].values, vec!["1", "2"]);
        assert_eq!(columns[1].header, "score");
        assert_eq!(columns[1].values, vec!["3.5", "-"]);
    }

    #[test]
    fn duplicate_headers_stay_separate() {
        let headers = strings(&["x", "x"]);
        let rows = vec![strings(&["a", "b"])];
        let columns = build_columns(&headers, &rows);
        assert_eq!(columns[0].values, vec!["a"]);
        assert_eq!(columns[1].values, vec!["b"]);
    }
}
