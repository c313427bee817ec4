//! Row validation: split data rows by field count.

use colprof_model::InvalidRow;
use tracing::{trace, warn};

use crate::reader::RawRow;

/// Header plus data rows, split by whether their field count matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPartition {
    pub header: Vec<String>,
    pub valid: Vec<Vec<String>>,
    pub invalid: Vec<InvalidRow>,
}

impl RowPartition {
    /// Data rows seen, header excluded.
    pub fn data_row_count(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

/// Split raw rows into header, valid rows and invalid rows.
///
/// Returns `None` when there are no rows at all. Invalid rows keep their
/// 1-based position in the source, counting the header as position 1.
pub fn partition_rows<I>(rows: I) -> Option<RowPartition>
where
    I: IntoIterator<Item = RawRow>,
{
    let mut rows = rows.into_iter();
    let header = rows.next()?.fields;
    let width = header.len();
    let mut partition = RowPartition {
        header,
        ..RowPartition::default()
    };
    for (idx, row) in rows.enumerate() {
        let position = idx + 2;
        if row.fields.len() == width {
            partition.valid.push(row.fields);
        } else {
            trace!(
                position,
                expected = width,
                actual = row.fields.len(),
                "row field count mismatch"
            );
            partition.invalid.push(InvalidRow {
                position,
                line: row.line,
                fields: row.fields,
            });
        }
    }
    if !partition.invalid.is_empty() {
        warn!(
            invalid_rows = partition.invalid.len(),
            expected_fields = width,
            "rows with mismatched field count were set aside"
        );
    }
    Some(partition)
}
