//! Dataset: header, partitioned rows and columns of one source.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::column::Column;

/// A data row whose field count differs from the header's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    /// 1-based record position in the source; the header is position 1.
    pub position: usize,
    /// Source line the record started on, when read from text.
    pub line: Option<u64>,
    pub fields: Vec<String>,
}

/// Everything loaded from one tabular source.
///
/// Built by `colprof-ingest`, then cleaned and analyzed in place by
/// `colprof-core`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Where the rows came from, if they came from a file.
    pub source: Option<PathBuf>,
    pub headers: Vec<String>,
    /// Data rows matching the header's field count, header excluded.
    pub valid_rows: Vec<Vec<String>>,
    pub invalid_rows: Vec<InvalidRow>,
    /// One column per header position, duplicates included.
    pub columns: Vec<Column>,
}

impl Dataset {
    /// Number of valid data rows, which is also every column's length.
    pub fn row_count(&self) -> usize {
        self.valid_rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// First column with the given header.
    pub fn column(&self, header: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.header == header)
    }

    /// All columns with the given header, in header order.
    pub fn columns_named<'a>(&'a self, header: &'a str) -> impl Iterator<Item = &'a Column> + 'a {
        self.columns.iter().filter(move |c| c.header == header)
    }

    /// Headers that appear more than once.
    pub fn duplicate_headers(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (idx, header) in self.headers.iter().enumerate() {
            if self.headers[..idx].contains(header) && !duplicates.contains(&header.as_str()) {
                duplicates.push(header);
            }
        }
        duplicates
    }
}
