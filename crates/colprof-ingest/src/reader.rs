//! Delimited-text reading into raw rows.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Options for reading a delimited source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter. Defaults to `,`.
    pub delimiter: u8,
    /// Quote character. Defaults to `"`.
    pub quote: u8,
    /// Trim leading and trailing whitespace from every field.
    pub trim: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, enable: bool) -> Self {
        self.trim = enable;
        self
    }

    fn builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .trim(if self.trim { Trim::All } else { Trim::None });
        builder
    }
}

/// One record as read from the source, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Line the record started on, if known.
    pub line: Option<u64>,
    pub fields: Vec<String>,
}

impl From<Vec<String>> for RawRow {
    fn from(fields: Vec<String>) -> Self {
        Self { line: None, fields }
    }
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Read every record of a delimited file. The first record is the header.
pub fn read_rows(path: &Path, options: &LoadOptions) -> Result<Vec<RawRow>> {
    let source_name = path.display().to_string();
    let data = fs::read(path).map_err(|err| malformed(&source_name, csv::Error::from(err)))?;
    parse_rows(&data, &source_name, options)
}

/// Read every record from an arbitrary reader, e.g. stdin or an in-memory buffer.
pub fn read_rows_from_reader<R: Read>(
    mut input: R,
    source_name: &str,
    options: &LoadOptions,
) -> Result<Vec<RawRow>> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .map_err(|err| malformed(source_name, csv::Error::from(err)))?;
    parse_rows(&data, source_name, options)
}

fn malformed(source_name: &str, source: csv::Error) -> IngestError {
    IngestError::MalformedSource {
        source_name: source_name.to_string(),
        source,
    }
}

/// Parse records, keeping blank lines after the header as rows without
/// fields. Blank lines before the header are skipped.
fn parse_rows(data: &[u8], source_name: &str, options: &LoadOptions) -> Result<Vec<RawRow>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut reader = options.builder().from_reader(data);
    let mut record = StringRecord::new();
    let mut rows: Vec<RawRow> = Vec::new();
    let mut end = csv::Position::new();
    let mut blank_lines = 0usize;
    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|err| malformed(source_name, err))?;
        if !more {
            break;
        }
        let start = record.position().cloned().unwrap_or_else(|| end.clone());
        let (blanks, line) = blank_lines_at(data, &start);
        if !rows.is_empty() {
            blank_lines += blanks.len();
            rows.extend(blanks.into_iter().map(blank_row));
        }
        rows.push(RawRow {
            line: Some(line),
            fields: record.iter().map(str::to_string).collect(),
        });
        end = reader.position().clone();
    }
    if !rows.is_empty() {
        let (blanks, _) = blank_lines_at(data, &end);
        blank_lines += blanks.len();
        rows.extend(blanks.into_iter().map(blank_row));
    }
    debug!(source = %source_name, records = rows.len(), blank_lines, "read source records");
    Ok(rows)
}

fn blank_row(line: u64) -> RawRow {
    RawRow {
        line: Some(line),
        fields: Vec::new(),
    }
}

/// Lines holding nothing but a terminator, starting at `position`, and the
/// line where the next content begins.
///
/// The csv reader skips such lines, so a record's position can point at the
/// first of them rather than at the record itself.
fn blank_lines_at(data: &[u8], position: &csv::Position) -> (Vec<u64>, u64) {
    let mut offset = usize::try_from(position.byte()).unwrap_or(data.len());
    let mut line = position.line();
    let mut blanks = Vec::new();
    while let Some(&byte) = data.get(offset) {
        if byte != b'\n' && byte != b'\r' {
            break;
        }
        let at_line_start = match offset.checked_sub(1).map(|prev| data[prev]) {
            None | Some(b'\n') => true,
            Some(b'\r') => byte == b'\r',
            Some(_) => false,
        };
        if at_line_start {
            blanks.push(line);
        }
        if byte == b'\r' && data.get(offset + 1) == Some(&b'\n') {
            offset += 2;
            line += 1;
        } else {
            offset += 1;
            if byte == b'\n' {
                line += 1;
            }
        }
    }
    (blanks, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_with_lines() {
        let input = "a,b\n1,2\n\"multi\nline\",3\n4\n";
        let rows = read_rows_from_reader(input.as_bytes(), "memory", &LoadOptions::default())
            .expect("read rows");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].fields, vec!["a", "b"]);
        assert_eq!(rows[2].fields, vec!["multi\nline", "3"]);
        assert_eq!(rows[3].fields, vec!["4"]);
        assert_eq!(rows[0].line, Some(1));
        assert_eq!(rows[3].line, Some(5));
    }

    #[test]
    fn honours_delimiter_and_trim() {
        let input = "a; b\n 1 ;2\n";
        let options = LoadOptions::default().with_delimiter(b';').with_trim(true);
        let rows = read_rows_from_reader(input.as_bytes(), "memory", &options).expect("read rows");
        assert_eq!(rows[0].fields, vec!["a", "b"]);
        assert_eq!(rows[1].fields, vec!["1", "2"]);
    }

    #[test]
    fn strips_byte_order_mark_from_header() {
        let input = "\u{feff}id,name\n1,x\n";
        let rows = read_rows_from_reader(input.as_bytes(), "memory", &LoadOptions::default())
            .expect("read rows");
        assert_eq!(rows[0].fields[0], "id");
    }

    #[test]
    fn blank_lines_become_empty_rows() {
        let input = "a,b\n1,2\n\n3\n4,5\n\n";
        let rows = read_rows_from_reader(input.as_bytes(), "memory", &LoadOptions::default())
            .expect("read rows");
        let lines: Vec<(Option<u64>, usize)> =
            rows.iter().map(|r| (r.line, r.fields.len())).collect();
        assert_eq!(
            lines,
            vec![
                (Some(1), 2),
                (Some(2), 2),
                (Some(3), 0),
                (Some(4), 1),
                (Some(5), 2),
                (Some(6), 0),
            ]
        );
    }

    #[test]
    fn crlf_blank_lines_are_counted_once() {
        let input = "a\r\n\r\n\r\nx\r\n";
        let rows = read_rows_from_reader(input.as_bytes(), "memory", &LoadOptions::default())
            .expect("read rows");
        let lines: Vec<Option<u64>> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert!(rows[1].fields.is_empty() && rows[2].fields.is_empty());
        assert_eq!(rows[3].fields, vec!["x"]);
    }

    #[test]
    fn blank_lines_before_header_are_skipped() {
        let input = "\n\nid\n7\n";
        let rows = read_rows_from_reader(input.as_bytes(), "memory", &LoadOptions::default())
            .expect("read rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["id"]);
        assert_eq!(rows[0].line, Some(3));
        assert_eq!(rows[1].line, Some(4));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let input: &[u8] = b"a,b\n\xff\xfe,1\n";
        let err = read_rows_from_reader(input, "memory", &LoadOptions::default())
            .expect_err("invalid utf8");
        assert!(matches!(err, IngestError::MalformedSource { .. }));
    }
}
