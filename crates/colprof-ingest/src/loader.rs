//! Dataset construction entry points.

use std::io::Read;
use std::path::Path;

use colprof_model::Dataset;
use tracing::{info, info_span};

use crate::columns::build_columns;
use crate::error::{IngestError, Result};
use crate::reader::{LoadOptions, RawRow, read_rows, read_rows_from_reader};
use crate::validate::partition_rows;

/// Load a delimited file into a dataset: read, validate rows, build columns.
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let span = info_span!("load", source = %path.display());
    let _guard = span.enter();
    let rows = read_rows(path, options)?;
    let mut dataset = assemble(rows, &path.display().to_string())?;
    dataset.source = Some(path.to_path_buf());
    Ok(dataset)
}

/// Load a dataset from any reader; `source_name` is used in errors and logs.
pub fn load_dataset_from_reader<R: Read>(
    input: R,
    source_name: &str,
    options: &LoadOptions,
) -> Result<Dataset> {
    let span = info_span!("load", source = %source_name);
    let _guard = span.enter();
    let rows = read_rows_from_reader(input, source_name, options)?;
    assemble(rows, source_name)
}

/// Build a dataset from rows that were already split; the first row is the header.
pub fn dataset_from_rows<I>(rows: I) -> Result<Dataset>
where
    I: IntoIterator<Item = Vec<String>>,
{
    assemble(rows.into_iter().map(RawRow::from), "rows")
}

fn assemble<I>(rows: I, source_name: &str) -> Result<Dataset>
where
    I: IntoIterator<Item = RawRow>,
{
    let partition = partition_rows(rows).ok_or_else(|| IngestError::EmptyInput {
        source_name: source_name.to_string(),
    })?;
    let columns = build_columns(&partition.header, &partition.valid);
    info!(
        columns = columns.len(),
        data_rows = partition.data_row_count(),
        valid_rows = partition.valid.len(),
        invalid_rows = partition.invalid.len(),
        "dataset loaded"
    );
    Ok(Dataset {
        source: None,
        headers: partition.header,
        valid_rows: partition.valid,
        invalid_rows: partition.invalid,
        columns,
    })
}
