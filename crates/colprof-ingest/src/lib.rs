//! Dataset ingestion: read a delimited source, set aside rows with the wrong
//! field count and transpose the rest into columns.

pub mod columns;
pub mod error;
pub mod loader;
pub mod reader;
pub mod validate;

pub use columns::build_columns;
pub use error::{IngestError, Result};
pub use loader::{dataset_from_rows, load_dataset, load_dataset_from_reader};
pub use reader::{LoadOptions, RawRow, read_rows, read_rows_from_reader};
pub use validate::{RowPartition, partition_rows};
