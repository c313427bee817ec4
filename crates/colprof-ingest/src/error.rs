//! Error types for dataset loading.

use thiserror::Error;

/// Errors that abort loading a dataset.
///
/// Rows with the wrong field count are not errors; they are reported as
/// invalid rows on the loaded dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source produced no rows at all, not even a header.
    #[error("source {source_name} is empty")]
    EmptyInput { source_name: String },

    /// The source could not be opened or parsed as delimited text.
    #[error("failed to read {source_name}: {source}")]
    MalformedSource {
        source_name: String,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::EmptyInput {
            source_name: "/path/to/file.csv".to_string(),
        };
        assert_eq!(err.to_string(), "source /path/to/file.csv is empty");
    }
}
