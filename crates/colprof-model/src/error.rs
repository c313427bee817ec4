//! Error types shared by the profiling crates.

use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

use crate::column::ColumnType;

/// Failure confined to a single column.
///
/// Column errors never abort sibling columns; the pipeline records them on
/// the column and in its run report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColumnError {
    /// The column holds no values, so frequencies and ratios are undefined.
    #[error("column '{header}' has no values to profile")]
    Profiling { header: String },

    /// A value passed the type threshold but could not be read as a number.
    #[error("column '{header}': cannot coerce '{value}': {source}")]
    Coercion {
        header: String,
        value: String,
        #[source]
        source: NumberError,
    },

    /// Every value of a numeric column was excluded before statistics.
    #[error("column '{header}' has no numeric values left after excluding outliers")]
    NoNumericValues { header: String },
}

impl ColumnError {
    /// Header of the column the error belongs to.
    pub fn header(&self) -> &str {
        match self {
            Self::Profiling { header }
            | Self::Coercion { header, .. }
            | Self::NoNumericValues { header } => header,
        }
    }
}

/// Strict numeric parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("value does not match the {expected} pattern")]
    PatternMismatch { expected: ColumnType },

    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,

    #[error("not an integer literal")]
    InvalidInteger,

    #[error("float literal is not finite")]
    NonFinite,

    #[error("{0} is not a numeric type")]
    NotNumeric(ColumnType),
}

impl From<ParseIntError> for NumberError {
    fn from(err: ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Self::IntegerOverflow,
            _ => Self::InvalidInteger,
        }
    }
}

/// Invalid [`ProfileConfig`](crate::ProfileConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be in (0, 1], got {value}")]
    Threshold { name: &'static str, value: f64 },

    #[error("{name} must be greater than zero")]
    ZeroLimit { name: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColumnError::Profiling {
            header: "age".to_string(),
        };
        assert_eq!(err.to_string(), "column 'age' has no values to profile");

        let err = ColumnError::Coercion {
            header: "count".to_string(),
            value: "99999999999999999999".to_string(),
            source: NumberError::IntegerOverflow,
        };
        assert_eq!(
            err.to_string(),
            "column 'count': cannot coerce '99999999999999999999': integer literal does not fit in 64 bits"
        );
        assert_eq!(err.header(), "count");
    }

    #[test]
    fn parse_int_errors_keep_their_kind() {
        let overflow = "99999999999999999999".parse::<i64>().unwrap_err();
        assert_eq!(NumberError::from(overflow), NumberError::IntegerOverflow);
        let empty = "".parse::<i64>().unwrap_err();
        assert_eq!(NumberError::from(empty), NumberError::InvalidInteger);
        let digit = "1a".parse::<i64>().unwrap_err();
        assert_eq!(NumberError::from(digit), NumberError::InvalidInteger);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Threshold {
            name: "type_threshold",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "type_threshold must be in (0, 1], got 1.5");
    }
}
