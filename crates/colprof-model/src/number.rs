//! Strict numeric values for Float and Integer columns.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::ColumnType;
use crate::error::NumberError;

/// A coerced numeric cell.
///
/// Integer columns keep exact `i64` values; Float columns and averaged
/// medians use `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Parse a raw value as a number of the given column type.
    ///
    /// Only values matching the type's validation pattern are accepted; there
    /// is no sign, exponent or expression syntax.
    pub fn parse_as(value: &str, column_type: ColumnType) -> Result<Self, NumberError> {
        match column_type.validates(value) {
            None => return Err(NumberError::NotNumeric(column_type)),
            Some(false) => {
                return Err(NumberError::PatternMismatch {
                    expected: column_type,
                });
            }
            Some(true) => {}
        }
        if column_type == ColumnType::Integer {
            value
                .parse::<i64>()
                .map(Number::Integer)
                .map_err(NumberError::from)
        } else {
            match value.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Ok(Number::Float(parsed)),
                _ => Err(NumberError::NonFinite),
            }
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Total ordering; integers compare exactly, mixed pairs compare as `f64`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }

    /// Average of two numbers, always a Float.
    pub fn midpoint(self, other: Self) -> Self {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => {
                Number::Float((i128::from(a) + i128::from(b)) as f64 / 2.0)
            }
            _ => Number::Float((self.as_f64() + other.as_f64()) / 2.0),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Float(v) if v.fract() == 0.0 && v.abs() < 1e16 => write!(f, "{v:.1}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_exactly() {
        assert_eq!(
            Number::parse_as("42", ColumnType::Integer),
            Ok(Number::Integer(42))
        );
        assert_eq!(
            Number::parse_as("9223372036854775808", ColumnType::Integer),
            Err(NumberError::IntegerOverflow)
        );
    }

    #[test]
    fn parses_floats_with_fraction() {
        assert_eq!(
            Number::parse_as(".5", ColumnType::Float),
            Ok(Number::Float(0.5))
        );
        assert_eq!(
            Number::parse_as("3", ColumnType::Float),
            Err(NumberError::PatternMismatch {
                expected: ColumnType::Float
            })
        );
    }

    #[test]
    fn rejects_expressions_and_non_numeric_types() {
        assert!(Number::parse_as("1+1", ColumnType::Integer).is_err());
        assert!(Number::parse_as("__import__('os')", ColumnType::Float).is_err());
        assert_eq!(
            Number::parse_as("1", ColumnType::Enum),
            Err(NumberError::NotNumeric(ColumnType::Enum))
        );
    }

    #[test]
    fn midpoint_is_float() {
        assert_eq!(
            Number::Integer(5).midpoint(Number::Integer(6)),
            Number::Float(5.5)
        );
        assert_eq!(
            Number::Integer(i64::MAX).midpoint(Number::Integer(i64::MAX)),
            Number::Float(i64::MAX as f64)
        );
    }

    #[test]
    fn display_keeps_integer_and_float_forms() {
        assert_eq!(Number::Integer(5).to_string(), "5");
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
        assert_eq!(Number::Float(5.5).to_string(), "5.5");
    }

    #[test]
    fn ordering_is_total() {
        assert_eq!(
            Number::Integer(2).total_cmp(&Number::Float(2.5)),
            Ordering::Less
        );
        assert_eq!(
            Number::Integer(i64::MAX).total_cmp(&Number::Integer(i64::MAX - 1)),
            Ordering::Greater
        );
    }
}
