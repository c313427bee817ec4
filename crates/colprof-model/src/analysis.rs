//! Per-type analysis results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::Number;

/// Marker rendered when a column has no unique mode.
pub const NO_UNIQUE_MODE: &str = "N/A";

/// The most frequent value, or an explicit marker when no single value wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode<T> {
    Unique(T),
    NoUniqueMode,
}

impl<T: fmt::Display> fmt::Display for Mode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Unique(value) => write!(f, "{value}"),
            Mode::NoUniqueMode => f.write_str(NO_UNIQUE_MODE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringAnalysis {
    pub mode: Mode<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumAnalysis {
    pub mode: Mode<String>,
}

/// Descriptive statistics for Float and Integer columns, computed over the
/// values that coerced successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericAnalysis {
    /// Number of values the statistics were computed over.
    pub count: usize,
    pub mode: Mode<Number>,
    pub min: Number,
    pub max: Number,
    /// Arithmetic mean rounded to 5 decimal places.
    pub mean: f64,
    pub median_low: Number,
    pub median: Number,
    pub median_high: Number,
}

impl NumericAnalysis {
    /// Mean in its fixed 5-decimal form, e.g. `5.50000`.
    pub fn mean_text(&self) -> String {
        format!("{:.5}", self.mean)
    }
}

/// Analysis attached to a classified column. Bool and Unclassified columns
/// carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Analysis {
    String(StringAnalysis),
    Enum(EnumAnalysis),
    Numeric(NumericAnalysis),
}

impl Analysis {
    /// Mode rendered as text, with [`NO_UNIQUE_MODE`] when there is none.
    pub fn mode_text(&self) -> String {
        match self {
            Analysis::String(a) => a.mode.to_string(),
            Analysis::Enum(a) => a.mode.to_string(),
            Analysis::Numeric(a) => a.mode.to_string(),
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericAnalysis> {
        match self {
            Analysis::Numeric(a) => Some(a),
            _ => None,
        }
    }
}
