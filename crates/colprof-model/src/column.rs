//! Column entity and semantic column types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::error::ColumnError;

/// Canonical missing marker substituted for sentinel placeholders.
pub const MISSING: &str = "";

/// Inferred semantic type of a column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ColumnType {
    /// Classification did not run or no rule matched.
    #[default]
    Unclassified,
    Float,
    Integer,
    Bool,
    Enum,
    String,
}

impl ColumnType {
    /// Returns the canonical type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Unclassified => "Unclassified",
            ColumnType::Float => "Float",
            ColumnType::Integer => "Integer",
            ColumnType::Bool => "Bool",
            ColumnType::Enum => "Enum",
            ColumnType::String => "String",
        }
    }

    /// Returns true for the types whose values are validated and coerced as numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float | ColumnType::Integer)
    }

    /// Checks a raw value against this type's validation pattern.
    ///
    /// Returns `None` for non-numeric types, which have no pattern.
    pub fn validates(&self, value: &str) -> Option<bool> {
        match self {
            ColumnType::Float => Some(crate::patterns::is_float_literal(value)),
            ColumnType::Integer => Some(crate::patterns::is_integer_literal(value)),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    /// Parse a type name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unclassified" => Ok(ColumnType::Unclassified),
            "float" => Ok(ColumnType::Float),
            "integer" | "int" => Ok(ColumnType::Integer),
            "bool" | "boolean" => Ok(ColumnType::Bool),
            "enum" => Ok(ColumnType::Enum),
            "string" => Ok(ColumnType::String),
            _ => Err(format!("Unknown column type: {s}")),
        }
    }
}

/// A distinct value and how often it occurs in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

impl ValueCount {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// One column of a dataset: a header and its values in source row order,
/// plus everything the analysis stages derive from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    pub header: String,
    pub values: Vec<String>,
    /// Most frequent values, descending by count, ties in first-seen order.
    pub most_common: Vec<ValueCount>,
    /// Set when the missing marker dominates the column.
    pub empty: bool,
    pub column_type: ColumnType,
    /// Values failing the numeric pattern of `column_type`, in row order.
    pub outliers: Vec<String>,
    pub analysis: Option<Analysis>,
    /// Per-column failures recorded during analysis.
    pub issues: Vec<ColumnError>,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    pub fn with_values<I, S>(header: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into(),
            values: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Number of values equal to the missing marker.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.as_str() == MISSING).count()
    }

    /// Clears every field the analysis stages derive, keeping header and values.
    pub fn reset_analysis(&mut self) {
        self.most_common.clear();
        self.empty = false;
        self.column_type = ColumnType::Unclassified;
        self.outliers.clear();
        self.analysis = None;
        self.issues.clear();
    }
}
