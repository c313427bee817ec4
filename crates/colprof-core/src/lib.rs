//! Column cleaning, type inference and statistical analysis.
//!
//! Each column goes through the same fixed sequence, independently of the
//! others:
//!
//! 1. [`mod@clean`] replaces placeholder values with the missing marker.
//! 2. [`frequency`] counts the most common values and flags empty columns.
//! 3. [`mod@classify`] assigns Float, Integer, Bool, Enum or String.
//! 4. [`outliers`] lists values that fail a numeric type's pattern.
//! 5. [`stats`] computes the mode and, for numeric columns, the
//!    min/max/mean/median family.
//!
//! [`pipeline::analyze`] runs steps 2-5 over a whole dataset.

pub mod classify;
pub mod clean;
pub mod frequency;
pub mod outliers;
pub mod pipeline;
pub mod stats;

pub use classify::{TypeRatios, classify};
pub use clean::{CleanSummary, clean, clean_column};
pub use frequency::{most_common, profile_frequencies};
pub use outliers::detect_outliers;
pub use pipeline::{AnalysisReport, ColumnFailure, analyze, analyze_column, profile};
pub use stats::{analyze_statistics, summarize};
