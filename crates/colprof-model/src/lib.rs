//! Data model for column profiling.
//!
//! A [`Dataset`] owns the header list, the partitioned rows and one
//! [`Column`] per header. Columns start out as raw strings and are filled in
//! by the cleaning and analysis stages in `colprof-core`.

pub mod analysis;
pub mod column;
pub mod config;
pub mod dataset;
pub mod error;
pub mod number;
pub mod patterns;
pub mod report;

pub use analysis::{Analysis, EnumAnalysis, Mode, NumericAnalysis, StringAnalysis};
pub use column::{Column, ColumnType, MISSING, ValueCount};
pub use config::{NarrowColumnPolicy, ProfileConfig, RatioDenominator};
pub use dataset::{Dataset, InvalidRow};
pub use error::{ColumnError, ConfigError, NumberError};
pub use number::Number;
pub use patterns::{is_float_literal, is_integer_literal};
pub use report::{ColumnReport, DatasetReport, FailureReport};
