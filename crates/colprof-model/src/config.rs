//! Configuration options for a profiling run.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which values count towards the Float/Integer match ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatioDenominator {
    /// Every value, missing markers included.
    #[default]
    AllValues,
    /// Only values that are not the missing marker.
    NonMissing,
}

/// Type given to a non-numeric column with at most `bool_cardinality_limit`
/// distinct values whose top value is not a boolean literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrowColumnPolicy {
    #[default]
    Enum,
    String,
    /// Leave the column unclassified.
    Unclassified,
}

/// Options controlling cleaning and analysis.
///
/// Passed by reference into every pipeline entry point so runs with
/// different settings can coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileConfig {
    /// Placeholder values replaced by the missing marker.
    pub sentinels: Vec<String>,

    /// Strip leading `<`/`>` from numeric-looking values before inference.
    pub strip_comparison_operators: bool,

    /// Minimum Float/Integer match ratio (inclusive).
    pub type_threshold: f64,

    /// Minimum share of the missing marker for a column to be empty (inclusive).
    pub empty_threshold: f64,

    /// Maximum number of most-common entries kept per column.
    pub most_common_limit: usize,

    /// Columns with at most this many distinct values may be Bool.
    pub bool_cardinality_limit: usize,

    /// Columns with fewer distinct values than this are Enum.
    pub enum_cardinality_limit: usize,

    pub ratio_denominator: RatioDenominator,

    pub narrow_column_policy: NarrowColumnPolicy,

    /// Process columns on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sentinels: vec!["-".to_string(), "*".to_string(), "_".to_string()],
            strip_comparison_operators: false,
            type_threshold: 0.9,
            empty_threshold: 0.9,
            most_common_limit: 15,
            bool_cardinality_limit: 2,
            enum_cardinality_limit: 10,
            ratio_denominator: RatioDenominator::default(),
            narrow_column_policy: NarrowColumnPolicy::default(),
            parallel: false,
        }
    }
}

impl ProfileConfig {
    #[must_use]
    pub fn with_sentinels<I, S>(mut self, sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sentinels = sentinels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_type_threshold(mut self, threshold: f64) -> Self {
        self.type_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_empty_threshold(mut self, threshold: f64) -> Self {
        self.empty_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_strip_comparison_operators(mut self, enable: bool) -> Self {
        self.strip_comparison_operators = enable;
        self
    }

    #[must_use]
    pub fn with_ratio_denominator(mut self, denominator: RatioDenominator) -> Self {
        self.ratio_denominator = denominator;
        self
    }

    #[must_use]
    pub fn with_narrow_column_policy(mut self, policy: NarrowColumnPolicy) -> Self {
        self.narrow_column_policy = policy;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Returns true if the value is one of the configured placeholders.
    pub fn is_sentinel(&self, value: &str) -> bool {
        self.sentinels.iter().any(|s| s == value)
    }

    /// Check thresholds and limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("type_threshold", self.type_threshold),
            ("empty_threshold", self.empty_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Threshold { name, value });
            }
        }
        if self.most_common_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "most_common_limit",
            });
        }
        Ok(())
    }
}
