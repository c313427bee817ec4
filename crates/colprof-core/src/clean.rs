//! Column cleaning: normalize placeholder values to the missing marker.

use colprof_model::{Column, Dataset, MISSING, ProfileConfig, is_float_literal, is_integer_literal};
use rayon::prelude::*;
use tracing::{debug, info};

/// Counts of values rewritten by a cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Sentinel values replaced by the missing marker.
    pub replaced: usize,
    /// Values that lost a leading comparison operator.
    pub stripped: usize,
}

impl CleanSummary {
    fn merge(self, other: Self) -> Self {
        Self {
            replaced: self.replaced + other.replaced,
            stripped: self.stripped + other.stripped,
        }
    }
}

/// Replace every configured sentinel with the missing marker.
pub fn replace_sentinels(column: &mut Column, config: &ProfileConfig) -> usize {
    let mut replaced = 0;
    for value in &mut column.values {
        if config.is_sentinel(value) && value.as_str() != MISSING {
            value.clear();
            replaced += 1;
        }
    }
    replaced
}

/// Strip leading `<`/`>` from values that are numeric once stripped,
/// e.g. `<5` becomes `5` and `>0.25` becomes `0.25`.
pub fn strip_comparison_operators(column: &mut Column) -> usize {
    let mut stripped = 0;
    for value in &mut column.values {
        let rest = value.trim_start_matches(['<', '>']);
        if rest.len() != value.len() && (is_float_literal(rest) || is_integer_literal(rest)) {
            *value = rest.to_string();
            stripped += 1;
        }
    }
    stripped
}

/// Clean one column in place. Running it twice changes nothing further.
pub fn clean_column(column: &mut Column, config: &ProfileConfig) -> CleanSummary {
    let stripped = if config.strip_comparison_operators {
        strip_comparison_operators(column)
    } else {
        0
    };
    let replaced = replace_sentinels(column, config);
    if replaced + stripped > 0 {
        debug!(column = %column.header, replaced, stripped, "cleaned column");
    }
    CleanSummary { replaced, stripped }
}

/// Clean every column of the dataset in place.
pub fn clean(dataset: &mut Dataset, config: &ProfileConfig) -> CleanSummary {
    let summary = if config.parallel {
        dataset
            .columns
            .par_iter_mut()
            .map(|column| clean_column(column, config))
            .reduce(CleanSummary::default, CleanSummary::merge)
    } else {
        dataset
            .columns
            .iter_mut()
            .map(|column| clean_column(column, config))
            .fold(CleanSummary::default(), CleanSummary::merge)
    };
    info!(
        replaced = summary.replaced,
        stripped = summary.stripped,
        "cleaning complete"
    );
    summary
}
