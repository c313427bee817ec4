//! Frequency profiling: most common values and the empty-column flag.

use std::collections::HashMap;

use colprof_model::{Column, ColumnError, MISSING, ProfileConfig, ValueCount};

/// Count every distinct value, descending by count; ties keep the order in
/// which values were first seen.
pub fn count_values(values: &[String]) -> Vec<ValueCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ValueCount> = Vec::new();
    for value in values {
        match index.get(value.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(ValueCount::new(value.as_str(), 1));
            }
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `limit` most common values.
pub fn most_common(values: &[String], limit: usize) -> Vec<ValueCount> {
    let mut counts = count_values(values);
    counts.truncate(limit);
    counts
}

/// Returns true if the top entry is the missing marker and its share of
/// `total` reaches `threshold`.
pub fn is_effectively_empty(most_common: &[ValueCount], total: usize, threshold: f64) -> bool {
    match most_common.first() {
        Some(top) if top.value == MISSING && total > 0 => {
            top.count as f64 / total as f64 >= threshold
        }
        _ => false,
    }
}

/// Fill `most_common` and `empty` on the column.
pub fn profile_frequencies(column: &mut Column, config: &ProfileConfig) -> Result<(), ColumnError> {
    if column.values.is_empty() {
        return Err(ColumnError::Profiling {
            header: column.header.clone(),
        });
    }
    column.most_common = most_common(&column.values, config.most_common_limit);
    column.empty = is_effectively_empty(
        &column.most_common,
        column.values.len(),
        config.empty_threshold,
    );
    Ok(())
}
