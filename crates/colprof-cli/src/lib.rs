//! CLI library components for the column profiler.

pub mod logging;
pub mod profile;
