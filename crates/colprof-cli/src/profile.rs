//! One profiling run: load a source, clean it, analyze every column.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use colprof_core::{AnalysisReport, CleanSummary, profile};
use colprof_ingest::{LoadOptions, load_dataset, load_dataset_from_reader};
use colprof_model::{Dataset, DatasetReport, ProfileConfig};

use crate::logging::redact_value;

/// Name used for standard input in logs and errors.
pub const STDIN_NAME: &str = "<stdin>";

/// Where rows are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// `-` selects standard input, anything else is a file path.
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::Path(path.to_path_buf())
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_NAME.to_string(),
            InputSource::Path(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileRequest {
    pub input: InputSource,
    pub load: LoadOptions,
    pub config: ProfileConfig,
}

#[derive(Debug)]
pub struct ProfileResult {
    pub dataset: Dataset,
    pub cleaned: CleanSummary,
    pub analysis: AnalysisReport,
    pub report: DatasetReport,
    pub elapsed: Duration,
}

impl ProfileResult {
    pub fn has_failures(&self) -> bool {
        self.analysis.has_failures()
    }
}

/// Load, clean and analyze the requested source.
pub fn run_profile(request: &ProfileRequest) -> Result<ProfileResult> {
    let source_name = request.input.display_name();
    let span = info_span!("profile", source = %source_name);
    let _guard = span.enter();
    let start = Instant::now();

    let mut dataset = match &request.input {
        InputSource::Path(path) => load_dataset(path, &request.load),
        InputSource::Stdin => {
            load_dataset_from_reader(io::stdin().lock(), STDIN_NAME, &request.load)
        }
    }
    .with_context(|| format!("load {source_name}"))?;

    for row in &dataset.invalid_rows {
        debug!(
            position = row.position,
            fields = row.fields.len(),
            values = %redact_value(&row.fields.join(",")),
            "skipped invalid row"
        );
    }
    for header in dataset.duplicate_headers() {
        warn!(header, "duplicate header");
    }

    let (cleaned, analysis) =
        profile(&mut dataset, &request.config).context("invalid profile configuration")?;
    let report = DatasetReport::from_dataset(&dataset);
    let elapsed = start.elapsed();
    info!(
        columns = analysis.columns,
        rows = dataset.row_count(),
        invalid_rows = dataset.invalid_rows.len(),
        replaced = cleaned.replaced,
        failed_columns = analysis.failures.len(),
        elapsed_ms = elapsed.as_millis(),
        "profile complete"
    );
    Ok(ProfileResult {
        dataset,
        cleaned,
        analysis,
        report,
        elapsed,
    })
}

/// Read a JSON profile configuration; missing keys keep their defaults.
pub fn read_config(path: &Path) -> Result<ProfileConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: ProfileConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Serialize the report as pretty JSON, to `output` or stdout.
pub fn write_json_report(report: &DatasetReport, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write report {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_selects_stdin() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Path::new("data.csv")),
            InputSource::Path(PathBuf::from("data.csv"))
        );
        assert_eq!(InputSource::Stdin.display_name(), STDIN_NAME);
    }
}
