use anyhow::{Context, Result};

use colprof_cli::profile::{
    InputSource, ProfileRequest, ProfileResult, read_config, run_profile, write_json_report,
};
use colprof_ingest::LoadOptions;
use colprof_model::{NarrowColumnPolicy, ProfileConfig, RatioDenominator};

use crate::cli::{NarrowColumnsArg, ProfileArgs, RatioDenominatorArg, ReportFormatArg};
use crate::summary::print_summary;

/// Run the `profile` command and render its report.
pub fn run_profile_command(args: &ProfileArgs) -> Result<ProfileResult> {
    let request = ProfileRequest {
        input: InputSource::from_arg(&args.input),
        load: LoadOptions::default()
            .with_delimiter(args.delimiter)
            .with_trim(args.trim),
        config: profile_config(args)?,
    };
    let result = run_profile(&request)?;
    match args.format {
        ReportFormatArg::Table => {
            if let Some(path) = &args.output {
                write_json_report(&result.report, Some(path))?;
            }
            print_summary(&result, args.top);
        }
        ReportFormatArg::Json => write_json_report(&result.report, args.output.as_deref())?,
    }
    Ok(result)
}

pub fn run_defaults() -> Result<()> {
    let json = serde_json::to_string_pretty(&ProfileConfig::default())
        .context("serialize default config")?;
    println!("{json}");
    Ok(())
}

/// Config file first, then flag overrides.
fn profile_config(args: &ProfileArgs) -> Result<ProfileConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => ProfileConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config = config.with_type_threshold(threshold);
    }
    if let Some(threshold) = args.empty_threshold {
        config = config.with_empty_threshold(threshold);
    }
    if !args.sentinels.is_empty() {
        config = config.with_sentinels(args.sentinels.iter().cloned());
    }
    if args.strip_comparison_operators {
        config = config.with_strip_comparison_operators(true);
    }
    if let Some(denominator) = args.ratio_denominator {
        config = config.with_ratio_denominator(match denominator {
            RatioDenominatorArg::All => RatioDenominator::AllValues,
            RatioDenominatorArg::NonMissing => RatioDenominator::NonMissing,
        });
    }
    if let Some(policy) = args.narrow_columns {
        config = config.with_narrow_column_policy(match policy {
            NarrowColumnsArg::Enum => NarrowColumnPolicy::Enum,
            NarrowColumnsArg::String => NarrowColumnPolicy::String,
            NarrowColumnsArg::Unclassified => NarrowColumnPolicy::Unclassified,
        });
    }
    if args.parallel {
        config = config.with_parallel(true);
    }
    config.validate().context("invalid profile options")?;
    Ok(config)
}
