//! Setup command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::join_names;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::scheme::{merge_into, Document, MergeOptions};

#[derive(Args)]
pub struct SetupArgs {
    /// Settings file to merge the schemes into
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Defaults document to take schemes from (default: settings.json next to the executable)
    #[arg(short = 'd', long, value_name = "PATH")]
    pub defaults: Option<PathBuf>,

    /// Path to config file (.toml, .yaml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replace schemes that already exist in the target
    #[arg(long)]
    pub overwrite: bool,

    /// Sort the merged schemes by name
    #[arg(long)]
    pub sort: bool,

    /// Sort object keys throughout the written document
    #[arg(long)]
    pub sort_keys: bool,

    /// Print the merged document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: SetupArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let config = merge_cli_with_config(
        config,
        CliOverrides {
            defaults_path: args.defaults,
            overwrite: args.overwrite,
            sort_schemes: args.sort,
            sort_keys: args.sort_keys,
        },
    );
    tracing::debug!("Effective config: {:?}", config);

    let defaults = match config.resolved_defaults_path() {
        Some(path) => Document::load(&path)?,
        None => {
            tracing::debug!("No defaults file installed; using the compiled-in schemes");
            Document::bundled()?
        }
    };

    let options = MergeOptions {
        policy: config.policy,
        sort_schemes: config.sort_schemes,
        sort_keys: config.sort_keys,
        dry_run: args.dry_run,
    };

    let outcome = merge_into(&defaults, &args.target, &options).with_context(|| {
        format!("Failed to merge schemes into {}", args.target.display())
    })?;

    if args.dry_run {
        print!("{}", outcome.rendered);
        return Ok(());
    }

    let report = &outcome.report;
    if outcome.written {
        println!(
            "Updated {}: {} added, {} replaced, {} skipped",
            args.target.display(),
            report.added.len(),
            report.replaced.len(),
            report.skipped.len()
        );
    } else {
        println!("No changes to {}", args.target.display());
    }
    tracing::info!("Added: {}", join_names(&report.added));
    tracing::info!("Replaced: {}", join_names(&report.replaced));
    tracing::info!("Skipped: {}", join_names(&report.skipped));

    Ok(())
}
