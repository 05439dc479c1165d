//! Command-line interface for scheme-setup
//!
//! A single command: merge the bundled color schemes into the settings file
//! given as the positional argument.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod setup;
mod utils;

pub use setup::SetupArgs;

/// Merge bundled terminal color schemes into an existing settings file
#[derive(Parser)]
#[command(name = "setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: SetupArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    setup::run(cli.args)
}
