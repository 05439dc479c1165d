//! Configuration loading and merging
//!
//! Settings are layered with increasing precedence: built-in defaults, an
//! optional config file, `SCHEME_SETUP_*` environment variables, CLI flags.

pub mod loader;
pub mod merge;

pub use loader::{load_config, SetupConfig, ENV_PREFIX};
pub use merge::{merge_cli_with_config, CliOverrides};
