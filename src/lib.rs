//! scheme-setup: color scheme merging and record sorting helpers
//!
//! - [`scheme`] merges bundled terminal color schemes into a settings file.
//! - [`sort`] orders JSON records by a property and record keys lexicographically.

pub mod cli;
pub mod config;
pub mod error;
pub mod scheme;
pub mod sort;

pub use error::{SetupError, SetupResult};
