//! Config file and environment loading

use crate::scheme::MergePolicy;
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `SCHEME_SETUP_DEFAULTS_PATH`.
pub const ENV_PREFIX: &str = "SCHEME_SETUP_";

/// File name of the defaults document installed next to the executable.
pub const BUNDLED_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Defaults document to read schemes from. `None` means the bundled one.
    pub defaults_path: Option<PathBuf>,
    pub policy: MergePolicy,
    pub sort_schemes: bool,
    pub sort_keys: bool,
}

impl SetupConfig {
    /// The configured defaults path, or the bundled file if it is installed.
    pub fn resolved_defaults_path(&self) -> Option<PathBuf> {
        self.defaults_path.clone().or_else(bundled_defaults_path)
    }
}

/// `settings.json` next to the running executable, if present.
pub fn bundled_defaults_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(BUNDLED_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

pub fn load_config(config_path: Option<&Path>) -> Result<SetupConfig> {
    let figment = file_layers(config_path)?.merge(Env::prefixed(ENV_PREFIX));
    figment.extract().context("Invalid configuration")
}

/// Built-in defaults plus the optional config file, without the environment.
pub fn file_layers(config_path: Option<&Path>) -> Result<Figment> {
    let figment = Figment::from(Serialized::defaults(SetupConfig::default()));

    let Some(path) = config_path else {
        return Ok(figment);
    };

    // figment silently skips missing files; an explicit path must exist.
    if !path.is_file() {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    tracing::debug!("Loading config from {}", path.display());

    match ext.as_str() {
        "toml" => Ok(figment.merge(Toml::file(path))),
        "yaml" | "yml" => Ok(figment.merge(Yaml::file(path))),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            path.display()
        ),
    }
}
