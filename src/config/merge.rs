//! Applying command-line flags on top of loaded configuration

use super::SetupConfig;
use crate::scheme::MergePolicy;
use std::path::PathBuf;

/// Flags given on the command line. Unset flags leave the config value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub defaults_path: Option<PathBuf>,
    pub overwrite: bool,
    pub sort_schemes: bool,
    pub sort_keys: bool,
}

pub fn merge_cli_with_config(mut config: SetupConfig, cli: CliOverrides) -> SetupConfig {
    if let Some(path) = cli.defaults_path {
        config.defaults_path = Some(path);
    }
    if cli.overwrite {
        config.policy = MergePolicy::Overwrite;
    }
    config.sort_schemes |= cli.sort_schemes;
    config.sort_keys |= cli.sort_keys;
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_keep_config() {
        let config = SetupConfig {
            defaults_path: Some(PathBuf::from("/opt/schemes.json")),
            policy: MergePolicy::Overwrite,
            sort_schemes: true,
            sort_keys: false,
        };
        let merged = merge_cli_with_config(config.clone(), CliOverrides::default());
        assert_eq!(merged, config);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = CliOverrides {
            defaults_path: Some(PathBuf::from("mine.json")),
            overwrite: true,
            sort_schemes: true,
            sort_keys: true,
        };
        let merged = merge_cli_with_config(SetupConfig::default(), cli);
        assert_eq!(merged.defaults_path, Some(PathBuf::from("mine.json")));
        assert_eq!(merged.policy, MergePolicy::Overwrite);
        assert!(merged.sort_schemes);
        assert!(merged.sort_keys);
    }
}
