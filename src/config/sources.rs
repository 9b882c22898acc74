//! Config sources: global config file and environment overrides

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;
use config::File;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Prefix of environment overrides (`SLNGEN__LOGGING__LEVEL=debug`).
const ENV_PREFIX: &str = "SLNGEN";

/// Path of the global config file (`$XDG_CONFIG_HOME/slngen/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "slngen").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global config file to builder, if it exists.
pub fn add_global_file(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match global_config_path() {
        Some(path) if path.is_file() => {
            builder.add_source(File::from(path.as_path()).required(false))
        }
        _ => builder,
    }
}

/// Add an explicit config file to builder. The file must exist.
pub fn add_explicit_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).required(true))
}

/// Add environment overrides to builder (highest precedence).
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
}
