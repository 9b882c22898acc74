//! Configuration System
//!
//! Configuration covers how the tool reports what it does (logging). The
//! generated document depends on the input directory alone. Sources, lowest
//! precedence first: defaults, the global config file (or an explicit file),
//! then `SLNGEN__*` environment variables.

use crate::error::SlnError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge_policy;
mod sources;

pub use sources::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlnConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Loads [`SlnConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global config file and environment overrides.
    pub fn load() -> Result<SlnConfig, SlnError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::add_global_file(builder);
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load defaults, the given file (instead of the global one) and
    /// environment overrides.
    pub fn load_from_file(path: &Path) -> Result<SlnConfig, SlnError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::add_explicit_file(builder, path);
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }
}
