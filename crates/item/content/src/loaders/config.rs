//! Builder configuration loader.

use std::path::Path;

use item_core::BuilderConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for builder configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing BuilderConfig
    ///
    /// Missing keys fall back to [`BuilderConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BuilderConfig> {
        let content = read_file(path)?;
        let config: BuilderConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))?;

        Ok(config)
    }
}
