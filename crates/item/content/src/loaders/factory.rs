//! Content factory for building platforms and templates from data files.

use std::path::{Path, PathBuf};

use item_core::{BuilderConfig, CatalogPlatform, MaterialCatalog};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, TemplateLoader};
use crate::templates::TemplateSet;

/// Content factory that loads all item content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── builder.toml
/// ├── materials.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "builder.toml";
    pub const CATALOG_FILE: &'static str = "materials.toml";
    pub const TEMPLATES_FILE: &'static str = "items.ron";

    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load builder configuration from `builder.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<BuilderConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no builder config, using defaults");
            return Ok(BuilderConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the material catalog from `materials.toml`.
    pub fn load_catalog(&self) -> LoadResult<MaterialCatalog> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        CatalogLoader::load(&path)
    }

    /// Build an in-memory platform over the loaded catalog.
    pub fn load_platform(&self) -> LoadResult<CatalogPlatform> {
        Ok(CatalogPlatform::new(self.load_catalog()?))
    }

    /// Load item templates from `items.ron`.
    pub fn load_templates(&self) -> LoadResult<TemplateSet> {
        let path = self.data_dir.join(Self::TEMPLATES_FILE);
        TemplateLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let factory = ContentFactory::new("/nonexistent/item-content");
        assert_eq!(factory.load_config().unwrap(), BuilderConfig::default());
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let factory = ContentFactory::new("/nonexistent/item-content");
        let err = factory.load_catalog().unwrap_err();
        assert!(err.to_string().contains("materials.toml"));
    }
}
