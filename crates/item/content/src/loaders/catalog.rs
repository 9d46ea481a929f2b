//! Material catalog loader.

use std::path::Path;

use item_core::{MaterialCatalog, MaterialSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Material catalog structure for TOML files.
///
/// ```toml
/// [[materials]]
/// key = "player_head"
/// shape = "head"
///
/// [[materials]]
/// key = "diamond_sword"
/// max_stack = 1
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub materials: Vec<MaterialSpec>,
}

/// Loader for material catalogs from TOML files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a material catalog from a TOML file.
    ///
    /// Entries with a repeated key replace earlier ones. A catalog without any
    /// material is rejected, since no item could ever be built from it.
    pub fn load(path: &Path) -> LoadResult<MaterialCatalog> {
        let content = read_file(path)?;
        let file: CatalogFile = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse material catalog TOML {}: {}", path.display(), e)
        })?;

        if let Some(spec) = file.materials.iter().find(|spec| spec.max_stack == 0) {
            anyhow::bail!(
                "Material {} in {} has max_stack 0",
                spec.key,
                path.display()
            );
        }

        let catalog = MaterialCatalog::from_specs(file.materials);
        if catalog.is_empty() {
            anyhow::bail!("Material catalog {} is empty", path.display());
        }

        tracing::info!(path = %path.display(), materials = catalog.len(), "loaded material catalog");
        Ok(catalog)
    }
}
