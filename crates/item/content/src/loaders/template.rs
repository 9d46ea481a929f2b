//! Item template loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::templates::TemplateSet;

/// Loader for item templates from RON files.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Load a template set from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a TemplateSet
    pub fn load(path: &Path) -> LoadResult<TemplateSet> {
        let content = read_file(path)?;
        let templates: TemplateSet = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse item templates RON {}: {}", path.display(), e)
        })?;

        tracing::info!(path = %path.display(), templates = templates.len(), "loaded item templates");
        Ok(templates)
    }
}
