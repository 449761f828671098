//! Archetype catalog loader.

use std::path::Path;

use crate::catalog::{ArchetypeCatalog, ArchetypeTemplate};
use crate::loaders::{LoadResult, read_file};

/// Loader for archetype templates from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an archetype catalog from a RON file.
    ///
    /// RON format: `Vec<ArchetypeTemplate>`
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    pub fn load(path: &Path) -> LoadResult<ArchetypeCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))
    }

    /// Parse an archetype catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ArchetypeCatalog> {
        let templates: Vec<ArchetypeTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype catalog RON: {}", e))?;

        let catalog = ArchetypeCatalog::from_templates(templates)?;
        tracing::debug!(archetypes = catalog.len(), "loaded archetype catalog");
        Ok(catalog)
    }
}
