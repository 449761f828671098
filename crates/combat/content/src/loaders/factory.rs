//! Content factory for loading combat content from a data directory.

use std::path::{Path, PathBuf};

use crate::catalog::ArchetypeCatalog;
use crate::loaders::{ArenaRules, CatalogLoader, LoadResult, RulesLoader};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── archetypes.ron
/// └── rules.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the archetype catalog from `archetypes.ron`.
    pub fn load_catalog(&self) -> LoadResult<ArchetypeCatalog> {
        let path = self.data_dir.join("archetypes.ron");
        CatalogLoader::load(&path)
    }

    /// Load arena rules from `rules.toml`.
    pub fn load_rules(&self) -> LoadResult<ArenaRules> {
        let path = self.data_dir.join("rules.toml");
        RulesLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
