//! Archetype content and data-file loaders.
//!
//! This crate houses the built-in archetype catalog and provides loaders for
//! RON/TOML data files:
//! - Archetype templates (data-driven via RON)
//! - Arena rules (data-driven via TOML)
//!
//! All loaders use combat-core types directly with serde for deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ArchetypeCatalog, ArchetypeTemplate, CatalogError};

#[cfg(feature = "loaders")]
pub use loaders::{ArenaRules, CatalogLoader, ContentFactory, RulesLoader};
