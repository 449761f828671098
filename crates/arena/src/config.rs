//! Arena configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use combat_core::Archetype;

/// Configuration for a single arena run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Directory holding `archetypes.ron` and `rules.toml`.
    pub data_dir: PathBuf,
    /// Overrides `max_rounds` from `rules.toml` when set.
    pub max_rounds: Option<u32>,
    pub challenger: Archetype,
    pub opponent: Archetype,
}

impl ArenaConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/combat/content/data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Content data directory (default: `crates/combat/content/data`)
    /// - `ARENA_MAX_ROUNDS` - Round limit for the duel (default: from `rules.toml`)
    /// - `ARENA_CHALLENGER` - Archetype of the first fighter (default: warrior)
    /// - `ARENA_OPPONENT` - Archetype of the second fighter (default: mage)
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ARENA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.max_rounds = read_env::<u32>("ARENA_MAX_ROUNDS").map(|rounds| rounds.max(1));

        if let Some(archetype) = read_env::<Archetype>("ARENA_CHALLENGER") {
            config.challenger = archetype;
        }
        if let Some(archetype) = read_env::<Archetype>("ARENA_OPPONENT") {
            config.opponent = archetype;
        }

        config
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            max_rounds: None,
            challenger: Archetype::Warrior,
            opponent: Archetype::Mage,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
