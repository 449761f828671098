//! Arena harness for the combat engine.
//!
//! Loads content, runs the narrated demo and scripted duels. The `arena`
//! binary is a thin composition root over this library.
pub mod config;
pub mod demo;
pub mod duel;
pub mod logging;

pub use config::ArenaConfig;
pub use duel::{DuelLog, DuelOutcome, TurnRecord, run_duel};

use anyhow::Result;
use combat_content::{ArchetypeCatalog, ArenaRules, ContentFactory};

/// Content resolved for one arena run.
#[derive(Clone, Debug)]
pub struct ArenaContent {
    pub catalog: ArchetypeCatalog,
    pub rules: ArenaRules,
}

impl ArenaContent {
    /// Loads content from `config.data_dir`, falling back to the built-in
    /// catalog and default rules for any file that cannot be loaded.
    pub fn load(config: &ArenaConfig) -> Self {
        let factory = ContentFactory::new(&config.data_dir);

        let catalog = factory.load_catalog().unwrap_or_else(|e| {
            tracing::warn!("Using built-in archetypes: {:#}", e);
            ArchetypeCatalog::builtin()
        });

        let mut rules = factory.load_rules().unwrap_or_else(|e| {
            tracing::warn!("Using default arena rules: {:#}", e);
            ArenaRules::default()
        });
        if let Some(max_rounds) = config.max_rounds {
            rules.max_rounds = max_rounds;
        }

        Self { catalog, rules }
    }
}

/// Runs the full demo, writing the narration to `out`.
pub fn run(out: &mut impl std::io::Write, config: &ArenaConfig) -> Result<()> {
    let content = ArenaContent::load(config);
    tracing::info!(
        archetypes = content.catalog.len(),
        max_rounds = content.rules.max_rounds,
        challenger = %config.challenger,
        opponent = %config.opponent,
        "arena content ready"
    );
    demo::run(out, &content.catalog, &content.rules, config)
}
