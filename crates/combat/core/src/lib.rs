//! Deterministic turn-based combat rules.
//!
//! `combat-core` defines combatants, their attack and defense strategies,
//! reversible actions with an undo history, and turn sequences. Every formula
//! uses exact integer arithmetic and nothing in this crate performs I/O or
//! logging; content loading and presentation live in downstream crates.
pub mod action;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod error;
pub mod stats;
pub mod turn;

pub use action::{
    Action, ActionError, ActionHistory, AppliedValue, AttackAction, HealAction, HistoryEntry,
    Reversible,
};
pub use combat::{AttackStrategy, DefenseStrategy, StrategyError, StrategySlot};
pub use combatant::{
    Archetype, Combatant, CombatantBuilder, CombatantId, Field, ResourceError, Roster,
    ValidationError,
};
pub use config::CombatConfig;
pub use error::{CombatError, CombatFault, ErrorSeverity};
pub use stats::{StatBlock, StatTemplate};
pub use turn::{TurnReport, TurnSequence};
