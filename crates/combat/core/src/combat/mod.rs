//! Damage calculation strategies.
//!
//! Strategies are closed, stateless variants. Each one is a pure function of the
//! combatants involved; the only side effect any of them has is an explicit
//! resource spend on the attacker (magic consumes mana).
//!
//! # Core Functions
//!
//! - [`AttackStrategy::calculate_damage`]: raw damage before mitigation
//! - [`DefenseStrategy::calculate_damage_reduction`]: damage left after mitigation

pub mod attack;
pub mod defense;

pub use attack::AttackStrategy;
pub use defense::DefenseStrategy;

use crate::error::{CombatFault, ErrorSeverity};

/// Which of a combatant's two strategy slots an assignment targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StrategySlot {
    Attack,
    Defense,
}

/// Errors raised when swapping strategies at runtime.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    /// An absent strategy was offered for a slot that must always be filled.
    #[error("cannot assign an empty {slot} strategy")]
    Unassigned { slot: StrategySlot },
}

impl CombatFault for StrategyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unassigned { .. } => "STRATEGY_UNASSIGNED",
        }
    }
}
