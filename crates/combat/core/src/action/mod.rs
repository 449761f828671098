//! Reversible actions and the undo history.
//!
//! Every state-changing operation that needs to be audited or reverted is
//! reified as an [`Action`]. Executing an action captures the state change it
//! actually observed (not the nominal input), so clamped effects reverse
//! exactly.
//!
//! # Module Structure
//!
//! - `attack`: [`AttackAction`] - one combatant strikes another
//! - `heal`: [`HealAction`] - restore health to a combatant
//! - `history`: [`ActionHistory`] - executes actions and keeps the undo stack
//! - `error`: [`ActionError`]

mod attack;
mod error;
mod heal;
mod history;

pub use attack::AttackAction;
pub use error::ActionError;
pub use heal::HealAction;
pub use history::{ActionHistory, HistoryEntry};

use crate::combatant::Roster;
use crate::error::CombatError;

/// Defines how a concrete action mutates the roster and how it is reversed.
pub trait Reversible {
    /// Performs the action, capturing whatever is needed to undo it.
    fn execute(&mut self, roster: &mut Roster) -> Result<AppliedValue, CombatError>;

    /// Reverses a previously executed action. Succeeds at most once per
    /// execution; later calls fail with [`ActionError::NotExecuted`].
    fn undo(&mut self, roster: &mut Roster) -> Result<(), CombatError>;

    /// Human-readable description, e.g. `"Conan attacks Gandalf"`.
    fn describe(&self, roster: &Roster) -> String;
}

/// Observable result of an executed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppliedValue {
    /// Damage that got through the target's defense, and the health the
    /// target actually lost (smaller when the blow overkills).
    Damage { dealt: u32, health_removed: u32 },
    /// Healing requested and healing actually applied (smaller near max).
    Healing { requested: u32, actual: u32 },
}

impl AppliedValue {
    /// Headline number: damage dealt or healing applied.
    pub const fn amount(&self) -> u32 {
        match self {
            Self::Damage { dealt, .. } => *dealt,
            Self::Healing { actual, .. } => *actual,
        }
    }
}

/// Closed set of reversible actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Attack(AttackAction),
    Heal(HealAction),
}

impl Action {
    /// Returns the snake_case name of the action kind.
    pub const fn as_snake_case(&self) -> &'static str {
        match self {
            Self::Attack(_) => "attack",
            Self::Heal(_) => "heal",
        }
    }
}

impl Reversible for Action {
    fn execute(&mut self, roster: &mut Roster) -> Result<AppliedValue, CombatError> {
        match self {
            Self::Attack(action) => action.execute(roster),
            Self::Heal(action) => action.execute(roster),
        }
    }

    fn undo(&mut self, roster: &mut Roster) -> Result<(), CombatError> {
        match self {
            Self::Attack(action) => action.undo(roster),
            Self::Heal(action) => action.undo(roster),
        }
    }

    fn describe(&self, roster: &Roster) -> String {
        match self {
            Self::Attack(action) => action.describe(roster),
            Self::Heal(action) => action.describe(roster),
        }
    }
}

impl From<AttackAction> for Action {
    fn from(action: AttackAction) -> Self {
        Self::Attack(action)
    }
}

impl From<HealAction> for Action {
    fn from(action: HealAction) -> Self {
        Self::Heal(action)
    }
}

/// Name lookup used by action descriptions; unknown ids render as the id.
pub(crate) fn display_name(roster: &Roster, id: crate::combatant::CombatantId) -> String {
    roster
        .get(id)
        .map_or_else(|| id.to_string(), |combatant| combatant.name().to_owned())
}
