//! Action execution errors.

use crate::combatant::CombatantId;
use crate::error::{CombatFault, ErrorSeverity};

/// Errors that can occur while executing or reversing an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The roster has no combatant with this id.
    #[error("combatant {0} not found")]
    CombatantNotFound(CombatantId),

    /// An attack named the same combatant as attacker and target.
    #[error("combatant {0} cannot attack itself")]
    SelfTarget(CombatantId),

    /// Undo requested for an action that has no captured effect
    /// (never executed, or already undone).
    #[error("action has not been executed")]
    NotExecuted,
}

impl CombatFault for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CombatantNotFound(_) | Self::SelfTarget(_) => ErrorSeverity::Validation,
            Self::NotExecuted => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CombatantNotFound(_) => "ACTION_COMBATANT_NOT_FOUND",
            Self::SelfTarget(_) => "ACTION_SELF_TARGET",
            Self::NotExecuted => "ACTION_NOT_EXECUTED",
        }
    }
}
