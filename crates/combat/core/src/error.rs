//! Common error infrastructure for combat-core.
//!
//! This module provides the shared classification trait used by every error type
//! in the crate, plus the [`CombatError`] umbrella returned by operations that can
//! fail for more than one reason. Domain-specific errors (e.g. `ValidationError`,
//! `ResourceError`, `ActionError`) live alongside the code that raises them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Side Channels**: The core never logs; callers decide what to surface

use crate::action::ActionError;
use crate::combat::StrategyError;
use crate::combatant::{ResourceError, ValidationError};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The operation may succeed later or with a different choice
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistency that indicates a bug
/// - **Fatal**: The request can never be honoured
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry after the state changes or pick another action.
    ///
    /// Examples: not enough mana for a spell
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: missing builder field, unknown combatant id
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: undoing an action that never executed
    Internal,

    /// Fatal error - rejected outright.
    ///
    /// Examples: assigning an absent strategy to a combatant
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatFault: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Umbrella error for operations that touch several subsystems at once
/// (attacks, actions, turn sequences).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Action(#[from] ActionError),
}

impl CombatFault for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation(err) => err.severity(),
            Self::Resource(err) => err.severity(),
            Self::Strategy(err) => err.severity(),
            Self::Action(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.error_code(),
            Self::Resource(err) => err.error_code(),
            Self::Strategy(err) => err.error_code(),
            Self::Action(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Field;

    #[test]
    fn umbrella_delegates_classification() {
        let err = CombatError::from(ResourceError::InsufficientMana {
            requested: 10,
            available: 3,
        });
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert_eq!(err.error_code(), "RESOURCE_INSUFFICIENT_MANA");

        let err = CombatError::from(ValidationError::MissingField(Field::Stats));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_recoverable());
    }

    #[test]
    fn severity_classification() {
        let not_executed = CombatError::from(ActionError::NotExecuted);
        assert!(not_executed.severity().is_internal());
        assert_eq!(not_executed.error_code(), "ACTION_NOT_EXECUTED");

        let unassigned = CombatError::from(StrategyError::Unassigned {
            slot: crate::combat::StrategySlot::Defense,
        });
        assert!(unassigned.severity().is_internal());
        assert_eq!(unassigned.severity().as_str(), "fatal");

        let missing = CombatError::from(ValidationError::EmptyName);
        assert!(!missing.severity().is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
    }

    #[test]
    fn transparent_display() {
        let err = CombatError::from(ValidationError::MissingField(Field::AttackStrategy));
        assert_eq!(err.to_string(), "missing required field: attack strategy");
    }
}
