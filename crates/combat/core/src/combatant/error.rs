//! Construction and resource errors.

use crate::error::{CombatFault, ErrorSeverity};

/// Mandatory construction fields, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Archetype,
    Stats,
    AttackStrategy,
    DefenseStrategy,
}

impl Field {
    /// Human-readable field name used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Archetype => "archetype",
            Self::Stats => "stats",
            Self::AttackStrategy => "attack strategy",
            Self::DefenseStrategy => "defense strategy",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while constructing stat blocks and combatants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A mandatory builder field was never set.
    #[error("missing required field: {0}")]
    MissingField(Field),

    /// The name was set but contains no visible characters.
    #[error("name must not be empty")]
    EmptyName,

    /// Maximum health must be at least 1.
    #[error("max health must be positive")]
    NonPositiveMaxHealth,
}

impl CombatFault for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "VALIDATION_MISSING_FIELD",
            Self::EmptyName => "VALIDATION_EMPTY_NAME",
            Self::NonPositiveMaxHealth => "VALIDATION_NON_POSITIVE_MAX_HEALTH",
        }
    }
}

/// Errors raised when a combatant cannot pay a resource cost.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("insufficient mana: requested {requested}, available {available}")]
    InsufficientMana { requested: u32, available: u32 },
}

impl CombatFault for ResourceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientMana { .. } => "RESOURCE_INSUFFICIENT_MANA",
        }
    }
}
