use crate::combatant::ValidationError;

/// Immutable record of a combatant's vitals.
///
/// # Invariants
///
/// - `max_health >= 1`
/// - `health <= max_health`
/// - `mana <= max_mana`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatBlock {
    max_health: u32,
    health: u32,
    attack_power: u32,
    defense: u32,
    max_mana: u32,
    mana: u32,
}

impl StatBlock {
    /// Creates a fresh block with health and mana at their maximums.
    pub fn new(
        max_health: u32,
        attack_power: u32,
        defense: u32,
        max_mana: u32,
    ) -> Result<Self, ValidationError> {
        if max_health == 0 {
            return Err(ValidationError::NonPositiveMaxHealth);
        }

        Ok(Self {
            max_health,
            health: max_health,
            attack_power,
            defense,
            max_mana,
            mana: max_mana,
        })
    }

    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    pub const fn health(&self) -> u32 {
        self.health
    }

    pub const fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub const fn defense(&self) -> u32 {
        self.defense
    }

    pub const fn max_mana(&self) -> u32 {
        self.max_mana
    }

    pub const fn mana(&self) -> u32 {
        self.mana
    }

    /// Returns a copy with `health` clamped to `[0, max_health]`.
    #[must_use]
    pub const fn with_health(self, health: u32) -> Self {
        let health = if health > self.max_health {
            self.max_health
        } else {
            health
        };
        Self { health, ..self }
    }

    /// Returns a copy with `mana` clamped to `[0, max_mana]`.
    #[must_use]
    pub const fn with_mana(self, mana: u32) -> Self {
        let mana = if mana > self.max_mana {
            self.max_mana
        } else {
            mana
        };
        Self { mana, ..self }
    }

    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub const fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Returns true when `health / max_health` is strictly below `ratio`.
    pub const fn health_below(&self, ratio: (u64, u64)) -> bool {
        (self.health as u64) * ratio.1 < (self.max_health as u64) * ratio.0
    }
}

/// Serializable seed for a [`StatBlock`]; current values start at the maximums.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatTemplate {
    pub max_health: u32,
    pub attack_power: u32,
    pub defense: u32,
    pub max_mana: u32,
}

impl StatTemplate {
    pub const fn new(max_health: u32, attack_power: u32, defense: u32, max_mana: u32) -> Self {
        Self {
            max_health,
            attack_power,
            defense,
            max_mana,
        }
    }

    /// Validates the template and mints a fresh block.
    pub fn instantiate(&self) -> Result<StatBlock, ValidationError> {
        StatBlock::new(
            self.max_health,
            self.attack_power,
            self.defense,
            self.max_mana,
        )
    }
}

impl From<StatBlock> for StatTemplate {
    fn from(block: StatBlock) -> Self {
        Self::new(
            block.max_health,
            block.attack_power,
            block.defense,
            block.max_mana,
        )
    }
}
