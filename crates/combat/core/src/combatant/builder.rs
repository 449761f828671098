use super::{Archetype, Combatant, Field, ValidationError};
use crate::combat::{AttackStrategy, DefenseStrategy};
use crate::stats::StatBlock;

/// Validating builder for [`Combatant`].
///
/// All five fields are mandatory. [`CombatantBuilder::build`] checks them in
/// the order name, archetype, stats, attack strategy, defense strategy and
/// reports the first one missing.
#[derive(Clone, Debug, Default)]
pub struct CombatantBuilder {
    name: Option<String>,
    archetype: Option<Archetype>,
    stats: Option<StatBlock>,
    attack_strategy: Option<AttackStrategy>,
    defense_strategy: Option<DefenseStrategy>,
}

impl CombatantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    #[must_use]
    pub fn stats(mut self, stats: StatBlock) -> Self {
        self.stats = Some(stats);
        self
    }

    #[must_use]
    pub fn attack_strategy(mut self, strategy: AttackStrategy) -> Self {
        self.attack_strategy = Some(strategy);
        self
    }

    #[must_use]
    pub fn defense_strategy(mut self, strategy: DefenseStrategy) -> Self {
        self.defense_strategy = Some(strategy);
        self
    }

    /// Validates every field and produces the combatant.
    pub fn build(self) -> Result<Combatant, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField(Field::Name))?;
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let archetype = self
            .archetype
            .ok_or(ValidationError::MissingField(Field::Archetype))?;
        let stats = self
            .stats
            .ok_or(ValidationError::MissingField(Field::Stats))?;
        let attack_strategy = self
            .attack_strategy
            .ok_or(ValidationError::MissingField(Field::AttackStrategy))?;
        let defense_strategy = self
            .defense_strategy
            .ok_or(ValidationError::MissingField(Field::DefenseStrategy))?;

        Ok(Combatant {
            name,
            archetype,
            stats,
            attack_strategy,
            defense_strategy,
        })
    }
}
