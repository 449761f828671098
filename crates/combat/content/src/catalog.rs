//! Archetype templates and the catalog that mints combatants from them.

use std::collections::BTreeMap;

use combat_core::{
    Archetype, AttackStrategy, Combatant, DefenseStrategy, StatTemplate, ValidationError,
};

/// Starting loadout for one archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeTemplate {
    pub archetype: Archetype,
    pub stats: StatTemplate,
    pub attack: AttackStrategy,
    pub defense: DefenseStrategy,
}

impl ArchetypeTemplate {
    pub const fn new(
        archetype: Archetype,
        stats: StatTemplate,
        attack: AttackStrategy,
        defense: DefenseStrategy,
    ) -> Self {
        Self {
            archetype,
            stats,
            attack,
            defense,
        }
    }

    /// Builds a fresh combatant at full health and mana.
    pub fn instantiate(&self, name: impl Into<String>) -> Result<Combatant, ValidationError> {
        Combatant::builder()
            .name(name)
            .archetype(self.archetype)
            .stats(self.stats.instantiate()?)
            .attack_strategy(self.attack)
            .defense_strategy(self.defense)
            .build()
    }
}

/// Errors raised while assembling a catalog or creating combatants from it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("archetype {0} is defined more than once")]
    DuplicateArchetype(Archetype),

    #[error("archetype {0} has no template")]
    UnknownArchetype(Archetype),

    #[error("invalid template for {archetype}: {source}")]
    InvalidTemplate {
        archetype: Archetype,
        source: ValidationError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Lookup table from archetype to its starting template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchetypeCatalog {
    templates: BTreeMap<Archetype, ArchetypeTemplate>,
}

impl ArchetypeCatalog {
    /// Stock templates for all four archetypes.
    ///
    /// | Archetype | HP  | ATK | DEF | MP  | Attack | Defense     |
    /// |-----------|-----|-----|-----|-----|--------|-------------|
    /// | Warrior   | 150 | 40  | 20  | 0   | Melee  | HeavyArmor  |
    /// | Mage      | 80  | 60  | 5   | 100 | Magic  | Standard    |
    /// | Archer    | 100 | 50  | 10  | 50  | Ranged | Standard    |
    /// | Rogue     | 90  | 55  | 15  | 30  | Melee  | Standard    |
    pub fn builtin() -> Self {
        let templates = [
            ArchetypeTemplate::new(
                Archetype::Warrior,
                StatTemplate::new(150, 40, 20, 0),
                AttackStrategy::Melee,
                DefenseStrategy::HeavyArmor,
            ),
            ArchetypeTemplate::new(
                Archetype::Mage,
                StatTemplate::new(80, 60, 5, 100),
                AttackStrategy::Magic,
                DefenseStrategy::Standard,
            ),
            ArchetypeTemplate::new(
                Archetype::Archer,
                StatTemplate::new(100, 50, 10, 50),
                AttackStrategy::Ranged,
                DefenseStrategy::Standard,
            ),
            ArchetypeTemplate::new(
                Archetype::Rogue,
                StatTemplate::new(90, 55, 15, 30),
                AttackStrategy::Melee,
                DefenseStrategy::Standard,
            ),
        ];

        Self {
            templates: templates
                .into_iter()
                .map(|template| (template.archetype, template))
                .collect(),
        }
    }

    /// Assembles a catalog, rejecting duplicates and templates whose stats
    /// would not validate.
    pub fn from_templates(
        templates: impl IntoIterator<Item = ArchetypeTemplate>,
    ) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for template in templates {
            template
                .stats
                .instantiate()
                .map_err(|source| CatalogError::InvalidTemplate {
                    archetype: template.archetype,
                    source,
                })?;
            if map.insert(template.archetype, template).is_some() {
                return Err(CatalogError::DuplicateArchetype(template.archetype));
            }
        }
        Ok(Self { templates: map })
    }

    pub fn template(&self, archetype: Archetype) -> Option<&ArchetypeTemplate> {
        self.templates.get(&archetype)
    }

    /// Creates a combatant of `archetype` named `name`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownArchetype`] when the catalog has no template
    /// - [`CatalogError::Validation`] when the name is empty
    pub fn create(
        &self,
        archetype: Archetype,
        name: impl Into<String>,
    ) -> Result<Combatant, CatalogError> {
        let template = self
            .template(archetype)
            .ok_or(CatalogError::UnknownArchetype(archetype))?;
        Ok(template.instantiate(name)?)
    }

    /// Iterates over templates in archetype order.
    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ArchetypeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
