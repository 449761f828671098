//! Combatants and the roster that owns them.
//!
//! A [`Combatant`] wraps one [`StatBlock`] (replaced wholesale on every
//! mutation) plus one attack and one defense strategy. Health only changes
//! through [`Combatant::take_damage`], [`Combatant::heal`] and
//! [`Combatant::set_health`]; an attack never writes the target's health
//! directly.

mod builder;
mod error;
mod roster;

pub use builder::CombatantBuilder;
pub use error::{Field, ResourceError, ValidationError};
pub use roster::{CombatantId, Roster};

use crate::combat::{AttackStrategy, DefenseStrategy, StrategyError, StrategySlot};
use crate::error::CombatError;
use crate::stats::StatBlock;

/// Enumerated combatant kind.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    Warrior,
    Mage,
    Archer,
    Rogue,
}

/// Entity taking part in combat.
///
/// Equality and hashing only consider `(name, archetype)`: two combatants with
/// the same identity compare equal whatever their current stats.
#[derive(Clone, Debug)]
pub struct Combatant {
    name: String,
    archetype: Archetype,
    stats: StatBlock,
    attack_strategy: AttackStrategy,
    defense_strategy: DefenseStrategy,
}

impl Combatant {
    /// Starts a validating builder.
    pub fn builder() -> CombatantBuilder {
        CombatantBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub const fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub const fn attack_strategy(&self) -> AttackStrategy {
        self.attack_strategy
    }

    pub const fn defense_strategy(&self) -> DefenseStrategy {
        self.defense_strategy
    }

    pub const fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub const fn is_dead(&self) -> bool {
        self.stats.is_dead()
    }

    // ========================================================================
    // Combat
    // ========================================================================

    /// Attacks `target` and returns the damage that got through its defense.
    ///
    /// The attack strategy computes raw damage (possibly spending this
    /// combatant's mana), the target mitigates it with [`Self::defend`], and
    /// the mitigated amount is applied with [`Self::take_damage`].
    ///
    /// # Errors
    ///
    /// Propagates [`ResourceError`] from the strategy; neither combatant's
    /// health changes in that case.
    pub fn attack(&mut self, target: &mut Combatant) -> Result<u32, CombatError> {
        let strategy = self.attack_strategy;
        let raw_damage = strategy.calculate_damage(self, target)?;
        let mitigated = target.defend(raw_damage);
        target.take_damage(mitigated);
        Ok(mitigated)
    }

    /// Returns how much of `incoming_damage` survives this combatant's defense.
    ///
    /// Does not mutate anything.
    pub fn defend(&self, incoming_damage: u32) -> u32 {
        self.defense_strategy
            .calculate_damage_reduction(self, incoming_damage)
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Removes up to `amount` health (floored at 0). Returns the health lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.stats.health();
        self.stats = self.stats.with_health(before.saturating_sub(amount));
        before - self.stats.health()
    }

    /// Restores up to `amount` health (capped at max). Returns the health gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.stats.health();
        self.stats = self.stats.with_health(before.saturating_add(amount));
        self.stats.health() - before
    }

    /// Assigns health directly, bypassing defense. Clamped to `[0, max_health]`.
    pub fn set_health(&mut self, value: u32) {
        self.stats = self.stats.with_health(value);
    }

    // ========================================================================
    // Mana
    // ========================================================================

    /// Spends `amount` mana.
    ///
    /// # Errors
    ///
    /// [`ResourceError::InsufficientMana`] when `amount` exceeds current mana.
    pub fn use_mana(&mut self, amount: u32) -> Result<(), ResourceError> {
        let available = self.stats.mana();
        if amount > available {
            return Err(ResourceError::InsufficientMana {
                requested: amount,
                available,
            });
        }
        self.stats = self.stats.with_mana(available - amount);
        Ok(())
    }

    /// Restores up to `amount` mana (capped at max). Returns the mana gained.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let before = self.stats.mana();
        self.stats = self.stats.with_mana(before.saturating_add(amount));
        self.stats.mana() - before
    }

    /// Assigns mana directly. Clamped to `[0, max_mana]`.
    pub fn set_mana(&mut self, value: u32) {
        self.stats = self.stats.with_mana(value);
    }

    // ========================================================================
    // Strategies
    // ========================================================================

    pub fn set_attack_strategy(&mut self, strategy: AttackStrategy) {
        self.attack_strategy = strategy;
    }

    pub fn set_defense_strategy(&mut self, strategy: DefenseStrategy) {
        self.defense_strategy = strategy;
    }

    /// Swaps the attack strategy, rejecting an absent one.
    ///
    /// Returns the previous strategy on success.
    pub fn assign_attack_strategy(
        &mut self,
        strategy: Option<AttackStrategy>,
    ) -> Result<AttackStrategy, StrategyError> {
        let strategy = strategy.ok_or(StrategyError::Unassigned {
            slot: StrategySlot::Attack,
        })?;
        Ok(core::mem::replace(&mut self.attack_strategy, strategy))
    }

    /// Swaps the defense strategy, rejecting an absent one.
    ///
    /// Returns the previous strategy on success.
    pub fn assign_defense_strategy(
        &mut self,
        strategy: Option<DefenseStrategy>,
    ) -> Result<DefenseStrategy, StrategyError> {
        let strategy = strategy.ok_or(StrategyError::Unassigned {
            slot: StrategySlot::Defense,
        })?;
        Ok(core::mem::replace(&mut self.defense_strategy, strategy))
    }
}

impl PartialEq for Combatant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.archetype == other.archetype
    }
}

impl Eq for Combatant {}

impl core::hash::Hash for Combatant {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.archetype.hash(state);
    }
}

impl core::fmt::Display for Combatant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} the {} (HP {}/{}, MP {}/{})",
            self.name,
            self.archetype,
            self.stats.health(),
            self.stats.max_health(),
            self.stats.mana(),
            self.stats.max_mana(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn warrior(name: &str) -> Combatant {
        Combatant::builder()
            .name(name)
            .archetype(Archetype::Warrior)
            .stats(StatBlock::new(100, 50, 20, 30).unwrap())
            .attack_strategy(AttackStrategy::Melee)
            .defense_strategy(DefenseStrategy::Standard)
            .build()
            .unwrap()
    }

    #[test]
    fn attack_applies_mitigated_damage() {
        let mut attacker = warrior("Attacker");
        let mut defender = warrior("Defender");

        // melee 60, standard defense 20 / 2 = 10
        let dealt = attacker.attack(&mut defender).unwrap();

        assert_eq!(dealt, 50);
        assert_eq!(defender.stats().health(), 50);
        assert_eq!(attacker.stats().health(), 100);
    }

    #[test]
    fn defend_does_not_mutate() {
        let defender = warrior("Defender");
        assert_eq!(defender.defend(50), 40);
        assert_eq!(defender.stats().health(), 100);
    }

    #[test]
    fn failed_magic_attack_leaves_health_untouched() {
        let mut mage = warrior("Mage");
        mage.set_attack_strategy(AttackStrategy::Magic);
        mage.set_mana(5);
        let mut defender = warrior("Defender");

        let err = mage.attack(&mut defender).unwrap_err();

        assert!(matches!(
            err,
            CombatError::Resource(ResourceError::InsufficientMana { .. })
        ));
        assert_eq!(defender.stats().health(), 100);
        assert_eq!(mage.stats().health(), 100);
        assert_eq!(mage.stats().mana(), 5);
    }

    #[test]
    fn take_damage_floors_at_zero() {
        let mut target = warrior("Target");
        assert_eq!(target.take_damage(30), 30);
        assert_eq!(target.take_damage(500), 70);
        assert_eq!(target.stats().health(), 0);
        assert!(target.is_dead());
        assert!(!target.is_alive());
    }

    #[test]
    fn heal_reports_actual_amount() {
        let mut target = warrior("Target");
        target.take_damage(10);
        assert_eq!(target.heal(30), 10);
        assert_eq!(target.stats().health(), 100);
    }

    #[test]
    fn set_health_clamps() {
        let mut target = warrior("Target");
        target.set_health(40);
        assert_eq!(target.stats().health(), 40);
        target.set_health(1_000);
        assert_eq!(target.stats().health(), 100);
    }

    #[test]
    fn mana_spending_and_restoring() {
        let mut caster = warrior("Caster");
        caster.use_mana(25).unwrap();
        assert_eq!(caster.stats().mana(), 5);

        assert_eq!(
            caster.use_mana(6),
            Err(ResourceError::InsufficientMana {
                requested: 6,
                available: 5
            })
        );
        assert_eq!(caster.stats().mana(), 5);

        assert_eq!(caster.restore_mana(100), 25);
        assert_eq!(caster.stats().mana(), 30);
    }

    #[test]
    fn mixed_operations_stay_within_bounds() {
        let mut hero = warrior("Hero");
        let steps: [(&str, fn(&mut Combatant)); 12] = [
            ("take_damage 30", |c| {
                c.take_damage(30);
            }),
            ("heal 500", |c| {
                c.heal(500);
            }),
            ("use_mana 20", |c| {
                let _ = c.use_mana(20);
            }),
            ("take_damage 1000", |c| {
                c.take_damage(1_000);
            }),
            ("use_mana 50", |c| {
                let _ = c.use_mana(50);
            }),
            ("heal 0", |c| {
                c.heal(0);
            }),
            ("restore_mana max", |c| {
                c.restore_mana(u32::MAX);
            }),
            ("set_health max", |c| c.set_health(u32::MAX)),
            ("heal max", |c| {
                c.heal(u32::MAX);
            }),
            ("use_mana 30", |c| {
                let _ = c.use_mana(30);
            }),
            ("set_health 0", |c| c.set_health(0)),
            ("take_damage 5", |c| {
                c.take_damage(5);
            }),
        ];

        for (label, step) in steps {
            step(&mut hero);
            let stats = hero.stats();
            assert!(stats.health() <= stats.max_health(), "health after {label}");
            assert!(stats.mana() <= stats.max_mana(), "mana after {label}");
        }

        assert_eq!(hero.stats().health(), 0);
        assert_eq!(hero.stats().mana(), 0);
        assert_eq!(hero.stats().max_health(), 100);
        assert_eq!(hero.stats().max_mana(), 30);
    }

    #[test]
    fn strategies_swap_at_runtime() {
        let mut hero = warrior("Hero");
        hero.set_defense_strategy(DefenseStrategy::HeavyArmor);
        assert_eq!(hero.defend(100), 80);

        let previous = hero
            .assign_attack_strategy(Some(AttackStrategy::Ranged))
            .unwrap();
        assert_eq!(previous, AttackStrategy::Melee);
        assert_eq!(hero.attack_strategy(), AttackStrategy::Ranged);
    }

    #[test]
    fn absent_strategy_is_rejected() {
        let mut hero = warrior("Hero");

        assert_eq!(
            hero.assign_attack_strategy(None),
            Err(StrategyError::Unassigned {
                slot: StrategySlot::Attack
            })
        );
        assert_eq!(
            hero.assign_defense_strategy(None),
            Err(StrategyError::Unassigned {
                slot: StrategySlot::Defense
            })
        );
        assert_eq!(hero.attack_strategy(), AttackStrategy::Melee);
        assert_eq!(hero.defense_strategy(), DefenseStrategy::Standard);
    }

    #[test]
    fn identity_ignores_stats() {
        let fresh = warrior("Conan");
        let mut wounded = warrior("Conan");
        wounded.take_damage(40);

        assert_eq!(fresh, wounded);
        assert_ne!(fresh, warrior("Other"));

        let set: HashSet<_> = [fresh, wounded].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn identity_includes_archetype() {
        let warrior = warrior("Shadow");
        let mut rogue = warrior.clone();
        rogue.archetype = Archetype::Rogue;
        assert_ne!(warrior, rogue);
    }
}
