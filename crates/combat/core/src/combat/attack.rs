//! Attack damage calculation.

use crate::combatant::{Combatant, ResourceError};
use crate::config::CombatConfig;

/// How a combatant turns its stats into raw damage.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackStrategy {
    /// Straight physical damage with a 20% bonus.
    Melee,
    /// Attack power plus a mana bonus; costs mana on every use.
    Magic,
    /// Reduced base damage that crits against badly wounded targets.
    Ranged,
}

impl AttackStrategy {
    /// Calculate raw (pre-mitigation) damage from `attacker` against `target`.
    ///
    /// # Formula
    ///
    /// ```text
    /// melee  = floor(attack × 1.2)
    /// magic  = attack + floor(mana / 10)        then mana -= 10
    /// ranged = floor(attack × 0.8)
    ///          if target health < 30% of max:  floor(ranged × 1.5)
    /// ```
    ///
    /// The ranged base is truncated before the critical multiplier applies.
    /// The critical check reads the target's health before this attack lands.
    ///
    /// # Errors
    ///
    /// Magic fails with [`ResourceError::InsufficientMana`] when the attacker
    /// cannot pay the mana cost; nothing is mutated in that case.
    pub fn calculate_damage(
        self,
        attacker: &mut Combatant,
        target: &Combatant,
    ) -> Result<u32, ResourceError> {
        match self {
            Self::Melee => Ok(CombatConfig::scale(
                attacker.stats().attack_power(),
                CombatConfig::MELEE_BONUS,
            )),
            Self::Magic => {
                let stats = attacker.stats();
                let mana_bonus = stats.mana() / CombatConfig::MAGIC_MANA_PER_BONUS;
                let damage = stats.attack_power().saturating_add(mana_bonus);
                attacker.use_mana(CombatConfig::MAGIC_MANA_COST)?;
                Ok(damage)
            }
            Self::Ranged => {
                let base = CombatConfig::scale(
                    attacker.stats().attack_power(),
                    CombatConfig::RANGED_ACCURACY,
                );
                if target
                    .stats()
                    .health_below(CombatConfig::RANGED_CRIT_THRESHOLD)
                {
                    Ok(CombatConfig::scale(
                        base,
                        CombatConfig::RANGED_CRIT_MULTIPLIER,
                    ))
                } else {
                    Ok(base)
                }
            }
        }
    }

    /// Returns true if this strategy spends attacker resources.
    pub const fn consumes_mana(self) -> bool {
        matches!(self, Self::Magic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DefenseStrategy;
    use crate::combatant::Archetype;
    use crate::stats::StatBlock;

    fn combatant(name: &str, stats: StatBlock, attack: AttackStrategy) -> Combatant {
        Combatant::builder()
            .name(name)
            .archetype(Archetype::Warrior)
            .stats(stats)
            .attack_strategy(attack)
            .defense_strategy(DefenseStrategy::Standard)
            .build()
            .unwrap()
    }

    fn target_at(health: u32) -> Combatant {
        let stats = StatBlock::new(100, 10, 0, 0).unwrap().with_health(health);
        combatant("Target", stats, AttackStrategy::Melee)
    }

    #[test]
    fn melee_adds_twenty_percent() {
        let mut attacker = combatant(
            "Hero",
            StatBlock::new(100, 50, 0, 0).unwrap(),
            AttackStrategy::Melee,
        );
        let damage = AttackStrategy::Melee
            .calculate_damage(&mut attacker, &target_at(100))
            .unwrap();
        assert_eq!(damage, 60);
    }

    #[test]
    fn melee_truncates() {
        let mut attacker = combatant(
            "Hero",
            StatBlock::new(100, 7, 0, 0).unwrap(),
            AttackStrategy::Melee,
        );
        let damage = AttackStrategy::Melee
            .calculate_damage(&mut attacker, &target_at(100))
            .unwrap();
        // 7 × 1.2 = 8.4
        assert_eq!(damage, 8);
    }

    #[test]
    fn magic_uses_mana_bonus_and_cost() {
        let mut attacker = combatant(
            "Mage",
            StatBlock::new(80, 60, 0, 50).unwrap(),
            AttackStrategy::Magic,
        );
        let damage = AttackStrategy::Magic
            .calculate_damage(&mut attacker, &target_at(100))
            .unwrap();
        assert_eq!(damage, 65);
        assert_eq!(attacker.stats().mana(), 40);
    }

    #[test]
    fn magic_without_mana_fails_cleanly() {
        let stats = StatBlock::new(80, 60, 0, 50).unwrap().with_mana(9);
        let mut attacker = combatant("Mage", stats, AttackStrategy::Magic);

        let err = AttackStrategy::Magic
            .calculate_damage(&mut attacker, &target_at(100))
            .unwrap_err();

        assert_eq!(
            err,
            ResourceError::InsufficientMana {
                requested: 10,
                available: 9
            }
        );
        assert_eq!(attacker.stats().mana(), 9);
    }

    #[test]
    fn ranged_without_crit() {
        let mut attacker = combatant(
            "Archer",
            StatBlock::new(100, 50, 0, 0).unwrap(),
            AttackStrategy::Ranged,
        );
        let damage = AttackStrategy::Ranged
            .calculate_damage(&mut attacker, &target_at(80))
            .unwrap();
        assert_eq!(damage, 40);
    }

    #[test]
    fn ranged_crit_on_wounded_target() {
        let mut attacker = combatant(
            "Archer",
            StatBlock::new(100, 50, 0, 0).unwrap(),
            AttackStrategy::Ranged,
        );
        let damage = AttackStrategy::Ranged
            .calculate_damage(&mut attacker, &target_at(20))
            .unwrap();
        assert_eq!(damage, 60);
    }

    #[test]
    fn ranged_crit_threshold_is_strict() {
        let mut attacker = combatant(
            "Archer",
            StatBlock::new(100, 50, 0, 0).unwrap(),
            AttackStrategy::Ranged,
        );
        let damage = AttackStrategy::Ranged
            .calculate_damage(&mut attacker, &target_at(30))
            .unwrap();
        assert_eq!(damage, 40);
    }

    #[test]
    fn ranged_truncates_before_crit() {
        // attack 7: base floor(5.6) = 5, crit floor(7.5) = 7
        // (a single combined floor would give floor(8.4) = 8)
        let mut attacker = combatant(
            "Archer",
            StatBlock::new(100, 7, 0, 0).unwrap(),
            AttackStrategy::Ranged,
        );
        let damage = AttackStrategy::Ranged
            .calculate_damage(&mut attacker, &target_at(10))
            .unwrap();
        assert_eq!(damage, 7);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("MAGIC".parse::<AttackStrategy>(), Ok(AttackStrategy::Magic));
        assert_eq!(AttackStrategy::Ranged.to_string(), "ranged");
    }
}
