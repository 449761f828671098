//! Defensive mitigation.

use crate::combatant::Combatant;
use crate::config::CombatConfig;

/// How a combatant mitigates incoming damage.
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
pub enum DefenseStrategy {
    /// Subtracts half of the defense stat.
    Standard,
    /// Subtracts the full defense stat, but never mitigates more than 75%.
    HeavyArmor,
}

impl DefenseStrategy {
    /// Calculate the damage that gets through after mitigation.
    ///
    /// # Formula
    ///
    /// ```text
    /// standard    = max(0, incoming - floor(defense / 2))
    /// heavy_armor = max(floor(incoming × 0.25), incoming - defense)
    /// ```
    ///
    /// The result is always `<= incoming_damage`.
    pub fn calculate_damage_reduction(self, defender: &Combatant, incoming_damage: u32) -> u32 {
        let defense = defender.stats().defense();

        match self {
            Self::Standard => {
                let reduction = defense / CombatConfig::STANDARD_DEFENSE_DIVISOR;
                incoming_damage.saturating_sub(reduction)
            }
            Self::HeavyArmor => {
                let pass_through = CombatConfig::scale(
                    incoming_damage,
                    CombatConfig::HEAVY_ARMOR_MIN_PASS_THROUGH,
                );
                incoming_damage.saturating_sub(defense).max(pass_through)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::AttackStrategy;
    use crate::combatant::Archetype;
    use crate::stats::StatBlock;

    fn defender(defense: u32, strategy: DefenseStrategy) -> Combatant {
        Combatant::builder()
            .name("Defender")
            .archetype(Archetype::Warrior)
            .stats(StatBlock::new(100, 10, defense, 0).unwrap())
            .attack_strategy(AttackStrategy::Melee)
            .defense_strategy(strategy)
            .build()
            .unwrap()
    }

    #[test]
    fn standard_halves_defense() {
        let target = defender(20, DefenseStrategy::Standard);
        assert_eq!(
            DefenseStrategy::Standard.calculate_damage_reduction(&target, 50),
            40
        );
    }

    #[test]
    fn standard_never_negative() {
        let target = defender(200, DefenseStrategy::Standard);
        assert_eq!(
            DefenseStrategy::Standard.calculate_damage_reduction(&target, 50),
            0
        );
    }

    #[test]
    fn heavy_armor_subtracts_full_defense() {
        let target = defender(30, DefenseStrategy::HeavyArmor);
        assert_eq!(
            DefenseStrategy::HeavyArmor.calculate_damage_reduction(&target, 100),
            70
        );
    }

    #[test]
    fn heavy_armor_caps_mitigation() {
        let target = defender(80, DefenseStrategy::HeavyArmor);
        assert_eq!(
            DefenseStrategy::HeavyArmor.calculate_damage_reduction(&target, 100),
            25
        );
    }

    #[test]
    fn heavy_armor_floors_small_hits() {
        // floor(3 × 0.25) = 0
        let target = defender(80, DefenseStrategy::HeavyArmor);
        assert_eq!(
            DefenseStrategy::HeavyArmor.calculate_damage_reduction(&target, 3),
            0
        );
    }

    #[test]
    fn mitigation_never_exceeds_incoming() {
        for defense in [0, 1, 5, 20, 99, 1000] {
            for strategy in [DefenseStrategy::Standard, DefenseStrategy::HeavyArmor] {
                let target = defender(defense, strategy);
                for incoming in [0, 1, 3, 4, 17, 100, 5000] {
                    let result = strategy.calculate_damage_reduction(&target, incoming);
                    assert!(result <= incoming, "{strategy} {defense} {incoming}");
                }
            }
        }
    }

    #[test]
    fn snake_case_names() {
        assert_eq!(DefenseStrategy::HeavyArmor.as_ref(), "heavy_armor");
        assert_eq!(
            "heavy_armor".parse::<DefenseStrategy>(),
            Ok(DefenseStrategy::HeavyArmor)
        );
    }
}
