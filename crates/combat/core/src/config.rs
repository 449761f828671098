/// Combat rule constants.
///
/// Ratios are stored as integer numerator/denominator pairs so every formula is
/// evaluated with exact integer arithmetic (no floating point drift).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CombatConfig;

impl CombatConfig {
    // ===== attack strategies =====
    /// Melee bonus: damage = attack × 6/5 (+20%).
    pub const MELEE_BONUS: (u64, u64) = (6, 5);
    /// Mana spent by every magic attack.
    pub const MAGIC_MANA_COST: u32 = 10;
    /// Magic bonus: one point of damage per this much current mana.
    pub const MAGIC_MANA_PER_BONUS: u32 = 10;
    /// Ranged accuracy: base = attack × 4/5.
    pub const RANGED_ACCURACY: (u64, u64) = (4, 5);
    /// Ranged critical multiplier applied to the truncated base (× 3/2).
    pub const RANGED_CRIT_MULTIPLIER: (u64, u64) = (3, 2);
    /// Critical hits land when target health is strictly below 3/10 of max.
    pub const RANGED_CRIT_THRESHOLD: (u64, u64) = (3, 10);

    // ===== defense strategies =====
    /// Standard defense subtracts defense / 2.
    pub const STANDARD_DEFENSE_DIVISOR: u32 = 2;
    /// Heavy armor always lets at least 1/4 of incoming damage through.
    pub const HEAVY_ARMOR_MIN_PASS_THROUGH: (u64, u64) = (1, 4);

    // ===== turn sequences =====
    /// Power attack recoil: max_health / 10.
    pub const POWER_ATTACK_RECOIL: (u64, u64) = (1, 10);

    /// Applies a numerator/denominator ratio to `value`, flooring the result.
    #[inline]
    pub const fn scale(value: u32, ratio: (u64, u64)) -> u32 {
        let scaled = (value as u64 * ratio.0) / ratio.1;
        if scaled > u32::MAX as u64 {
            u32::MAX
        } else {
            scaled as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_floors() {
        assert_eq!(CombatConfig::scale(50, CombatConfig::MELEE_BONUS), 60);
        assert_eq!(CombatConfig::scale(7, CombatConfig::MELEE_BONUS), 8);
        assert_eq!(CombatConfig::scale(3, CombatConfig::HEAVY_ARMOR_MIN_PASS_THROUGH), 0);
        assert_eq!(CombatConfig::scale(155, CombatConfig::POWER_ATTACK_RECOIL), 15);
    }

    #[test]
    fn scale_saturates() {
        assert_eq!(CombatConfig::scale(u32::MAX, CombatConfig::MELEE_BONUS), u32::MAX);
    }
}
