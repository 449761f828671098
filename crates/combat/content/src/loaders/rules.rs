//! Arena rules loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};

/// Tunables for a scripted duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ArenaRules {
    /// Upper bound on full rounds before the duel is declared a draw.
    pub max_rounds: u32,
    /// Every n-th turn of a combatant is a power attack; 0 disables them.
    pub power_attack_every: u32,
}

impl ArenaRules {
    pub const DEFAULT_MAX_ROUNDS: u32 = 20;
    pub const DEFAULT_POWER_ATTACK_EVERY: u32 = 3;

    /// Returns true if the given 1-based turn number is a power attack.
    pub const fn is_power_turn(&self, turn: u32) -> bool {
        self.power_attack_every != 0 && turn % self.power_attack_every == 0
    }
}

impl Default for ArenaRules {
    fn default() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            power_attack_every: Self::DEFAULT_POWER_ATTACK_EVERY,
        }
    }
}

/// Loader for arena rules from TOML files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> LoadResult<ArenaRules> {
        let content = read_file(path)?;
        let rules: ArenaRules = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML {}: {}", path.display(), e))?;

        if rules.max_rounds == 0 {
            anyhow::bail!("max_rounds must be positive in {}", path.display());
        }
        tracing::debug!(?rules, "loaded arena rules");
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_turns() {
        let rules = ArenaRules::default();
        assert!(!rules.is_power_turn(1));
        assert!(!rules.is_power_turn(2));
        assert!(rules.is_power_turn(3));
        assert!(rules.is_power_turn(6));

        let never = ArenaRules {
            power_attack_every: 0,
            ..rules
        };
        assert!(!never.is_power_turn(3));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let rules: ArenaRules = toml::from_str("max_rounds = 7").unwrap();
        assert_eq!(rules.max_rounds, 7);
        assert_eq!(rules.power_attack_every, ArenaRules::DEFAULT_POWER_ATTACK_EVERY);
    }
}
