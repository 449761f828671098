//! Turn sequences: a fixed `pre_attack -> perform_attack -> post_attack`
//! skeleton whose individual steps vary by sequence.

use crate::combatant::Combatant;
use crate::config::CombatConfig;
use crate::error::CombatError;

/// Steps of a single turn. Pre and post steps default to no-ops.
pub trait TurnPhases {
    /// Runs before the attack using the state **before** mutation.
    fn pre_attack(&self, _attacker: &mut Combatant, _defender: &mut Combatant) {}

    /// Resolves the attack and returns the damage dealt.
    fn perform_attack(
        &self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
    ) -> Result<u32, CombatError> {
        attacker.attack(defender)
    }

    /// Runs after a successful attack. Returns recoil taken by the attacker.
    fn post_attack(&self, _attacker: &mut Combatant, _defender: &mut Combatant) -> u32 {
        0
    }
}

/// Plain attack with no extra steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardPhases;

impl TurnPhases for StandardPhases {}

/// Attack followed by recoil of a tenth of the attacker's max health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerAttackPhases;

impl TurnPhases for PowerAttackPhases {
    fn post_attack(&self, attacker: &mut Combatant, _defender: &mut Combatant) -> u32 {
        let stats = attacker.stats();
        let recoil = CombatConfig::scale(stats.max_health(), CombatConfig::POWER_ATTACK_RECOIL);
        let before = stats.health();
        attacker.set_health(before.saturating_sub(recoil));
        before - attacker.stats().health()
    }
}

/// Selectable turn sequence.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum TurnSequence {
    #[default]
    Standard,
    PowerAttack,
}

impl TurnSequence {
    fn phases(self) -> &'static dyn TurnPhases {
        match self {
            Self::Standard => &StandardPhases,
            Self::PowerAttack => &PowerAttackPhases,
        }
    }

    /// Runs one full turn of `attacker` against `defender`.
    ///
    /// # Errors
    ///
    /// Propagates the attack step's error; the post step is skipped in that
    /// case, so a failed power attack costs no recoil.
    pub fn execute_turn(
        self,
        attacker: &mut Combatant,
        defender: &mut Combatant,
    ) -> Result<TurnReport, CombatError> {
        let phases = self.phases();

        phases.pre_attack(attacker, defender);
        let damage = phases.perform_attack(attacker, defender)?;
        let recoil = phases.post_attack(attacker, defender);

        Ok(TurnReport {
            sequence: self,
            damage,
            recoil,
            attacker_defeated: attacker.is_dead(),
            defender_defeated: defender.is_dead(),
        })
    }
}

/// Outcome of one executed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub sequence: TurnSequence,
    /// Damage that got through the defender's mitigation.
    pub damage: u32,
    /// Health the attacker lost to its own sequence.
    pub recoil: u32,
    pub attacker_defeated: bool,
    pub defender_defeated: bool,
}
