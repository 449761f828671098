use super::{ActionError, AppliedValue, Reversible, display_name};
use crate::combatant::{CombatantId, Roster};
use crate::error::CombatError;

/// One combatant attacks another.
///
/// Undo heals the target by the health it actually lost. Resources spent by
/// the attacker (mana) are not refunded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackAction {
    attacker: CombatantId,
    target: CombatantId,
    health_removed: Option<u32>,
}

impl AttackAction {
    pub fn new(attacker: CombatantId, target: CombatantId) -> Self {
        Self {
            attacker,
            target,
            health_removed: None,
        }
    }

    pub const fn attacker(&self) -> CombatantId {
        self.attacker
    }

    pub const fn target(&self) -> CombatantId {
        self.target
    }
}

impl Reversible for AttackAction {
    fn execute(&mut self, roster: &mut Roster) -> Result<AppliedValue, CombatError> {
        let (attacker, target) = roster.pair_mut(self.attacker, self.target)?;

        let before = target.stats().health();
        let dealt = attacker.attack(target)?;
        let health_removed = before - target.stats().health();

        self.health_removed = Some(health_removed);
        Ok(AppliedValue::Damage {
            dealt,
            health_removed,
        })
    }

    fn undo(&mut self, roster: &mut Roster) -> Result<(), CombatError> {
        let health_removed = self.health_removed.ok_or(ActionError::NotExecuted)?;
        roster.require_mut(self.target)?.heal(health_removed);
        self.health_removed = None;
        Ok(())
    }

    fn describe(&self, roster: &Roster) -> String {
        format!(
            "{} attacks {}",
            display_name(roster, self.attacker),
            display_name(roster, self.target)
        )
    }
}
