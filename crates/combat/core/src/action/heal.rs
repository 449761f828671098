use super::{ActionError, AppliedValue, Reversible, display_name};
use crate::combatant::{CombatantId, Roster};
use crate::error::CombatError;

/// Restores health to a single combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealAction {
    target: CombatantId,
    amount: u32,
    healing_done: Option<u32>,
}

impl HealAction {
    pub fn new(target: CombatantId, amount: u32) -> Self {
        Self {
            target,
            amount,
            healing_done: None,
        }
    }

    pub const fn target(&self) -> CombatantId {
        self.target
    }

    /// Requested heal amount.
    pub const fn amount(&self) -> u32 {
        self.amount
    }
}

impl Reversible for HealAction {
    fn execute(&mut self, roster: &mut Roster) -> Result<AppliedValue, CombatError> {
        let actual = roster.require_mut(self.target)?.heal(self.amount);
        self.healing_done = Some(actual);
        Ok(AppliedValue::Healing {
            requested: self.amount,
            actual,
        })
    }

    fn undo(&mut self, roster: &mut Roster) -> Result<(), CombatError> {
        let healing_done = self.healing_done.ok_or(ActionError::NotExecuted)?;
        let target = roster.require_mut(self.target)?;
        let health = target.stats().health();
        target.set_health(health.saturating_sub(healing_done));
        self.healing_done = None;
        Ok(())
    }

    fn describe(&self, roster: &Roster) -> String {
        format!(
            "Heal {} for {} HP",
            display_name(roster, self.target),
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{AttackStrategy, DefenseStrategy};
    use crate::combatant::{Archetype, Combatant};
    use crate::stats::StatBlock;

    fn roster_with_archer(health: u32) -> (Roster, CombatantId) {
        let mut archer = Combatant::builder()
            .name("Legolas")
            .archetype(Archetype::Archer)
            .stats(StatBlock::new(100, 50, 10, 50).unwrap())
            .attack_strategy(AttackStrategy::Ranged)
            .defense_strategy(DefenseStrategy::Standard)
            .build()
            .unwrap();
        archer.set_health(health);

        let mut roster = Roster::new();
        let id = roster.insert(archer);
        (roster, id)
    }

    #[test]
    fn heal_and_undo() {
        let (mut roster, id) = roster_with_archer(40);
        let mut action = HealAction::new(id, 30);

        let applied = action.execute(&mut roster).unwrap();
        assert_eq!(
            applied,
            AppliedValue::Healing {
                requested: 30,
                actual: 30
            }
        );
        assert_eq!(roster.get(id).unwrap().stats().health(), 70);

        action.undo(&mut roster).unwrap();
        assert_eq!(roster.get(id).unwrap().stats().health(), 40);
    }

    #[test]
    fn capped_heal_undoes_only_what_was_applied() {
        let (mut roster, id) = roster_with_archer(90);
        let mut action = HealAction::new(id, 30);

        assert_eq!(action.execute(&mut roster).unwrap().amount(), 10);
        assert_eq!(roster.get(id).unwrap().stats().health(), 100);

        action.undo(&mut roster).unwrap();
        assert_eq!(roster.get(id).unwrap().stats().health(), 90);
    }

    #[test]
    fn unknown_target_fails() {
        let (mut roster, _) = roster_with_archer(50);
        let missing = CombatantId(3);
        let mut action = HealAction::new(missing, 10);

        assert_eq!(
            action.execute(&mut roster),
            Err(CombatError::Action(ActionError::CombatantNotFound(missing)))
        );
    }

    #[test]
    fn describes_requested_amount() {
        let (roster, id) = roster_with_archer(50);
        assert_eq!(
            HealAction::new(id, 25).describe(&roster),
            "Heal Legolas for 25 HP"
        );
    }
}
