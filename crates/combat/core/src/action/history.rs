use super::{Action, AppliedValue, Reversible};
use crate::combatant::Roster;
use crate::error::CombatError;

/// One executed action together with the description captured when it ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    action: Action,
    description: String,
    applied: AppliedValue,
}

impl HistoryEntry {
    pub const fn action(&self) -> &Action {
        &self.action
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn applied(&self) -> AppliedValue {
        self.applied
    }
}

/// Executes actions and keeps the successful ones on an undo stack.
///
/// Only actions whose `execute` succeeded are recorded. Undo pops in LIFO
/// order; an entry whose undo fails stays on the stack.
#[derive(Clone, Debug, Default)]
pub struct ActionHistory {
    entries: Vec<HistoryEntry>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes `action` against `roster` and records it on success.
    ///
    /// The description is taken before execution so it reflects the names
    /// the action was issued with.
    pub fn execute(
        &mut self,
        roster: &mut Roster,
        action: impl Into<Action>,
    ) -> Result<AppliedValue, CombatError> {
        let mut action = action.into();
        let description = action.describe(roster);
        let applied = action.execute(roster)?;

        self.entries.push(HistoryEntry {
            action,
            description,
            applied,
        });
        Ok(applied)
    }

    /// Reverses the most recent action.
    ///
    /// Returns `Ok(None)` when there is nothing to undo.
    pub fn undo_last(&mut self, roster: &mut Roster) -> Result<Option<HistoryEntry>, CombatError> {
        let Some(entry) = self.entries.last_mut() else {
            return Ok(None);
        };
        entry.action.undo(roster)?;
        Ok(self.entries.pop())
    }

    /// Recorded entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterates over the recorded descriptions, oldest first.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(HistoryEntry::description)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Forgets every entry without reversing anything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
