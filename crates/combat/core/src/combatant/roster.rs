use std::fmt;

use super::Combatant;
use crate::action::ActionError;

/// Stable handle for a combatant owned by a [`Roster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of every combatant in a battle.
///
/// The roster is append-only: ids handed out by [`Roster::insert`] stay valid
/// for the roster's lifetime, so recorded actions can always find the
/// combatants they need to reverse.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a combatant and returns its handle.
    pub fn insert(&mut self, combatant: Combatant) -> CombatantId {
        let id = CombatantId(self.combatants.len() as u32);
        self.combatants.push(combatant);
        id
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(id.0 as usize)
    }

    /// Looks up a combatant, failing with [`ActionError::CombatantNotFound`].
    pub fn require(&self, id: CombatantId) -> Result<&Combatant, ActionError> {
        self.get(id).ok_or(ActionError::CombatantNotFound(id))
    }

    /// Mutable variant of [`Self::require`].
    pub fn require_mut(&mut self, id: CombatantId) -> Result<&mut Combatant, ActionError> {
        self.get_mut(id).ok_or(ActionError::CombatantNotFound(id))
    }

    /// Borrows two distinct combatants mutably at once.
    ///
    /// # Errors
    ///
    /// - [`ActionError::SelfTarget`] if `first == second`
    /// - [`ActionError::CombatantNotFound`] if either id is unknown
    pub fn pair_mut(
        &mut self,
        first: CombatantId,
        second: CombatantId,
    ) -> Result<(&mut Combatant, &mut Combatant), ActionError> {
        if first == second {
            return Err(ActionError::SelfTarget(first));
        }
        for id in [first, second] {
            self.require(id)?;
        }

        let (a, b) = (first.0 as usize, second.0 as usize);
        if a < b {
            let (head, tail) = self.combatants.split_at_mut(b);
            Ok((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.combatants.split_at_mut(a);
            Ok((&mut tail[0], &mut head[b]))
        }
    }

    /// Iterates over `(id, combatant)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.combatants
            .iter()
            .enumerate()
            .map(|(index, combatant)| (CombatantId(index as u32), combatant))
    }

    /// Finds the first combatant with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<CombatantId> {
        self.iter()
            .find(|(_, combatant)| combatant.name() == name)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }
}
