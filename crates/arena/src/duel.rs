//! Scripted one-on-one duel.
//!
//! Two combatants alternate turns, challenger first. In every round that
//! [`ArenaRules::is_power_turn`] selects, both sides power attack. The duel ends
//! when someone falls, when an attacker can no longer pay for its attack,
//! or when the round limit is reached.

use combat_content::ArenaRules;
use combat_core::{CombatError, CombatFault, CombatantId, Roster, TurnReport, TurnSequence};

/// One resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub round: u32,
    pub attacker: CombatantId,
    pub defender: CombatantId,
    pub report: TurnReport,
}

/// How the duel ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DuelOutcome {
    /// `loser` was reduced to zero health.
    Victory {
        winner: CombatantId,
        loser: CombatantId,
    },
    /// `combatant` could not pay for its attack (e.g. a mage out of mana).
    Exhausted {
        combatant: CombatantId,
        reason: CombatError,
    },
    /// Both sides fell in the same turn (a killing blow followed by fatal
    /// recoil).
    MutualKnockout,
    /// Both sides were still standing after the last allowed round.
    Draw,
}

/// Complete result of a duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelLog {
    pub turns: Vec<TurnRecord>,
    pub rounds: u32,
    pub outcome: DuelOutcome,
}

/// Runs a duel between two combatants held in `roster`.
///
/// # Errors
///
/// Only non-recoverable combat errors are returned (unknown ids, self
/// duels). Running out of a resource ends the duel with
/// [`DuelOutcome::Exhausted`].
pub fn run_duel(
    roster: &mut Roster,
    challenger: CombatantId,
    opponent: CombatantId,
    rules: &ArenaRules,
) -> Result<DuelLog, CombatError> {
    let mut turns = Vec::new();

    for round in 1..=rules.max_rounds {
        for (attacker, defender) in [(challenger, opponent), (opponent, challenger)] {
            let sequence = if rules.is_power_turn(round) {
                TurnSequence::PowerAttack
            } else {
                TurnSequence::Standard
            };

            let (attacker_ref, defender_ref) = roster.pair_mut(attacker, defender)?;
            let report = match sequence.execute_turn(attacker_ref, defender_ref) {
                Ok(report) => report,
                Err(err) if err.severity().is_recoverable() => {
                    tracing::info!(round, %attacker, error = %err, "attacker exhausted");
                    return Ok(DuelLog {
                        turns,
                        rounds: round,
                        outcome: DuelOutcome::Exhausted {
                            combatant: attacker,
                            reason: err,
                        },
                    });
                }
                Err(err) => return Err(err),
            };

            tracing::debug!(
                round,
                %attacker,
                %defender,
                %sequence,
                damage = report.damage,
                recoil = report.recoil,
                "turn resolved"
            );
            turns.push(TurnRecord {
                round,
                attacker,
                defender,
                report,
            });

            let outcome = match (report.attacker_defeated, report.defender_defeated) {
                (false, false) => continue,
                (true, true) => DuelOutcome::MutualKnockout,
                (false, true) => DuelOutcome::Victory {
                    winner: attacker,
                    loser: defender,
                },
                (true, false) => DuelOutcome::Victory {
                    winner: defender,
                    loser: attacker,
                },
            };
            return Ok(DuelLog {
                turns,
                rounds: round,
                outcome,
            });
        }
    }

    Ok(DuelLog {
        turns,
        rounds: rules.max_rounds,
        outcome: DuelOutcome::Draw,
    })
}
