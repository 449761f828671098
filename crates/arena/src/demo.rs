//! Narrated walkthrough of the combat engine.
//!
//! Every section writes plain text to the supplied writer; diagnostics go
//! through `tracing`.

use std::io::Write;

use anyhow::Result;
use combat_content::{ArchetypeCatalog, ArenaRules};
use combat_core::{
    ActionHistory, Archetype, AttackAction, AttackStrategy, Combatant, CombatFault, HealAction,
    Roster, TurnSequence,
};
use strum::IntoEnumIterator;

use crate::config::ArenaConfig;
use crate::duel::{DuelOutcome, run_duel};

const RULE: &str = "============================================================";

/// Default display name for each archetype.
pub fn champion_name(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Warrior => "Conan",
        Archetype::Mage => "Gandalf",
        Archetype::Archer => "Legolas",
        Archetype::Rogue => "Shadow",
    }
}

/// Runs every section in order.
pub fn run(
    out: &mut impl Write,
    catalog: &ArchetypeCatalog,
    rules: &ArenaRules,
    config: &ArenaConfig,
) -> Result<()> {
    roster_section(out, catalog)?;
    strategy_section(out, catalog)?;
    history_section(out, catalog)?;
    turn_section(out, catalog)?;
    duel_section(out, catalog, rules, config)?;
    Ok(())
}

fn heading(out: &mut impl Write, title: &str) -> Result<()> {
    tracing::debug!(section = title, "running demo section");
    writeln!(out, "\n{RULE}\n  {title}\n{RULE}")?;
    Ok(())
}

fn champion(catalog: &ArchetypeCatalog, archetype: Archetype) -> Result<Combatant> {
    Ok(catalog.create(archetype, champion_name(archetype))?)
}

fn roster_section(out: &mut impl Write, catalog: &ArchetypeCatalog) -> Result<()> {
    heading(out, "1. ROSTER: combatants from archetype templates")?;

    for template in catalog.iter() {
        let combatant = catalog.create(template.archetype, champion_name(template.archetype))?;
        writeln!(
            out,
            "  {combatant}  attack={} defense={}",
            combatant.attack_strategy(),
            combatant.defense_strategy()
        )?;
    }
    Ok(())
}

fn strategy_section(out: &mut impl Write, catalog: &ArchetypeCatalog) -> Result<()> {
    heading(out, "2. STRATEGIES: swapping attack and defense")?;

    let mut rogue = champion(catalog, Archetype::Rogue)?;
    for strategy in AttackStrategy::iter() {
        rogue.set_attack_strategy(strategy);
        if strategy.consumes_mana() {
            rogue.set_mana(rogue.stats().max_mana());
        }
        let mut dummy = champion(catalog, Archetype::Archer)?;

        match rogue.attack(&mut dummy) {
            Ok(damage) => writeln!(
                out,
                "  {} with {strategy}: {damage} damage ({} HP left)",
                rogue.name(),
                dummy.stats().health()
            )?,
            Err(err) => writeln!(
                out,
                "  {} with {strategy}: failed [{}] {err}",
                rogue.name(),
                err.error_code()
            )?,
        }
    }

    writeln!(out, "\n  Mitigation of a 100-point hit:")?;
    for template in catalog.iter() {
        let defender = champion(catalog, template.archetype)?;
        writeln!(
            out,
            "  {:<8} {:<12} lets {} through",
            defender.name(),
            defender.defense_strategy().as_ref(),
            defender.defend(100)
        )?;
    }

    let mut warrior = champion(catalog, Archetype::Warrior)?;
    if let Err(err) = warrior.assign_attack_strategy(None) {
        writeln!(out, "\n  Rejected: {err} ({})", err.severity().as_str())?;
    }
    Ok(())
}

fn history_section(out: &mut impl Write, catalog: &ArchetypeCatalog) -> Result<()> {
    heading(out, "3. ACTIONS: history and undo")?;

    let mut roster = Roster::new();
    let conan = roster.insert(champion(catalog, Archetype::Warrior)?);
    let gandalf = roster.insert(champion(catalog, Archetype::Mage)?);
    let legolas = roster.insert(champion(catalog, Archetype::Archer)?);
    let shadow = roster.insert(champion(catalog, Archetype::Rogue)?);

    let mut history = ActionHistory::new();
    history.execute(&mut roster, AttackAction::new(conan, gandalf))?;
    history.execute(&mut roster, AttackAction::new(legolas, shadow))?;
    history.execute(&mut roster, HealAction::new(gandalf, 30))?;
    history.execute(&mut roster, AttackAction::new(gandalf, conan))?;

    for (index, entry) in history.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. [{}] {} -> {}",
            index + 1,
            entry.action().as_snake_case(),
            entry.description(),
            entry.applied().amount()
        )?;
    }
    write_roster(out, &roster)?;

    while let Some(entry) = history.undo_last(&mut roster)? {
        writeln!(out, "  undo: {}", entry.description())?;
    }
    write_roster(out, &roster)?;
    Ok(())
}

fn turn_section(out: &mut impl Write, catalog: &ArchetypeCatalog) -> Result<()> {
    heading(out, "4. TURN SEQUENCES: standard vs power attack")?;

    for sequence in TurnSequence::iter() {
        let mut attacker = champion(catalog, Archetype::Warrior)?;
        let mut defender = champion(catalog, Archetype::Rogue)?;
        let report = sequence.execute_turn(&mut attacker, &mut defender)?;
        writeln!(
            out,
            "  {:<12} damage={} recoil={}  {} / {}",
            sequence.as_ref(),
            report.damage,
            report.recoil,
            attacker,
            defender
        )?;
    }
    Ok(())
}

fn duel_section(
    out: &mut impl Write,
    catalog: &ArchetypeCatalog,
    rules: &ArenaRules,
    config: &ArenaConfig,
) -> Result<()> {
    heading(out, "5. DUEL")?;

    let mut roster = Roster::new();
    let challenger = roster.insert(champion(catalog, config.challenger)?);
    let opponent_name = if config.opponent == config.challenger {
        format!("{} II", champion_name(config.opponent))
    } else {
        champion_name(config.opponent).to_owned()
    };
    let opponent = roster.insert(catalog.create(config.opponent, opponent_name)?);

    let log = run_duel(&mut roster, challenger, opponent, rules)?;
    for record in &log.turns {
        writeln!(
            out,
            "  round {:>2}: {} -> {} ({}) {} damage{}",
            record.round,
            name_of(&roster, record.attacker),
            name_of(&roster, record.defender),
            record.report.sequence,
            record.report.damage,
            if record.report.recoil > 0 {
                format!(", {} recoil", record.report.recoil)
            } else {
                String::new()
            }
        )?;
    }

    match &log.outcome {
        DuelOutcome::Victory { winner, .. } => writeln!(
            out,
            "  {} wins after {} round(s)",
            name_of(&roster, *winner),
            log.rounds
        )?,
        DuelOutcome::Exhausted { combatant, reason } => writeln!(
            out,
            "  {} can no longer fight: {reason}",
            name_of(&roster, *combatant)
        )?,
        DuelOutcome::MutualKnockout => writeln!(
            out,
            "  both fighters fall in round {}",
            log.rounds
        )?,
        DuelOutcome::Draw => writeln!(out, "  draw after {} rounds", log.rounds)?,
    }
    write_roster(out, &roster)?;
    Ok(())
}

fn name_of(roster: &Roster, id: combat_core::CombatantId) -> &str {
    roster.get(id).map_or("?", Combatant::name)
}

fn write_roster(out: &mut impl Write, roster: &Roster) -> Result<()> {
    for (_, combatant) in roster.iter() {
        writeln!(out, "    {combatant}")?;
    }
    Ok(())
}
