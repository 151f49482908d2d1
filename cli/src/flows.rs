use std::io::{BufRead, Write};
use std::path::Path;
use std::{fs, thread, time::Duration};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use engine::combat::fight;
use engine::edit::{edit_stat, is_affirmative, parse_level, stat_prompt, MenuChoice};
use engine::sheet::{render_sheet, stat_change_table};
use engine::store::{parse_selection, RecordSummary};
use engine::{parse_definitions, roll_stats, Ability, Character, Dice, RecordStore, Stats, Tables};
use tracing::{debug, warn};

use crate::console::Console;

/// Everything a flow needs besides the console.
pub struct Session {
    pub store: RecordStore,
    pub tables: Tables,
    pub dice: Dice,
    /// Delay between ability rolls; zero disables it.
    pub pause: Duration,
}

/// Build, roll, save and show every character defined in `path`.
pub fn run_interpreter<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
    path: &Path,
) -> Result<()> {
    let text = read_text_auto(path)
        .with_context(|| format!("failed to read character file: {}", path.display()))?;
    let defs = parse_definitions(&text);
    debug!(count = defs.len(), "definitions parsed");

    for def in defs {
        let level = match def.level {
            Some(level) => level,
            None => {
                let input = console.prompt("Enter level: ")?.unwrap_or_default();
                match parse_level(&input) {
                    Some(level) => level,
                    None => {
                        warn!(input = %input, "unusable level");
                        console.say(format!("Invalid level \"{}\", defaulting to 1.", input))?;
                        1
                    }
                }
            }
        };

        let mut character = Character::new(def.name);
        character.race = def.race;
        character.class = def.class;
        character.subclass = def.subclass;
        character.level = level;
        character.notes = def.notes;
        if def.roll_stats {
            character.stats = roll_with_pacing(session, console)?;
        }

        let saved = session.store.save(&character)?;
        console.say(format!("Saved to {}", saved.display()))?;
        console.say(render_sheet(&character, &session.tables))?;
    }
    Ok(())
}

/// Pick a saved character and edit it through the numbered menu.
pub fn run_search<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let summaries = session.store.summaries()?;
    if summaries.is_empty() {
        console.say("No saved characters found.")?;
        return Ok(());
    }
    list_characters(console, &summaries)?;

    let input = console.prompt("\nEnter character number: ")?.unwrap_or_default();
    let Some(index) = parse_selection(&input, summaries.len()) else {
        console.say("Invalid selection.")?;
        return Ok(());
    };
    let file = &summaries[index].file;
    let mut character = session.store.load(file)?;

    loop {
        console.say(format!("\n{}", MenuChoice::MENU))?;
        let Some(action) = console.prompt("Choose an option: ")? else {
            console.say("Input closed; leaving without saving.")?;
            break;
        };
        match MenuChoice::parse(&action) {
            Some(MenuChoice::View) => {
                console.say(render_sheet(&character, &session.tables))?;
            }
            Some(MenuChoice::Reroll) => {
                character.stats = roll_with_pacing(session, console)?;
                console.say("Stats rerolled.")?;
            }
            Some(MenuChoice::EditStats) => {
                for ability in Ability::ALL {
                    let input = console
                        .prompt(&stat_prompt(&character, ability))?
                        .unwrap_or_default();
                    edit_stat(&mut character, ability, &input);
                }
                console.say("Stats updated.")?;
            }
            Some(MenuChoice::EditName) => {
                if let Some(name) = console.prompt("Enter new character name: ")? {
                    character.name = name;
                    console.say("Name updated.")?;
                }
            }
            Some(MenuChoice::Exit) => {
                session.store.update(file, &character)?;
                console.say("Changes saved. Exiting.")?;
                break;
            }
            None => console.say("Invalid choice.")?,
        }
    }
    Ok(())
}

/// Pick a saved character and delete it after confirmation.
pub fn run_delete<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let summaries = session.store.summaries()?;
    if summaries.is_empty() {
        console.say("No saved characters found.")?;
        return Ok(());
    }
    list_characters(console, &summaries)?;

    let input = console
        .prompt("\nEnter character number to delete: ")?
        .unwrap_or_default();
    let Some(index) = parse_selection(&input, summaries.len()) else {
        console.say("Invalid selection.")?;
        return Ok(());
    };

    let confirm = console
        .prompt("Are you sure you want to delete this character? (y/n): ")?
        .unwrap_or_default();
    if is_affirmative(&confirm) {
        session.store.delete(&summaries[index].file)?;
        console.say("Character deleted.")?;
    } else {
        console.say("Deletion cancelled.")?;
    }
    Ok(())
}

/// Throw a random saved character into combat.
pub fn run_fight<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    let Some(report) = fight(&session.store, &mut session.dice)? else {
        console.say("No saved characters to fight.")?;
        return Ok(());
    };

    let name = &report.before.name;
    console.say(format!("\nSummoning {}...", name))?;
    console.say(format!("Rolled a {} on a d20!", report.roll))?;
    console.say(report.outcome.message(name))?;

    if let Some(after) = &report.after {
        console.say(format!("\n{}", stat_change_table(&report.before.stats, &after.stats)))?;
        console.say(render_sheet(after, &session.tables))?;
    }
    Ok(())
}

fn list_characters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    summaries: &[RecordSummary],
) -> Result<()> {
    console.say("\nSaved Characters:")?;
    for (i, row) in summaries.iter().enumerate() {
        console.say(format!("  [{}] {} (Level {})", i + 1, row.name, row.level))?;
    }
    Ok(())
}

fn roll_with_pacing<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Stats> {
    let pause = session.pause;
    let mut written = Ok(());
    let stats = roll_stats(&mut session.dice, |roll| {
        if written.is_ok() {
            written = console.say(roll.describe());
        }
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    });
    written?;
    Ok(stats)
}

fn read_text_auto(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}
