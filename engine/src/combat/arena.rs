use tracing::info;

use super::outcome::{apply_roll, Outcome};
use crate::store::{RecordStore, StoreError};
use crate::{Character, Dice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightReport {
    pub roll: u8,
    pub outcome: Outcome,
    /// Snapshot taken before the roll was applied.
    pub before: Character,
    /// The persisted record, or `None` when it was deleted.
    pub after: Option<Character>,
}

/// Pick a stored record at random, roll a d20 and apply the result.
/// Returns `None` when the store is empty.
pub fn fight(store: &RecordStore, dice: &mut Dice) -> Result<Option<FightReport>, StoreError> {
    let files = store.list()?;
    if files.is_empty() {
        return Ok(None);
    }
    let file = &files[dice.pick(files.len())];
    let roll = dice.d20();
    fight_record(store, file, roll).map(Some)
}

/// Apply a known `roll` to the record stored in `file`.
pub fn fight_record(store: &RecordStore, file: &str, roll: u8) -> Result<FightReport, StoreError> {
    let before = store.load(file)?;
    let mut character = before.clone();
    let outcome = apply_roll(&mut character, roll);
    info!(file, roll, ?outcome, character = %before.name, "combat resolved");

    let after = if outcome.deletes_record() {
        store.delete(file)?;
        None
    } else {
        store.update(file, &character)?;
        Some(character)
    };

    Ok(FightReport {
        roll,
        outcome,
        before,
        after,
    })
}
