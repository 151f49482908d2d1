use crate::{Ability, Character};

pub const LEVEL_CAP: u32 = 20;
pub const STAT_SHIFT: i32 = 5;
pub const STAT_FLOOR: i32 = 1;

/// d20 result bands. Every roll maps to exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// 1
    CriticalFailure,
    /// 2..=10
    Loss,
    /// 11..=19
    Gain,
    /// 20
    Ascension,
}

impl Band {
    pub fn for_roll(roll: u8) -> Band {
        match roll {
            0..=1 => Band::CriticalFailure,
            2..=10 => Band::Loss,
            11..=19 => Band::Gain,
            _ => Band::Ascension,
        }
    }
}

/// What a roll did to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The record must be deleted.
    Lost,
    Weakened,
    Strengthened,
    Ascended { level: u32 },
    AtPinnacle,
}

impl Outcome {
    pub fn deletes_record(self) -> bool {
        matches!(self, Outcome::Lost)
    }

    pub fn message(self, name: &str) -> String {
        match self {
            Outcome::Lost => format!("*** CRITICAL FAILURE ***\n{} has been lost to the void.", name),
            Outcome::Weakened => format!(
                "{} suffers great loss... All stats reduced by {}.",
                name, STAT_SHIFT
            ),
            Outcome::Strengthened => format!(
                "{} emerges stronger! All stats increased by {}.",
                name, STAT_SHIFT
            ),
            Outcome::Ascended { level } => {
                format!("{} ascends! Level increased to {}.", name, level)
            }
            Outcome::AtPinnacle => format!(
                "{} is already at the pinnacle (level {}).",
                name, LEVEL_CAP
            ),
        }
    }
}

/// Mutate `character` according to `roll`. A `Lost` outcome leaves the
/// character untouched; removing the record is the caller's job.
pub fn apply_roll(character: &mut Character, roll: u8) -> Outcome {
    match Band::for_roll(roll) {
        Band::CriticalFailure => Outcome::Lost,
        Band::Loss => {
            for ability in Ability::ALL {
                if let Some(score) = character.stats.get_mut(&ability) {
                    *score = score.saturating_sub(STAT_SHIFT).max(STAT_FLOOR);
                }
            }
            Outcome::Weakened
        }
        Band::Gain => {
            for ability in Ability::ALL {
                if let Some(score) = character.stats.get_mut(&ability) {
                    *score = score.saturating_add(STAT_SHIFT);
                }
            }
            Outcome::Strengthened
        }
        Band::Ascension => {
            if character.level < LEVEL_CAP {
                character.level += 1;
                Outcome::Ascended { level: character.level }
            } else {
                Outcome::AtPinnacle
            }
        }
    }
}
