use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub mod character;
pub mod combat;
pub mod content;
pub mod edit;
pub mod parser;
pub mod sheet;
pub mod stats;
pub mod store;

pub use character::{Character, Stats};
pub use content::{ClassTables, ContentError, RaceTables, Tables};
pub use parser::{parse_definitions, CharacterDef};
pub use stats::{roll_ability, roll_stats, AbilityRoll};
pub use store::{RecordStore, StoreError};

enum Source {
    Seeded(ChaCha8Rng),
    Scripted(VecDeque<u8>),
}

/// Every random draw in the crate goes through `Dice`.
pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)) }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Replays `values` in order. Die results are clamped into `1..=sides`;
    /// for `pick` a value is read as a 1-based position. Once exhausted every
    /// draw yields 1.
    pub fn from_scripted(values: Vec<u8>) -> Self {
        Self { source: Source::Scripted(values.into()) }
    }

    pub fn roll(&mut self, sides: u8) -> u8 {
        let sides = sides.max(1);
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(1..=sides),
            Source::Scripted(queue) => queue.pop_front().unwrap_or(1).clamp(1, sides),
        }
    }

    pub fn d6(&mut self) -> u8 {
        self.roll(6)
    }

    pub fn d20(&mut self) -> u8 {
        self.roll(20)
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    pub fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick from an empty collection");
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(0..len.max(1)),
            Source::Scripted(queue) => {
                let pos = queue.pop_front().unwrap_or(1).max(1) as usize;
                (pos - 1) % len.max(1)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    #[serde(rename = "STR")]
    Str,
    #[serde(rename = "DEX")]
    Dex,
    #[serde(rename = "CON")]
    Con,
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "WIS")]
    Wis,
    #[serde(rename = "CHA")]
    Cha,
}

impl Ability {
    /// Roll and display order.
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Ability::Str => "STR",
            Ability::Dex => "DEX",
            Ability::Con => "CON",
            Ability::Int => "INT",
            Ability::Wis => "WIS",
            Ability::Cha => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Ability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ability::ALL
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown ability code '{}'", s))
    }
}

/// D&D ability modifier = floor((score - 10) / 2) for integer scores.
pub fn ability_mod(score: i32) -> i32 {
    // `div_euclid` with positive divisor matches mathematical floor division.
    (score - 10).div_euclid(2)
}

/// Signed modifier text: `+0`, `+2`, `-1`.
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        format!("-{}", modifier.abs())
    }
}
