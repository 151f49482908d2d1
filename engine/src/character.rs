use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Ability;

/// Ability scores keyed by code; iteration follows `Ability::ALL`.
pub type Stats = BTreeMap<Ability, i32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub subclass: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub stats: Stats,
    /// Extra `key: value` lines from a block definition.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub notes: IndexMap<String, String>,
}

fn default_level() -> u32 {
    1
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            race: String::new(),
            class: String::new(),
            subclass: String::new(),
            level: 1,
            stats: Stats::new(),
            notes: IndexMap::new(),
        }
    }

    pub fn score(&self, ability: Ability) -> Option<i32> {
        self.stats.get(&ability).copied()
    }

    pub fn has_full_stats(&self) -> bool {
        Ability::ALL.iter().all(|a| self.stats.contains_key(a))
    }
}
