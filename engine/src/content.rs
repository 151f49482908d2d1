use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_RACES: &str = include_str!("../content/races.yaml");
const BUILTIN_CLASSES: &str = include_str!("../content/classes.yaml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {table} table: {source}")]
    Yaml {
        table: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A race trait is either a single line of text or a list shown comma-joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraitValue {
    Text(String),
    List(Vec<String>),
}

impl TraitValue {
    pub fn display(&self) -> String {
        match self {
            TraitValue::Text(text) => text.clone(),
            TraitValue::List(items) => items.join(", "),
        }
    }
}

/// Race name → trait field → value, in declared order.
pub type RaceTables = IndexMap<String, IndexMap<String, TraitValue>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassAbility {
    pub level: u32,
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Subclass {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub grenades: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<SubclassAbility>,
}

impl Subclass {
    /// Abilities available at `level`, in table order.
    pub fn unlocked(&self, level: u32) -> impl Iterator<Item = &SubclassAbility> {
        self.abilities.iter().filter(move |a| a.level <= level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassEntry {
    #[serde(default)]
    pub subclass: IndexMap<String, Subclass>,
}

pub type ClassTables = IndexMap<String, ClassEntry>;

/// Static reference data joined against a record at display time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tables {
    pub races: RaceTables,
    pub classes: ClassTables,
}

impl Tables {
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_yaml(BUILTIN_RACES, BUILTIN_CLASSES)
    }

    pub fn from_yaml(races: &str, classes: &str) -> Result<Self, ContentError> {
        let races = serde_yaml::from_str(races)
            .map_err(|source| ContentError::Yaml { table: "race", source })?;
        let classes = serde_yaml::from_str(classes)
            .map_err(|source| ContentError::Yaml { table: "class", source })?;
        Ok(Self { races, classes })
    }

    pub fn race(&self, name: &str) -> Option<&IndexMap<String, TraitValue>> {
        self.races.get(name)
    }

    pub fn subclass(&self, class: &str, subclass: &str) -> Option<&Subclass> {
        self.classes.get(class)?.subclass.get(subclass)
    }
}
