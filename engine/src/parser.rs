//! Character-definition files.
//!
//! Two dialects are accepted. The flat dialect is a list of `key: value`
//! lines where only `name`, `race`, `class` and `subclass` mean anything. The
//! block dialect wraps each character in `character { ... }`, captures every
//! `key: value` line inside the braces, and may carry a bare `roll_stats`
//! marker. A file containing at least one opening marker is read as blocks.

use indexmap::IndexMap;
use tracing::{debug, warn};

/// A character as described by the definition file, before level entry and
/// stat rolling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterDef {
    pub name: String,
    pub race: String,
    pub class: String,
    pub subclass: String,
    pub level: Option<u32>,
    pub roll_stats: bool,
    /// Block fields that are not one of the known keys, in file order.
    pub notes: IndexMap<String, String>,
}

/// Parse every definition in `text`. Never fails; unknown lines are skipped.
pub fn parse_definitions(text: &str) -> Vec<CharacterDef> {
    if text.lines().any(is_block_open) {
        parse_blocks(text)
    } else {
        vec![parse_flat(text)]
    }
}

fn parse_flat(text: &str) -> CharacterDef {
    let mut def = CharacterDef {
        roll_stats: true,
        ..CharacterDef::default()
    };
    for line in text.lines() {
        let Some((key, value)) = split_field(line) else {
            continue;
        };
        match key.to_ascii_lowercase().as_str() {
            "name" => def.name = value,
            "race" => def.race = value,
            "class" => def.class = value,
            "subclass" => def.subclass = value,
            _ => {}
        }
    }
    def
}

fn parse_blocks(text: &str) -> Vec<CharacterDef> {
    let mut out = Vec::new();
    let mut current: Option<Block> = None;

    for (idx, line) in text.lines().enumerate() {
        if current.is_some() && line.trim() == "}" {
            if let Some(done) = current.take() {
                let def = done.finish();
                debug!(character = %def.name, roll_stats = def.roll_stats, "definition block closed");
                out.push(def);
            }
            continue;
        }
        match current.as_mut() {
            None => {
                if is_block_open(line) {
                    current = Some(Block::default());
                }
            }
            Some(block) => {
                if is_roll_marker(line) {
                    block.roll_stats = true;
                } else if let Some((key, value)) = split_field(line) {
                    block.fields.insert(key, value);
                } else if is_block_open(line) {
                    debug!(line = idx + 1, "nested character marker ignored");
                }
            }
        }
    }

    if let Some(open) = current {
        warn!(fields = open.fields.len(), "unclosed character block dropped");
    }
    out
}

#[derive(Default)]
struct Block {
    fields: IndexMap<String, String>,
    roll_stats: bool,
}

impl Block {
    fn finish(self) -> CharacterDef {
        let mut def = CharacterDef {
            roll_stats: self.roll_stats,
            ..CharacterDef::default()
        };
        for (key, value) in self.fields {
            match key.to_ascii_lowercase().as_str() {
                "name" => def.name = value,
                "race" => def.race = value,
                "class" => def.class = value,
                "subclass" => def.subclass = value,
                "level" => match value.parse::<u32>() {
                    Ok(level) if level >= 1 => def.level = Some(level),
                    _ => {
                        def.notes.insert(key, value);
                    }
                },
                _ => {
                    def.notes.insert(key, value);
                }
            }
        }
        def
    }
}

/// `character {` with any spacing before the brace.
fn is_block_open(line: &str) -> bool {
    line.trim()
        .strip_suffix('{')
        .is_some_and(|head| head.trim().eq_ignore_ascii_case("character"))
}

fn is_roll_marker(line: &str) -> bool {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("()").unwrap_or(trimmed);
    let normalized: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect();
    normalized == "rollstats"
}

/// Split at the first `:`. Both sides are trimmed and surrounding quotes are
/// stripped from the value. Keys may contain spaces; empty keys are rejected.
fn split_field(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), strip_quotes(value.trim()).to_string()))
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_stripped_from_both_ends() {
        assert_eq!(strip_quotes("\"Ana Sov\""), "Ana Sov");
        assert_eq!(strip_quotes("''Cayde''"), "Cayde");
        assert_eq!(strip_quotes("Line 'Em Up"), "Line 'Em Up");
    }

    #[test]
    fn roll_marker_spellings() {
        for marker in ["roll_stats", "roll stats", "rollStats()", "  ROLL-STATS; "] {
            assert!(is_roll_marker(marker), "{marker}");
        }
        assert!(!is_roll_marker("roll: stats"));
        assert!(!is_roll_marker("roll"));
    }

    #[test]
    fn open_marker_tolerates_spacing() {
        assert!(is_block_open("character {"));
        assert!(is_block_open("  Character{"));
        assert!(!is_block_open("character"));
        assert!(!is_block_open("name: character {"));
    }
}
