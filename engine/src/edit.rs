use crate::{Ability, Character};

/// Options of the search menu, numbered 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Reroll,
    EditStats,
    EditName,
    Exit,
}

impl MenuChoice {
    pub const MENU: &'static str =
        "1. View Character\n2. Reroll Stats\n3. Edit Stats\n4. Edit Name\n5. Exit";

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::View),
            "2" => Some(MenuChoice::Reroll),
            "3" => Some(MenuChoice::EditStats),
            "4" => Some(MenuChoice::EditName),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Apply one manual stat edit. Input that is not an integer leaves the
/// current score alone. Returns whether the input was accepted.
pub fn edit_stat(character: &mut Character, ability: Ability, input: &str) -> bool {
    match input.trim().parse::<i32>() {
        Ok(score) => {
            character.stats.insert(ability, score);
            true
        }
        Err(_) => false,
    }
}

/// Prompt shown for each ability during manual editing.
pub fn stat_prompt(character: &Character, ability: Ability) -> String {
    let current = character
        .score(ability)
        .map_or_else(|| "--".to_string(), |s| s.to_string());
    format!("Enter new value for {} (current {}): ", ability, current)
}

/// Yes/no confirmation; only `y` (any case) counts as yes.
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Operator-entered level. Anything that is not a positive integer is `None`.
pub fn parse_level(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&level| level >= 1)
}
