use crate::content::Tables;
use crate::{ability_mod, format_modifier, Ability, Character, Stats};

/// A character with this name (any case) gets the counting easter egg.
pub const COUNTING_NAME: &str = "fizzbuzz";

/// Render the full character sheet. The result ends with an empty line.
pub fn render_sheet(character: &Character, tables: &Tables) -> String {
    let mut out = vec![
        String::new(),
        format!(
            "--- Character Sheet: {} (Level {}) ---",
            character.name, character.level
        ),
    ];

    if let Some(traits) = tables.race(&character.race) {
        out.push(format!("Race: {}", character.race));
        for (field, value) in traits {
            out.push(format!("  {}: {}", capitalize(field), value.display()));
        }
    }

    let subclass = tables.subclass(&character.class, &character.subclass);
    out.push(String::new());
    out.push(format!("Class: {} → {}", character.class, character.subclass));
    if let Some(sub) = subclass {
        if let Some(desc) = &sub.description {
            out.push(format!("  {}", desc));
        }
        if !sub.grenades.is_empty() {
            out.push(format!("  Grenades: {}", sub.grenades.join(", ")));
        }
        if !sub.abilities.is_empty() {
            out.push(String::new());
            out.push("Unlocked Abilities:".to_string());
            for ability in sub.unlocked(character.level) {
                out.push(format!(
                    "  • {} (Level {}): {}",
                    ability.name, ability.level, ability.desc
                ));
            }
        }
    }

    if !character.notes.is_empty() {
        out.push(String::new());
        out.push("Notes:".to_string());
        for (key, value) in &character.notes {
            out.push(format!("  {}: {}", capitalize(key), value));
        }
    }

    out.push(String::new());
    out.push("Ability Scores:".to_string());
    for ability in Ability::ALL {
        out.push(format!("  {}: {}", ability, score_with_mod(character.score(ability))));
    }

    if character.name.to_lowercase() == COUNTING_NAME {
        out.push(String::new());
        out.push("The lord of counting awaits...".to_string());
        out.push(String::new());
        out.extend(fizzbuzz(100));
    }

    out.push(String::new());
    out.join("\n")
}

/// `14 (+2)`, or `-- (--)` when the score was never rolled.
pub fn score_with_mod(score: Option<i32>) -> String {
    match score {
        Some(score) => format!("{} ({})", score, format_modifier(ability_mod(score))),
        None => "-- (--)".to_string(),
    }
}

/// 1..=n with multiples of 3 as `Fizz`, of 5 as `Buzz`, of 15 as `FizzBuzz`.
pub fn fizzbuzz(n: u32) -> Vec<String> {
    (1..=n)
        .map(|i| match (i % 3, i % 5) {
            (0, 0) => "FizzBuzz".to_string(),
            (0, _) => "Fizz".to_string(),
            (_, 0) => "Buzz".to_string(),
            _ => i.to_string(),
        })
        .collect()
}

/// Before/after table printed after a combat mutation.
pub fn stat_change_table(before: &Stats, after: &Stats) -> String {
    let cell = |stats: &Stats, ability: Ability| {
        stats
            .get(&ability)
            .map_or_else(|| "--".to_string(), |s| s.to_string())
    };
    let mut out = vec![
        "Stat Changes:".to_string(),
        "ABILITY | BEFORE | AFTER".to_string(),
        "------------------------".to_string(),
    ];
    for ability in Ability::ALL {
        out.push(format!(
            "{:<6} | {:<6} | {}",
            ability.code(),
            cell(before, ability),
            cell(after, ability)
        ));
    }
    out.join("\n")
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
