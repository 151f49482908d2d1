use engine::sheet::{fizzbuzz, render_sheet, stat_change_table};
use engine::{Ability, Character, Stats, Tables};

fn ana() -> Character {
    let mut c = Character::new("Ana Bray");
    c.race = "Human".into();
    c.class = "Hunter".into();
    c.subclass = "Gunslinger".into();
    c.level = 3;
    for (ability, score) in Ability::ALL.into_iter().zip([14, 7, 10, 11, 18, 3]) {
        c.stats.insert(ability, score);
    }
    c
}

#[test]
fn full_sheet_layout() {
    let tables = Tables::builtin().unwrap();
    insta::assert_snapshot!(render_sheet(&ana(), &tables).trim(), @r"
--- Character Sheet: Ana Bray (Level 3) ---
Race: Human
  Speed: 30ft
  Abilities: Adrenaline Rush, Strength of Humanity
  Bonus: +2 and +1 to two ability scores (you choose)

Class: Hunter → Gunslinger
  Precision shooting and solar light abilities.
  Grenades: Incendiary, Swarm, Thermite

Unlocked Abilities:
  • Golden Gun (Level 1): Flaming pistol of solar death.
  • Knife Trick (Level 3): Fan of burning knives.

Ability Scores:
  STR: 14 (+2)
  DEX: 7 (-2)
  CON: 10 (+0)
  INT: 11 (+0)
  WIS: 18 (+4)
  CHA: 3 (-4)
");
}

#[test]
fn sheet_is_framed_by_blank_lines() {
    let tables = Tables::builtin().unwrap();
    let sheet = render_sheet(&ana(), &tables);
    assert!(sheet.starts_with("\n--- Character Sheet"));
    assert!(sheet.ends_with("CHA: 3 (-4)\n"));
}

#[test]
fn unknown_race_and_subclass_add_nothing() {
    let tables = Tables::builtin().unwrap();
    let mut c = Character::new("Drifter");
    c.race = "Awoken".into();
    c.class = "Gambit".into();
    c.subclass = "Dredgen".into();
    let sheet = render_sheet(&c, &tables);

    assert!(!sheet.contains("Race:"));
    assert!(sheet.contains("Class: Gambit → Dredgen"));
    assert!(!sheet.contains("Unlocked Abilities:"));
    assert!(!sheet.contains("Grenades:"));
    assert!(sheet.contains("  STR: -- (--)"));
}

#[test]
fn krill_traits_render_in_table_order() {
    let tables = Tables::builtin().unwrap();
    let mut c = Character::new("Mara");
    c.race = "Krill".into();
    let sheet = render_sheet(&c, &tables);
    let expected = "Race: Krill\n  Speed: 30ft\n  Vision: Darkvision 60ft\n  \
                    Rest: Wary Hypnogogia (4hr trance)\n  Morph: Starts as Acolyte\n";
    assert!(sheet.contains(expected), "{sheet}");
}

#[test]
fn level_ten_unlocks_everything() {
    let tables = Tables::builtin().unwrap();
    let mut c = ana();
    c.class = "Titan".into();
    c.subclass = "Sentinel".into();
    c.level = 10;
    let sheet = render_sheet(&c, &tables);
    assert!(sheet.contains("  • Ward of Dawn (Level 10): Indestructible void dome."));
    assert_eq!(sheet.matches("  • ").count(), 4);
}

#[test]
fn notes_section_only_when_present() {
    let tables = Tables::builtin().unwrap();
    let mut c = ana();
    assert!(!render_sheet(&c, &tables).contains("Notes:"));
    c.notes.insert("ghost".into(), "Sagira".into());
    assert!(render_sheet(&c, &tables).contains("\nNotes:\n  Ghost: Sagira\n"));
}

#[test]
fn fizzbuzz_pattern() {
    let seq = fizzbuzz(100);
    assert_eq!(seq.len(), 100);
    assert_eq!(seq[0], "1");
    assert_eq!(seq[2], "Fizz");
    assert_eq!(seq[4], "Buzz");
    assert_eq!(seq[14], "FizzBuzz");
    assert_eq!(seq[97], "98");
    assert_eq!(seq[98], "Fizz");
    assert_eq!(seq[99], "Buzz");
    assert_eq!(seq.iter().filter(|s| *s == "FizzBuzz").count(), 6);
}

#[test]
fn counting_easter_egg_is_case_insensitive() {
    let tables = Tables::builtin().unwrap();
    let mut c = Character::new("FizzBuzz");
    let sheet = render_sheet(&c, &tables);
    assert!(sheet.contains("\nThe lord of counting awaits...\n\n1\n2\nFizz\n4\nBuzz\n"));
    assert!(sheet.ends_with("98\nFizz\nBuzz\n"));

    c.name = "Fizz Buzz".into();
    assert!(!render_sheet(&c, &tables).contains("lord of counting"));
}

#[test]
fn stat_change_table_pads_columns() {
    let mut before = Stats::new();
    let mut after = Stats::new();
    for ability in Ability::ALL {
        before.insert(ability, 3);
        after.insert(ability, 1);
    }
    after.remove(&Ability::Cha);
    let table = stat_change_table(&before, &after);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "Stat Changes:");
    assert_eq!(lines[1], "ABILITY | BEFORE | AFTER");
    assert_eq!(lines[2], "------------------------");
    assert_eq!(lines[3], "STR    | 3      | 1");
    assert_eq!(lines[8], "CHA    | 3      | --");
}

#[test]
fn subclass_without_abilities_has_no_unlocked_header() {
    let tables = Tables::from_yaml(
        "{}",
        "Hunter:\n  subclass:\n    Nightstalker:\n      description: \"Void bow.\"\n",
    )
    .unwrap();
    let mut c = Character::new("Crow");
    c.class = "Hunter".into();
    c.subclass = "Nightstalker".into();
    let sheet = render_sheet(&c, &tables);
    assert!(sheet.contains("Class: Hunter → Nightstalker\n  Void bow.\n"));
    assert!(!sheet.contains("Unlocked Abilities:"));
}
