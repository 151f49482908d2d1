use engine::content::TraitValue;
use engine::Tables;

#[test]
fn builtin_tables_parse() {
    let tables = Tables::builtin().unwrap();
    assert_eq!(
        tables.races.keys().collect::<Vec<_>>(),
        vec!["Human", "Krill"]
    );
    assert_eq!(
        tables.classes.keys().collect::<Vec<_>>(),
        vec!["Hunter", "Warlock", "Titan"]
    );
}

#[test]
fn race_traits_keep_declared_order() {
    let tables = Tables::builtin().unwrap();
    let krill = tables.race("Krill").unwrap();
    assert_eq!(
        krill.keys().collect::<Vec<_>>(),
        vec!["speed", "vision", "rest", "morph"]
    );
    let human = tables.race("Human").unwrap();
    assert_eq!(
        human["abilities"],
        TraitValue::List(vec!["Adrenaline Rush".into(), "Strength of Humanity".into()])
    );
    assert_eq!(human["abilities"].display(), "Adrenaline Rush, Strength of Humanity");
}

#[test]
fn unknown_lookups_are_absent() {
    let tables = Tables::builtin().unwrap();
    assert!(tables.race("Awoken").is_none());
    assert!(tables.subclass("Hunter", "Nightstalker").is_none());
    assert!(tables.subclass("Gunslinger", "Gunslinger").is_none());
}

#[test]
fn unlocked_abilities_are_level_gated() {
    let tables = Tables::builtin().unwrap();
    let dawnblade = tables.subclass("Warlock", "Dawnblade").unwrap();
    let names = |level| {
        dawnblade
            .unlocked(level)
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(1), vec!["Daybreak"]);
    assert_eq!(names(6), vec!["Daybreak", "Igniting Touch", "Icarus Dash"]);
    assert_eq!(names(20).len(), 4);
}

#[test]
fn custom_tables_report_yaml_errors() {
    let err = Tables::from_yaml("Human: [unterminated", "{}").unwrap_err();
    assert!(err.to_string().contains("race table"));
}
