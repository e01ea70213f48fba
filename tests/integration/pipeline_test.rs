//! Query pipeline integration tests.
//!
//! Runs the full parse → filter → sort → format pipeline through
//! `run_query` against small purpose-built worlds.

use gm_console::config::MatchMode;
use gm_console::query::domains::{HeroQuery, ItemQuery};
use gm_console::query::run_query;
use gm_console::world::{Hero, Item, ItemClass, Occupation, World};
use pretty_assertions::assert_eq;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

fn hero(name: &str, age: f64, occupation: Occupation, female: bool) -> Hero {
    Hero {
        id: format!("hero_{}", name.to_lowercase()),
        name: name.into(),
        occupation,
        age,
        level: 10,
        gold: 100,
        culture: "empire".into(),
        clan: None,
        female,
        alive: true,
        clan_leader: false,
        kingdom_ruler: false,
    }
}

fn item(id: &str, class: ItemClass, tier: u8) -> Item {
    Item {
        id: id.into(),
        name: id.replace('_', " "),
        class,
        tier,
        value: 100,
        weight: 1.0,
        civilian: false,
    }
}

fn hero_world(heroes: Vec<Hero>) -> World {
    World {
        heroes,
        ..Default::default()
    }
}

fn row_names(rows: &[String]) -> Vec<String> {
    // Rows start with "<name> [<id>] | ...".
    rows.iter()
        .map(|r| r.split(" [").next().unwrap().to_string())
        .collect()
}

#[test]
fn test_and_vs_or_semantics() {
    let world = hero_world(vec![
        hero("H1", 30.0, Occupation::Lord, true),
        hero("H2", 30.0, Occupation::Lord, false),
    ]);

    let all = run_query::<HeroQuery>(&world, &tokens(&["lord", "female"]), MatchMode::All).unwrap();
    assert_eq!(row_names(&all.rows), vec!["H1"]);

    let any =
        run_query::<HeroQuery>(&world, &tokens(&["any", "lord", "female"]), MatchMode::All)
            .unwrap();
    assert_eq!(row_names(&any.rows), vec!["H1", "H2"]);
}

#[test]
fn test_free_text_fallthrough_never_drops_tokens() {
    let world = hero_world(vec![
        hero("Swadborn", 30.0, Occupation::Lord, false),
        hero("Other", 30.0, Occupation::Lord, false),
    ]);

    // "swadborn" is no keyword, no extra filter and no sort spec; it must
    // act as free text rather than disappear.
    let outcome =
        run_query::<HeroQuery>(&world, &tokens(&["swadborn", "lord"]), MatchMode::All).unwrap();
    assert_eq!(row_names(&outcome.rows), vec!["Swadborn"]);
    assert_eq!(outcome.phrase, "\"swadborn\", lord");
}

#[test]
fn test_sort_ties_break_by_name_and_desc_mirrors() {
    let world = hero_world(vec![
        hero("Bob", 30.0, Occupation::Lord, false),
        hero("Alice", 30.0, Occupation::Lord, false),
    ]);

    let asc = run_query::<HeroQuery>(&world, &tokens(&["sort:age"]), MatchMode::All).unwrap();
    assert_eq!(row_names(&asc.rows), vec!["Alice", "Bob"]);

    let desc =
        run_query::<HeroQuery>(&world, &tokens(&["sort:age:desc"]), MatchMode::All).unwrap();
    assert_eq!(row_names(&desc.rows), vec!["Bob", "Alice"]);
}

#[test]
fn test_empty_query_returns_alive_snapshot_in_original_order() {
    let mut dead = hero("Ghost", 50.0, Occupation::Lord, false);
    dead.alive = false;
    let world = hero_world(vec![
        hero("Zed", 40.0, Occupation::Lord, false),
        dead,
        hero("Ana", 20.0, Occupation::Wanderer, true),
    ]);

    let outcome = run_query::<HeroQuery>(&world, &[], MatchMode::All).unwrap();
    assert_eq!(outcome.phrase, "no filter");
    assert_eq!(row_names(&outcome.rows), vec!["Zed", "Ana"]);
}

#[test]
fn test_item_scenario_weapon_tier3() {
    let world = World {
        items: vec![
            item("sword_A", ItemClass::OneHanded, 3),
            item("sword_B", ItemClass::OneHanded, 5),
            item("shield_A", ItemClass::BodyArmor, 3),
        ],
        ..Default::default()
    };

    let outcome =
        run_query::<ItemQuery>(&world, &tokens(&["weapon", "tier3"]), MatchMode::All).unwrap();
    assert_eq!(row_names(&outcome.rows), vec!["sword A"]);

    let outcome = run_query::<ItemQuery>(
        &world,
        &tokens(&["weapon", "sort:tier:desc"]),
        MatchMode::All,
    )
    .unwrap();
    assert_eq!(row_names(&outcome.rows), vec!["sword B", "sword A"]);
}

#[test]
fn test_repeated_sort_last_one_wins_end_to_end() {
    let world = hero_world(vec![
        hero("Poor", 20.0, Occupation::Lord, false),
        hero("Rich", 60.0, Occupation::Lord, false),
    ]);
    let (mut poor, mut rich) = (world.heroes[0].clone(), world.heroes[1].clone());
    poor.gold = 10;
    rich.gold = 9999;
    let world = hero_world(vec![rich, poor]);

    // age would put Poor first; the final sort:gold keeps Rich first.
    let outcome = run_query::<HeroQuery>(
        &world,
        &tokens(&["sort:age", "sort:gold:desc"]),
        MatchMode::All,
    )
    .unwrap();
    assert_eq!(row_names(&outcome.rows), vec!["Rich", "Poor"]);
    assert_eq!(outcome.phrase, "sort:gold:desc");
}

#[test]
fn test_default_match_mode_from_config_is_respected() {
    let world = hero_world(vec![
        hero("H1", 30.0, Occupation::Lord, true),
        hero("H2", 30.0, Occupation::Lord, false),
    ]);

    let outcome =
        run_query::<HeroQuery>(&world, &tokens(&["lord", "female"]), MatchMode::Any).unwrap();
    assert_eq!(row_names(&outcome.rows), vec!["H1", "H2"]);

    // An explicit "all" token overrides the configured default.
    let outcome =
        run_query::<HeroQuery>(&world, &tokens(&["all", "lord", "female"]), MatchMode::Any)
            .unwrap();
    assert_eq!(row_names(&outcome.rows), vec!["H1"]);
}

#[test]
fn test_phrase_canonical_across_token_orders() {
    let world = hero_world(vec![hero("H1", 30.0, Occupation::Lord, true)]);

    let a = run_query::<HeroQuery>(
        &world,
        &tokens(&["female", "lord", "culture:empire", "sort:age"]),
        MatchMode::All,
    )
    .unwrap();
    let b = run_query::<HeroQuery>(
        &world,
        &tokens(&["culture:empire", "sort:age", "lord", "female"]),
        MatchMode::All,
    )
    .unwrap();
    assert_eq!(a.phrase, b.phrase);
    assert_eq!(a.phrase, "female AND lord, culture:empire, sort:age");
}
