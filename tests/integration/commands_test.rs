//! End-to-end command tests against the sample world and snapshot files.

use gm_console::commands::run_line;
use gm_console::config::{Config, ConsoleState};
use gm_console::world::World;
use pretty_assertions::assert_eq;
use std::io::Write;

fn fixture() -> (World, Config, ConsoleState) {
    let world = World::sample();
    let config = Config::default();
    let state = ConsoleState::from_config(&config);
    (world, config, state)
}

#[test]
fn test_hero_query_full_response() {
    let (world, config, mut state) = fixture();
    let response = run_line(&world, &config, &mut state, "hero lord sort:age");

    let mut lines = response.lines();
    assert_eq!(
        lines.next(),
        Some("Found 2 hero(s) matching lord, sort:age:")
    );
    // Senna (35) before Aldric (42); dead Edric is excluded.
    assert!(lines.next().unwrap().starts_with("Senna [hero_senna]"));
    assert!(lines.next().unwrap().starts_with("Aldric [hero_aldric]"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_dead_keyword_reaches_dead_heroes() {
    let (world, config, mut state) = fixture();
    let response = run_line(&world, &config, &mut state, "hero dead");
    assert!(response.starts_with("Found 1 hero(s) matching dead:"));
    assert!(response.contains("Edric [hero_edric]"));
}

#[test]
fn test_item_query_with_tier_and_sort() {
    let (world, config, mut state) = fixture();
    let response = run_line(&world, &config, &mut state, "item weapon sort:value:desc");

    let mut lines = response.lines();
    assert_eq!(
        lines.next(),
        Some("Found 4 item(s) matching weapon, sort:value:desc:")
    );
    assert!(lines.next().unwrap().starts_with("Greataxe"));
    assert!(lines.next().unwrap().starts_with("Heavy Crossbow"));
    assert!(lines.next().unwrap().starts_with("War Bow"));
    assert!(lines.next().unwrap().starts_with("Fine Longsword"));
}

#[test]
fn test_settlement_culture_filter() {
    let (world, config, mut state) = fixture();
    let response = run_line(&world, &config, &mut state, "settlement culture:empire");
    assert!(response.starts_with("Found 2 settlement(s) matching culture:empire:"));
    assert!(response.contains("Varnis"));
    assert!(response.contains("Elmfield"));
}

#[test]
fn test_free_text_search_over_sample_world() {
    let (world, config, mut state) = fixture();
    let response = run_line(&world, &config, &mut state, "clan hartwood");
    assert!(response.starts_with("Found 1 clan(s) matching \"hartwood\":"));
    assert!(response.contains("Hartwood [clan_hartwood]"));
}

#[test]
fn test_culture_query_and_lookup() {
    let (world, config, mut state) = fixture();
    let response = run_line(&world, &config, &mut state, "cultures bandit");
    assert!(response.starts_with("Found 1 culture(s) matching bandit:"));

    let response = run_line(&world, &config, &mut state, "culture_info empire");
    assert_eq!(response, "Empire [empire] | main");
}

#[test]
fn test_kingdom_info_not_found_is_lookup_error() {
    let (world, config, mut state) = fixture();
    let response = run_line(&world, &config, &mut state, "kingdom_info kingdom_lost");
    assert_eq!(response, "Error: no kingdom with id 'kingdom_lost'");
    // Lookup errors carry no usage block.
    assert!(!response.contains("Usage:"));
}

#[test]
fn test_parse_errors_surface_with_usage() {
    let (world, config, mut state) = fixture();

    let response = run_line(&world, &config, &mut state, "item tier9");
    assert!(response.starts_with("Error: tier 9 out of range"));
    assert!(response.contains("Usage: item"));

    let response = run_line(&world, &config, &mut state, "hero sort:charisma");
    assert!(response.starts_with("Error: unknown sort field 'charisma' for hero"));
}

#[test]
fn test_queries_do_not_touch_console_state() {
    let (world, config, mut state) = fixture();
    state.created_objects = 5;
    run_line(&world, &config, &mut state, "hero lord");
    run_line(&world, &config, &mut state, "item weapon tier3");
    assert_eq!(state.created_objects, 5);
    assert!(!state.ignore_limits);
}

#[test]
fn test_query_against_loaded_snapshot_file() {
    let (world, config, mut state) = fixture();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&world).unwrap().as_bytes())
        .unwrap();
    let loaded = World::load_from_file(file.path()).unwrap();

    let from_memory = run_line(&world, &config, &mut state, "hero lord sort:age");
    let from_file = run_line(&loaded, &config, &mut state, "hero lord sort:age");
    assert_eq!(from_memory, from_file);
}

#[test]
fn test_snapshot_isolation_from_later_mutation() {
    let (mut world, config, mut state) = fixture();

    let before = run_line(&world, &config, &mut state, "hero lord");
    // Host mutates its live collection after the query returned; the
    // response we already have is unaffected and a new query sees the
    // new state.
    world.heroes.retain(|h| h.id != "hero_senna");
    let after = run_line(&world, &config, &mut state, "hero lord");

    assert!(before.starts_with("Found 2 hero(s)"));
    assert!(after.starts_with("Found 1 hero(s)"));
}
