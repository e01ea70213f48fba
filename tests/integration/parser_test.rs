//! Argument parser integration tests.
//!
//! Exercises the declared-argument grammar end to end: positional bucket,
//! named values, aliases, repeated keys and the first-error rule.

use gm_console::query::{ArgSpec, ArgumentParser};
use pretty_assertions::assert_eq;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

fn parser() -> ArgumentParser {
    ArgumentParser::new(vec![
        ArgSpec::optional("sort"),
        ArgSpec {
            name: "culture",
            required: false,
            default: None,
            aliases: &["faction"],
        },
    ])
}

#[test]
fn test_parsing_identical_input_twice_is_structurally_identical() {
    let input = tokens(&[
        "swadian",
        "lord",
        "culture:empire",
        "sort:age",
        "female",
        "sort:gold:desc",
    ]);
    let first = parser().parse(&input);
    let second = parser().parse(&input);
    assert_eq!(first, second);
}

#[test]
fn test_positional_and_named_split() {
    let args = parser().parse(&tokens(&["lord", "culture:empire", "rivermark"]));
    assert_eq!(args.positional(), &["lord", "rivermark"]);
    assert_eq!(args.value("culture"), Some("empire"));
    assert_eq!(args.validation_error(), None);
}

#[test]
fn test_alias_binds_to_canonical_name() {
    let args = parser().parse(&tokens(&["faction:vlandia"]));
    assert_eq!(args.value("culture"), Some("vlandia"));
    assert!(args.values("faction").is_empty());
}

#[test]
fn test_repeated_key_values_in_arrival_order() {
    let args = parser().parse(&tokens(&["sort:age", "lord", "sort:gold"]));
    assert_eq!(args.values("sort"), &["age", "gold"]);
}

#[test]
fn test_unknown_key_is_first_error() {
    let args = parser().parse(&tokens(&["lord", "shape:round", "colour:red"]));
    assert_eq!(args.validation_error(), Some("unknown argument 'shape:'"));
    // Positional tokens before the error are still collected.
    assert_eq!(args.positional(), &["lord"]);
}

#[test]
fn test_missing_optional_returns_none() {
    let args = parser().parse(&tokens(&["lord"]));
    assert_eq!(args.value("sort"), None);
    assert_eq!(args.value_at("sort", 3), None);
    assert_eq!(args.validation_error(), None);
}

#[test]
fn test_required_and_default_mechanics() {
    let parser = ArgumentParser::new(vec![
        ArgSpec {
            name: "id",
            required: true,
            default: None,
            aliases: &[],
        },
        ArgSpec {
            name: "limit",
            required: false,
            default: Some("10"),
            aliases: &[],
        },
    ]);

    let args = parser.parse(&tokens(&["id:hero_1"]));
    assert_eq!(args.validation_error(), None);
    assert_eq!(args.value("id"), Some("hero_1"));
    assert_eq!(args.value("limit"), Some("10"));

    let args = parser.parse(&tokens(&[]));
    assert_eq!(
        args.validation_error(),
        Some("missing required argument 'id'")
    );
}
