//! Command dispatch and response formatting.
//!
//! Parses one input line, routes it to the query engine or a lookup, and
//! renders the plain-text response. This is also the crate's fault boundary:
//! inside the engine errors travel as values, and anything that still panics
//! (a misbehaving adapter) is caught here, logged in full, and turned into a
//! generic failure message.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

use crate::commands::definitions::{find_command, generate_help_text, CommandDef};
use crate::config::{Config, ConsoleState};
use crate::error::ConsoleError;
use crate::query::domains::{
    ClanQuery, CultureQuery, HeroQuery, ItemQuery, KingdomQuery, SettlementQuery,
};
use crate::query::{lookup, run_query, Domain};
use crate::world::World;

/// Runs one console input line and returns the response text.
pub fn run_line(world: &World, config: &Config, state: &mut ConsoleState, input: &str) -> String {
    let tokens: Vec<String> = input.split_whitespace().map(String::from).collect();
    let Some((name, rest)) = tokens.split_first() else {
        return "Error: empty command. Try 'help'.".to_string();
    };

    let Some(def) = find_command(name) else {
        return format!("Error: unknown command '{name}'. Try 'help'.");
    };

    debug!(command = def.name, args = rest.len(), "dispatching command");

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        dispatch(world, config, state, def, rest)
    }));

    match outcome {
        Ok(response) => response,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            error!(command = def.name, detail, "command handler panicked");
            format!("Error: internal error while running '{}'", def.name)
        }
    }
}

fn dispatch(
    world: &World,
    config: &Config,
    state: &mut ConsoleState,
    def: &'static CommandDef,
    tokens: &[String],
) -> String {
    match def.name {
        "hero" => query_response::<HeroQuery>(world, config, def, tokens),
        "clan" => query_response::<ClanQuery>(world, config, def, tokens),
        "kingdom" => query_response::<KingdomQuery>(world, config, def, tokens),
        "item" => query_response::<ItemQuery>(world, config, def, tokens),
        "settlement" => query_response::<SettlementQuery>(world, config, def, tokens),
        "culture" => query_response::<CultureQuery>(world, config, def, tokens),
        "hero_info" => info_response::<HeroQuery>(world, def, tokens),
        "clan_info" => info_response::<ClanQuery>(world, def, tokens),
        "kingdom_info" => info_response::<KingdomQuery>(world, def, tokens),
        "item_info" => info_response::<ItemQuery>(world, def, tokens),
        "settlement_info" => info_response::<SettlementQuery>(world, def, tokens),
        "culture_info" => info_response::<CultureQuery>(world, def, tokens),
        "limits" => limits_response(config, state),
        "help" => generate_help_text(),
        other => {
            error!(command = other, "command in table but not in dispatch");
            format!("Error: internal error while running '{other}'")
        }
    }
}

/// Renders a full query response: header, rows, usage hint on zero results.
fn query_response<D: Domain>(
    world: &World,
    config: &Config,
    def: &'static CommandDef,
    tokens: &[String],
) -> String {
    match run_query::<D>(world, tokens, config.console.default_match) {
        Ok(outcome) => {
            let header = format!(
                "Found {} {}(s) matching {}:",
                outcome.count(),
                D::NAME,
                outcome.phrase
            );
            if outcome.rows.is_empty() {
                if config.console.usage_on_empty {
                    format!("{header}\n{}", usage_block(def))
                } else {
                    header
                }
            } else {
                format!("{header}\n{}", outcome.rows.join("\n"))
            }
        }
        Err(e) => error_response(def, &e),
    }
}

/// Renders a lookup-by-id response.
fn info_response<D: Domain>(world: &World, def: &'static CommandDef, tokens: &[String]) -> String {
    let row = match tokens {
        [id] => lookup::<D>(world, id),
        [] => Err(ConsoleError::parse("missing required argument 'id'".to_string())),
        _ => Err(ConsoleError::parse("expected a single id".to_string())),
    };
    match row {
        Ok(row) => row,
        Err(e) => error_response(def, &e),
    }
}

fn limits_response(config: &Config, state: &ConsoleState) -> String {
    let ignore = if state.ignore_limits { "on" } else { "off" };
    format!(
        "Object creation: {}/{} this session | ignore limits: {}",
        state.created_objects, config.limits.max_created_objects, ignore
    )
}

fn usage_block(def: &CommandDef) -> String {
    format!("Usage: {}", def.usage)
}

/// Parse errors carry the usage line; lookup and internal errors do not.
fn error_response(def: &CommandDef, e: &ConsoleError) -> String {
    match e {
        ConsoleError::Parse(_) => format!("Error: {e}\n{}", usage_block(def)),
        _ => format!("Error: {e}"),
    }
}
