//! Declarative command metadata.
//!
//! One static table drives dispatch, help text and the usage hints shown on
//! empty results and parse errors.

/// Definition of a console command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Primary command name.
    pub name: &'static str,
    /// Alternative names for the command.
    pub aliases: &'static [&'static str],
    /// Short description shown in help.
    pub description: &'static str,
    /// Detailed usage line.
    pub usage: &'static str,
    /// Category for grouping in help.
    pub category: CommandCategory,
}

/// Category for grouping commands in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    /// Filter/sort queries over a domain.
    Query,
    /// Direct lookup by entity id.
    Lookup,
    /// Everything else.
    General,
}

impl CommandCategory {
    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Query => "Query commands",
            Self::Lookup => "Lookup commands",
            Self::General => "General commands",
        }
    }
}

/// All command definitions.
pub static COMMANDS: &[CommandDef] = &[
    // Query commands
    CommandDef {
        name: "hero",
        aliases: &["heroes"],
        description: "Query heroes by keywords, culture and free text",
        usage: "hero [text...] [lord|wanderer|notable|female|male|clanleader|kingdomruler|dead] [all|any] [culture:<id>] [sort:<field>[:desc]]",
        category: CommandCategory::Query,
    },
    CommandDef {
        name: "clan",
        aliases: &["clans"],
        description: "Query clans by keywords, tier, culture and free text",
        usage: "clan [text...] [minor|noble|mercenary|eliminated|player] [tierN] [all|any] [culture:<id>] [sort:<field>[:desc]]",
        category: CommandCategory::Query,
    },
    CommandDef {
        name: "kingdom",
        aliases: &["kingdoms"],
        description: "Query kingdoms by keywords, culture and free text",
        usage: "kingdom [text...] [eliminated|atwar|player] [all|any] [culture:<id>] [sort:<field>[:desc]]",
        category: CommandCategory::Query,
    },
    CommandDef {
        name: "item",
        aliases: &["items"],
        description: "Query items by keywords, tier, loadout and free text",
        usage: "item [text...] [weapon|armor|mount|food|trade|1h|2h|ranged|bow|crossbow] [tierN] [civilian|battle] [all|any] [sort:<field>[:desc]]",
        category: CommandCategory::Query,
    },
    CommandDef {
        name: "settlement",
        aliases: &["settlements"],
        description: "Query settlements by keywords, culture and free text",
        usage: "settlement [text...] [town|castle|city|village|hideout|player|besieged|raided] [all|any] [culture:<id>] [sort:<field>[:desc]]",
        category: CommandCategory::Query,
    },
    CommandDef {
        name: "culture",
        aliases: &["cultures"],
        description: "Query cultures by keywords and free text",
        usage: "culture [text...] [main|bandit] [all|any] [sort:<field>[:desc]]",
        category: CommandCategory::Query,
    },
    // Lookup commands
    CommandDef {
        name: "hero_info",
        aliases: &[],
        description: "Show one hero by id",
        usage: "hero_info <id>",
        category: CommandCategory::Lookup,
    },
    CommandDef {
        name: "clan_info",
        aliases: &[],
        description: "Show one clan by id",
        usage: "clan_info <id>",
        category: CommandCategory::Lookup,
    },
    CommandDef {
        name: "kingdom_info",
        aliases: &[],
        description: "Show one kingdom by id",
        usage: "kingdom_info <id>",
        category: CommandCategory::Lookup,
    },
    CommandDef {
        name: "item_info",
        aliases: &[],
        description: "Show one item by id",
        usage: "item_info <id>",
        category: CommandCategory::Lookup,
    },
    CommandDef {
        name: "settlement_info",
        aliases: &[],
        description: "Show one settlement by id",
        usage: "settlement_info <id>",
        category: CommandCategory::Lookup,
    },
    CommandDef {
        name: "culture_info",
        aliases: &[],
        description: "Show one culture by id",
        usage: "culture_info <id>",
        category: CommandCategory::Lookup,
    },
    // General commands
    CommandDef {
        name: "limits",
        aliases: &[],
        description: "Show object-creation limit state",
        usage: "limits",
        category: CommandCategory::General,
    },
    CommandDef {
        name: "help",
        aliases: &[],
        description: "Show this help message",
        usage: "help",
        category: CommandCategory::General,
    },
];

/// Generates help text from command definitions.
pub fn generate_help_text() -> String {
    let categories = [
        CommandCategory::Query,
        CommandCategory::Lookup,
        CommandCategory::General,
    ];

    categories
        .iter()
        .filter_map(|category| {
            let cmds: Vec<_> = COMMANDS
                .iter()
                .filter(|c| c.category == *category)
                .collect();

            if cmds.is_empty() {
                return None;
            }

            let command_lines = cmds
                .iter()
                .map(|cmd| {
                    let aliases = if cmd.aliases.is_empty() {
                        String::new()
                    } else {
                        format!(", {}", cmd.aliases.join(", "))
                    };
                    format!("  {}{:<14} - {}\n", cmd.name, aliases, cmd.description)
                })
                .collect::<Vec<_>>()
                .join("");

            Some(format!("{}:\n{}", category.display_name(), command_lines))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Finds a command definition by name or alias, case-insensitively.
pub fn find_command(name: &str) -> Option<&'static CommandDef> {
    let name_lower = name.to_lowercase();
    COMMANDS
        .iter()
        .find(|c| c.name == name_lower || c.aliases.iter().any(|a| *a == name_lower))
}
