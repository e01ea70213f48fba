//! Configuration management for the GM console.
//!
//! Handles loading console options from a TOML file, plus the explicitly
//! passed `ConsoleState` that carries the object-creation limit counters.
//! Queries only ever read that state; creation commands (out of scope here)
//! are the only writers.

use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Flag-match mode: require every requested keyword, or any of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// All requested flag keywords must hold (AND semantics).
    #[default]
    All,
    /// At least one requested flag keyword must hold (OR semantics).
    Any,
}

impl MatchMode {
    /// Parses a match mode from a bare token.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" | "and" => Some(Self::All),
            "any" | "or" => Some(Self::Any),
            _ => None,
        }
    }
}

/// Main configuration structure for the console.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Console behaviour options.
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Object-creation limit settings (read by the `limits` command).
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Console behaviour options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Flag-match mode used when a query names neither `all` nor `any`.
    #[serde(default)]
    pub default_match: MatchMode,

    /// Whether zero-result responses include the command usage block.
    #[serde(default = "default_usage_on_empty")]
    pub usage_on_empty: bool,
}

fn default_usage_on_empty() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_match: MatchMode::default(),
            usage_on_empty: default_usage_on_empty(),
        }
    }
}

/// Object-creation limit settings.
///
/// The query engine never enforces these; they exist so the limit state can
/// be passed explicitly instead of living in ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of objects creation commands may add per session.
    #[serde(default = "default_max_created")]
    pub max_created_objects: u32,

    /// When true, creation commands skip the cap entirely.
    #[serde(default)]
    pub ignore_limits: bool,
}

fn default_max_created() -> u32 {
    100
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_created_objects: default_max_created(),
            ignore_limits: false,
        }
    }
}

/// Per-session mutable console state, passed explicitly to the command
/// router. Queries treat it as read-only.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    /// Objects created so far this session.
    pub created_objects: u32,
    /// Session override of `LimitsConfig::ignore_limits`.
    pub ignore_limits: bool,
}

impl ConsoleState {
    /// Builds the initial session state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            created_objects: 0,
            ignore_limits: config.limits.ignore_limits,
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gm-console")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ConsoleError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
