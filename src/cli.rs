//! Command-line argument parsing for the GM console.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// A game-master query console for campaign world snapshots.
#[derive(Parser, Debug)]
#[command(name = "gmc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// World snapshot file (JSON). The built-in sample world is used when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub world: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command to run; omit to read commands interactively from stdin
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// Parses CLI arguments from the process environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, falling back to the platform default.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// True when no one-shot command was given and we should read stdin.
    pub fn is_interactive(&self) -> bool {
        self.command.is_empty()
    }
}
