//! Console command parsing and dispatch.
//!
//! Keeps command metadata (definitions) separate from execution (router) so
//! command behaviour can be unit tested against a sample world without any
//! host setup.

pub mod definitions;
pub mod router;

pub use definitions::{find_command, generate_help_text, CommandCategory, CommandDef, COMMANDS};
pub use router::run_line;
