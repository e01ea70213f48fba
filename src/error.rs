//! Error types for the GM console.
//!
//! Defines the main error enum used throughout the crate. Errors travel as
//! values up through every layer; only the command router's boundary guard
//! deals with anything else.

use thiserror::Error;

/// Main error type for console operations.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Query parse/validation errors (unknown argument key, missing required
    /// argument, malformed filter value, ambiguous token).
    #[error("{0}")]
    Parse(String),

    /// Lookup errors (entity id not found).
    #[error("{0}")]
    Lookup(String),

    /// World snapshot errors (file missing, malformed JSON).
    #[error("World error: {0}")]
    World(String),

    /// Configuration errors (invalid config file, bad field values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal errors (unexpected states, misbehaving adapters).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    /// Creates a parse/validation error with the given message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a lookup error with the given message.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Creates a world error with the given message.
    pub fn world(msg: impl Into<String>) -> Self {
        Self::World(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for logging purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Parse Error",
            Self::Lookup(_) => "Lookup Error",
            Self::World(_) => "World Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// Returns true for errors the user can fix by rewording the command.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Lookup(_))
    }
}

/// Result type alias using ConsoleError.
pub type Result<T> = std::result::Result<T, ConsoleError>;
