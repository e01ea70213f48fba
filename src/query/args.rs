//! Argument tokenizer/parser for query commands.
//!
//! Turns a flat list of input tokens into structured positional and named
//! arguments. A token is a `key:value` pair when it contains a colon and the
//! key matches a declared argument name or alias; a colon token with an
//! undeclared key is a validation error, everything else lands in the
//! positional bucket in arrival order.

use std::collections::BTreeMap;

/// Declaration of one named argument a command accepts.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    /// Canonical argument name.
    pub name: &'static str,
    /// Whether at least one value must be supplied.
    pub required: bool,
    /// Value injected when the argument is absent.
    pub default: Option<&'static str>,
    /// Alternative keys accepted for this argument.
    pub aliases: &'static [&'static str],
}

impl ArgSpec {
    /// An optional argument with no default.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            default: None,
            aliases: &[],
        }
    }
}

/// Parser configured with the declared argument set of one command.
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    specs: Vec<ArgSpec>,
}

impl ArgumentParser {
    /// Creates a parser for the given declarations.
    pub fn new(specs: Vec<ArgSpec>) -> Self {
        Self { specs }
    }

    /// Resolves a supplied key to its canonical declared name.
    fn canonical(&self, key: &str) -> Option<&'static str> {
        let key_lower = key.to_lowercase();
        self.specs
            .iter()
            .find(|s| s.name == key_lower || s.aliases.iter().any(|a| *a == key_lower))
            .map(|s| s.name)
    }

    /// Parses a token sequence into structured arguments.
    ///
    /// Never fails: validation problems are recorded on the result (first
    /// one wins) so the caller decides how to surface them.
    pub fn parse(&self, tokens: &[String]) -> ParsedArgs {
        let mut positional = Vec::new();
        let mut named: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        let mut error = None;

        for token in tokens {
            match token.split_once(':') {
                Some((key, value)) => match self.canonical(key) {
                    // Value keeps any further colons verbatim (sort:age:desc).
                    Some(name) => named.entry(name).or_default().push(value.to_string()),
                    None => {
                        if error.is_none() {
                            error = Some(format!("unknown argument '{key}:'"));
                        }
                    }
                },
                None => positional.push(token.clone()),
            }
        }

        // Required and default handling runs after token errors so the first
        // encountered problem is the one reported.
        for spec in &self.specs {
            if named.contains_key(spec.name) {
                continue;
            }
            if spec.required && error.is_none() {
                error = Some(format!("missing required argument '{}'", spec.name));
            }
            if let Some(default) = spec.default {
                named.insert(spec.name, vec![default.to_string()]);
            }
        }

        ParsedArgs {
            positional,
            named,
            error,
        }
    }
}

/// Structured arguments produced by [`ArgumentParser::parse`].
///
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    positional: Vec<String>,
    named: BTreeMap<&'static str, Vec<String>>,
    error: Option<String>,
}

impl ParsedArgs {
    /// Positional tokens in arrival order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// All values bound to a canonical name, in arrival order.
    pub fn values(&self, name: &str) -> &[String] {
        self.named.get(name).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The `index`-th value bound to a canonical name, if supplied.
    pub fn value_at(&self, name: &str, index: usize) -> Option<&str> {
        self.values(name).get(index).map(String::as_str)
    }

    /// The first value bound to a canonical name, if supplied.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.value_at(name, 0)
    }

    /// The last value bound to a canonical name, if supplied.
    pub fn last_value(&self, name: &str) -> Option<&str> {
        self.values(name).last().map(String::as_str)
    }

    /// First validation problem encountered, if any.
    pub fn validation_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
