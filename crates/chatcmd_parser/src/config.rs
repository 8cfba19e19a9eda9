//! Configuration for command handlers.

use chatcmd_foundation::{Error, Result};
use regex::Regex;

/// How call argument text is split into positional arguments.
#[derive(Clone, Debug, Default)]
pub enum ArgumentDelimiter {
    /// A comma optionally followed by one space, which is consumed.
    ///
    /// `"a, b,c"` and `"a,b,c"` both split into `a`, `b`, `c`; with two
    /// spaces after the comma the second one stays in the argument.
    #[default]
    CommaOptionalSpace,
    /// A literal separator string.
    Literal(String),
    /// A regular expression; every match separates two arguments.
    Pattern(Regex),
}

impl ArgumentDelimiter {
    /// Creates a literal separator.
    #[must_use]
    pub fn literal(separator: impl Into<String>) -> Self {
        Self::Literal(separator.into())
    }

    /// Compiles a regular expression separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| Error::invalid_pattern(pattern, e.to_string()))
    }

    /// Splits argument text into positional arguments.
    ///
    /// Empty text yields a single empty argument. An empty literal separator
    /// leaves the text whole.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        match self {
            Self::CommaOptionalSpace => text
                .split(',')
                .enumerate()
                .map(|(i, piece)| {
                    if i == 0 {
                        piece
                    } else {
                        piece.strip_prefix(' ').unwrap_or(piece)
                    }
                })
                .map(String::from)
                .collect(),
            Self::Literal(separator) if separator.is_empty() => vec![text.to_string()],
            Self::Literal(separator) => text.split(separator.as_str()).map(String::from).collect(),
            Self::Pattern(regex) => regex.split(text).map(String::from).collect(),
        }
    }
}

/// Configuration for a command handler.
///
/// Fixed for the lifetime of a handler; changing it means building a new
/// handler, which re-flattens the registry.
#[derive(Clone, Debug)]
pub struct HandlerConfig {
    /// Joins nested registry keys and terminates the namespace prefix.
    pub delimiter: String,

    /// Splits call argument text into positional arguments.
    pub argument_delimiter: ArgumentDelimiter,

    /// Whether the namespace must be followed by the delimiter before the
    /// command path begins.
    pub include_leading_delimiter: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            delimiter: ".".to_string(),
            argument_delimiter: ArgumentDelimiter::default(),
            include_leading_delimiter: true,
        }
    }
}

impl HandlerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the path delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Builder method to set the argument delimiter.
    #[must_use]
    pub fn with_argument_delimiter(mut self, delimiter: ArgumentDelimiter) -> Self {
        self.argument_delimiter = delimiter;
        self
    }

    /// Builder method to split arguments on a regular expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn with_argument_pattern(self, pattern: &str) -> Result<Self> {
        Ok(self.with_argument_delimiter(ArgumentDelimiter::pattern(pattern)?))
    }

    /// Builder method to require (or not) the delimiter after the namespace.
    #[must_use]
    pub fn with_leading_delimiter(mut self, include: bool) -> Self {
        self.include_leading_delimiter = include;
        self
    }
}
