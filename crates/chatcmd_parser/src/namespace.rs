//! The namespace prefix commands must carry.

use std::fmt;

use crate::config::HandlerConfig;

/// The literal text that introduces a command in free-form input.
///
/// Derived from the namespace and the configuration: `namespace + delimiter`
/// when the leading delimiter is included and the namespace is non-empty,
/// otherwise the bare namespace. An empty prefix is global: every
/// whitespace-separated word is a candidate command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespacePrefix(String);

impl NamespacePrefix {
    /// Derives the prefix for `namespace` under `config`.
    #[must_use]
    pub fn new(namespace: &str, config: &HandlerConfig) -> Self {
        if !namespace.is_empty() && config.include_leading_delimiter {
            Self(format!("{namespace}{}", config.delimiter))
        } else {
            Self(namespace.to_string())
        }
    }

    /// Returns the prefix text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if there is no prefix to match.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `candidate` is the start of (or all of) the prefix.
    #[must_use]
    pub fn could_begin(&self, candidate: &str) -> bool {
        self.0.starts_with(candidate)
    }
}

impl fmt::Display for NamespacePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
