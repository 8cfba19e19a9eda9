//! Error types for chatcmd.
//!
//! Uses `thiserror` for ergonomic error definition. Two families exist:
//!
//! - [`Error`] covers configuration and shell failures.
//! - [`ActionError`] is what user-supplied actions return. The command
//!   pipeline passes these through to the caller untouched.
//!
//! Unknown command paths and malformed call syntax are not errors at all.

use thiserror::Error;

/// The main error type for chatcmd configuration and shell operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates a usage error (bad command-line arguments and the like).
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument delimiter pattern failed to compile.
    #[error("invalid argument delimiter pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// Why it was rejected.
        message: String,
    },

    /// Reading input failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Bad command-line usage.
    #[error("{0}")]
    Usage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for chatcmd configuration and shell operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised by an action while it runs.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A free-form failure message.
    #[error("{0}")]
    Message(String),

    /// The action was called with the wrong number of arguments.
    #[error("expected {expected} argument(s), got {actual}")]
    Arity {
        /// How many arguments the action takes.
        expected: usize,
        /// How many it received.
        actual: usize,
    },

    /// An argument could not be interpreted.
    #[error("invalid argument {value:?}: {reason}")]
    InvalidArgument {
        /// The raw argument text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Any other error the action wants to surface.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl ActionError {
    /// Creates a free-form action failure.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Checks that exactly `expected` arguments were supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Arity`] if the count differs.
    pub fn check_arity(args: &[String], expected: usize) -> std::result::Result<(), Self> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(Self::Arity {
                expected,
                actual: args.len(),
            })
        }
    }
}
