//! Command extraction and dispatch for chat text.
//!
//! This crate finds namespace-prefixed command invocations inside arbitrary
//! prose (`"sure, TEST.math.add(1, 2) should do it"`) and resolves them
//! against a flattened action registry.
//!
//! # Architecture
//!
//! ```text
//! "abcd TEST.foo efg TEST.add(1, 2)"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["foo", "add(1, 2)"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → path "add", arguments "1, 2"
//! │ SPLITTING       │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXECUTOR        │  → lookup "add" in FlatActions, invoke("1", "2")
//! └─────────────────┘
//!          │
//!          ▼
//!   [None, Some(Ready(3))]
//! ```
//!
//! # Modules
//!
//! - [`config`] - Delimiters and namespace prefix options
//! - [`namespace`] - The derived namespace prefix
//! - [`tokenizer`] - Character-scanning state machine over raw text
//! - [`command`] - Splitting a token into path and argument text
//! - [`executor`] - Path lookup and invocation
//! - [`handler`] - The composed pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod executor;
pub mod handler;
pub mod namespace;
pub mod tokenizer;


// Re-export main types for convenience
pub use command::CommandCall;
pub use config::{ArgumentDelimiter, HandlerConfig};
pub use executor::{CommandExecutor, ExecuteResult};
pub use handler::{CommandHandler, create_command_handler};
pub use namespace::NamespacePrefix;
pub use tokenizer::CommandTokenizer;
