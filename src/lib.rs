//! chatcmd - namespaced chat commands
//!
//! This crate re-exports all layers of the chatcmd system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: chatcmd_runtime     - Interactive shell, demo registry, logging setup
//! Layer 2: chatcmd_parser      - Tokenizer, executor, command handler
//! Layer 1: chatcmd_registry    - Action tree and flattener
//! Layer 0: chatcmd_foundation  - Core types (Value, Outcome, Error)
//! ```

pub use chatcmd_foundation as foundation;
pub use chatcmd_parser as parser;
pub use chatcmd_registry as registry;
pub use chatcmd_runtime as runtime;

pub use chatcmd_parser::{CommandHandler, HandlerConfig, create_command_handler};
pub use chatcmd_registry::ActionTree;
