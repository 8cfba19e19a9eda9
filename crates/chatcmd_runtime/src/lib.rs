//! Interactive shell and batch runner for chatcmd.
//!
//! This crate provides:
//! - [`Shell`] - Reads chat lines and reports the commands found in them
//! - [`LineEditor`] - Line source abstraction (rustyline or any reader)
//! - [`demo_registry`] - A small registry to try the pipeline against
//! - [`init_logging`] - `tracing` subscriber setup for binaries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod logging;
pub mod shell;

pub use demo::demo_registry;
pub use editor::{LineEditor, ReadResult, ReaderEditor, RustylineEditor};
pub use logging::init_logging;
pub use shell::Shell;
