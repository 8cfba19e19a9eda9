//! Core values, pending results, and error types for chatcmd.
//!
//! This crate provides:
//! - [`Value`] - Static registry values and action return values
//! - [`Outcome`] / [`PendingResult`] - The result of resolving a single command
//! - [`ActionError`] - Errors raised by user-supplied actions
//! - [`Error`] - Configuration and shell errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod outcome;
pub mod value;

pub use error::{ActionError, Error, ErrorKind, Result};
pub use outcome::{Outcome, PendingResult};
pub use value::Value;
