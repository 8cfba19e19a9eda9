//! Integration tests for the chatcmd_parser crate.
//!
//! Tests for the command pipeline stages:
//! - Tokenization of chat text
//! - Token splitting into path and arguments
//! - Argument delimiters
//! - Execution against a flattened registry

mod config_tests;
mod tokenizer_tests;
