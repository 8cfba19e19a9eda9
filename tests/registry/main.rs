//! Integration tests for the chatcmd_registry crate.
//!
//! Tests for building nested registries and flattening them:
//! - Tree construction
//! - Path joining and ordering
//! - Lazy accessors
