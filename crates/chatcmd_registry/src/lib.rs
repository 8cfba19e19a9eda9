//! Nested action registries for chatcmd.
//!
//! An [`ActionTree`] is what callers build: namespaces nested inside
//! namespaces, with actions, static values, pending results, and lazily
//! evaluated accessors at the leaves. [`flatten`] turns a tree into
//! [`FlatActions`], a single-level map from delimiter-joined path to leaf,
//! which is what command resolution reads.
//!
//! ```text
//! math ─┬─ add        ──►  "math.add"      → Invocable
//!       └─ pi         ──►  "math.pi"       → Static(3.14159)
//! version             ──►  "version"       → Static("1.0")
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod flatten;
pub mod node;

pub use flatten::{FlatActions, FlatEntry, flatten};
pub use node::{Accessor, ActionNode, ActionTree, Invocable, Leaf};
