//! Flattening nested registries into path-addressable maps.
//!
//! Paths are built by joining ancestor keys with the configured delimiter.
//! Keys are used verbatim: a key that itself contains the delimiter can
//! produce the same path as a nested entry. When that happens the later
//! entry wins but keeps the earlier entry's position.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::node::{Accessor, ActionNode, ActionTree, Leaf};

/// An entry in a flattened registry.
#[derive(Clone, Debug)]
pub enum FlatEntry {
    /// A leaf recorded as-is.
    Leaf(Leaf),
    /// An accessor, evaluated when the entry is read.
    Accessor(Accessor),
}

impl FlatEntry {
    /// Reads the entry, running the accessor if there is one.
    #[must_use]
    pub fn read(&self) -> Leaf {
        match self {
            Self::Leaf(leaf) => leaf.clone(),
            Self::Accessor(accessor) => accessor.read(),
        }
    }
}

/// A single-level map from delimiter-joined path to registry entry.
///
/// Built once per registry and delimiter; never updated afterwards.
#[derive(Clone, Debug, Default)]
pub struct FlatActions {
    entries: IndexMap<String, FlatEntry>,
}

impl FlatActions {
    /// Resolves a path to a leaf. Accessors run now.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<Leaf> {
        self.entries.get(path).map(FlatEntry::read)
    }

    /// Returns the raw entry at a path without running accessors.
    #[must_use]
    pub fn entry(&self, path: &str) -> Option<&FlatEntry> {
        self.entries.get(path)
    }

    /// Returns true if the path is present.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterates over paths in registry traversal order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of addressable paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wraps the map for sharing between handlers and threads.
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Flattens a registry tree, joining nested keys with `delimiter`.
///
/// Never descends into leaves and never runs accessors. Cyclic trees cannot
/// be built from owned [`ActionTree`]s, so recursion always terminates.
#[must_use]
pub fn flatten(tree: &ActionTree, delimiter: &str) -> FlatActions {
    let mut flat = FlatActions::default();
    let mut prefix = String::new();
    visit(tree, delimiter, &mut prefix, &mut flat);
    debug!(paths = flat.len(), delimiter, "flattened action registry");
    flat
}

fn visit(tree: &ActionTree, delimiter: &str, prefix: &mut String, flat: &mut FlatActions) {
    for (key, node) in tree.iter() {
        let mark = prefix.len();
        prefix.push_str(key);
        match node {
            ActionNode::Leaf(leaf) => {
                flat.entries.insert(prefix.clone(), FlatEntry::Leaf(leaf.clone()));
            }
            ActionNode::Accessor(accessor) => {
                flat.entries
                    .insert(prefix.clone(), FlatEntry::Accessor(accessor.clone()));
            }
            ActionNode::Container(child) => {
                prefix.push_str(delimiter);
                visit(child, delimiter, prefix, flat);
            }
        }
        prefix.truncate(mark);
    }
}
