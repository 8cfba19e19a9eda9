//! Registry nodes.
//!
//! A registry is a tree. Interior nodes are [`ActionTree`]s (pure namespace
//! containers); everything else is a leaf. The distinction is made by
//! variant, never by inspecting a value's shape, so an invocable or a
//! pending result is never mistaken for a namespace.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use chatcmd_foundation::{ActionError, Outcome, PendingResult, Value};
use indexmap::IndexMap;

/// What an invoked action hands back.
pub type ActionResult = Result<Outcome, ActionError>;

type ActionFn = dyn Fn(&[String]) -> ActionResult + Send + Sync;
type AccessorFn = dyn Fn() -> Leaf + Send + Sync;

/// A callable action taking positional string arguments.
#[derive(Clone)]
pub struct Invocable(Arc<ActionFn>);

impl Invocable {
    /// Wraps a function as an invocable action.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[String]) -> ActionResult + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    /// Calls the action. Errors are the action's own and are returned as-is.
    ///
    /// # Errors
    ///
    /// Whatever the action itself reports.
    pub fn invoke(&self, args: &[String]) -> ActionResult {
        (self.0)(args)
    }
}

impl fmt::Debug for Invocable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<action>")
    }
}

/// A lazily computed property.
///
/// The function runs each time the property is read, never when the
/// registry is built or flattened.
#[derive(Clone)]
pub struct Accessor(Arc<AccessorFn>);

impl Accessor {
    /// Wraps a zero-argument function as an accessor.
    pub fn new<F, L>(func: F) -> Self
    where
        F: Fn() -> L + Send + Sync + 'static,
        L: Into<Leaf>,
    {
        Self(Arc::new(move || func().into()))
    }

    /// Computes the current value of the property.
    #[must_use]
    pub fn read(&self) -> Leaf {
        (self.0)()
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<accessor>")
    }
}

/// A terminal registry entry as seen by command resolution.
#[derive(Clone, Debug)]
pub enum Leaf {
    /// A callable action.
    Invocable(Invocable),
    /// An asynchronous result, handed back unsettled.
    Pending(PendingResult),
    /// A static value; never receives arguments.
    Static(Value),
}

impl Leaf {
    /// Returns true if this leaf can be called.
    #[must_use]
    pub const fn is_invocable(&self) -> bool {
        matches!(self, Self::Invocable(_))
    }
}

impl From<Invocable> for Leaf {
    fn from(action: Invocable) -> Self {
        Self::Invocable(action)
    }
}

impl From<PendingResult> for Leaf {
    fn from(pending: PendingResult) -> Self {
        Self::Pending(pending)
    }
}

impl From<Value> for Leaf {
    fn from(value: Value) -> Self {
        Self::Static(value)
    }
}

/// A node in an action registry.
#[derive(Clone, Debug)]
pub enum ActionNode {
    /// A terminal entry.
    Leaf(Leaf),
    /// A lazily computed entry.
    Accessor(Accessor),
    /// A nested namespace.
    Container(ActionTree),
}

impl From<Leaf> for ActionNode {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Invocable> for ActionNode {
    fn from(action: Invocable) -> Self {
        Self::Leaf(Leaf::Invocable(action))
    }
}

impl From<PendingResult> for ActionNode {
    fn from(pending: PendingResult) -> Self {
        Self::Leaf(Leaf::Pending(pending))
    }
}

impl From<Value> for ActionNode {
    fn from(value: Value) -> Self {
        Self::Leaf(Leaf::Static(value))
    }
}

impl From<Accessor> for ActionNode {
    fn from(accessor: Accessor) -> Self {
        Self::Accessor(accessor)
    }
}

impl From<ActionTree> for ActionNode {
    fn from(tree: ActionTree) -> Self {
        Self::Container(tree)
    }
}

/// A namespace of actions, values, and nested namespaces.
///
/// Keys keep their insertion order. Re-inserting a key replaces the node
/// but keeps its original position.
#[derive(Clone, Debug, Default)]
pub struct ActionTree {
    nodes: IndexMap<String, ActionNode>,
}

impl ActionTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node under `key`, returning the node it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        node: impl Into<ActionNode>,
    ) -> Option<ActionNode> {
        self.nodes.insert(key.into(), node.into())
    }

    /// Adds a synchronous action.
    #[must_use]
    pub fn action<F, V>(mut self, key: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[String]) -> Result<V, ActionError> + Send + Sync + 'static,
        V: Into<Value>,
    {
        let action = Invocable::new(move |args| func(args).map(|v| Outcome::Ready(v.into())));
        self.insert(key, action);
        self
    }

    /// Adds an action whose result arrives asynchronously.
    ///
    /// Each call starts a new future and returns it unsettled.
    #[must_use]
    pub fn async_action<F, Fut>(mut self, key: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[String]) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Value> + Send + 'static,
    {
        let action =
            Invocable::new(move |args| Ok(Outcome::Pending(PendingResult::new(func(args)))));
        self.insert(key, action);
        self
    }

    /// Adds a static value.
    #[must_use]
    pub fn value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let value: Value = value.into();
        self.insert(key, value);
        self
    }

    /// Adds an already-started asynchronous result.
    #[must_use]
    pub fn pending(mut self, key: impl Into<String>, pending: PendingResult) -> Self {
        self.insert(key, pending);
        self
    }

    /// Adds a lazily computed entry.
    #[must_use]
    pub fn accessor<F, L>(mut self, key: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> L + Send + Sync + 'static,
        L: Into<Leaf>,
    {
        self.insert(key, Accessor::new(func));
        self
    }

    /// Adds a nested namespace.
    #[must_use]
    pub fn namespace(mut self, key: impl Into<String>, tree: ActionTree) -> Self {
        self.insert(key, tree);
        self
    }

    /// Looks up a direct child.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ActionNode> {
        self.nodes.get(key)
    }

    /// Iterates over direct children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionNode)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
