//! Command resolution and execution.
//!
//! Looks a token's path up in a flattened registry and, for actions,
//! invokes them with the token's positional arguments. Misses are silent:
//! an unknown path resolves to `None`. Errors raised by actions are handed
//! back exactly as the action produced them.

use std::sync::Arc;

use chatcmd_foundation::{ActionError, Outcome};
use chatcmd_registry::{FlatActions, Leaf};
use tracing::{debug, trace};

use crate::command::CommandCall;
use crate::config::ArgumentDelimiter;

/// The result of executing one command token.
///
/// `Ok(None)` means the path did not resolve.
pub type ExecuteResult = Result<Option<Outcome>, ActionError>;

/// Resolves and runs command tokens against a flattened registry.
#[derive(Clone, Debug)]
pub struct CommandExecutor {
    actions: Arc<FlatActions>,
    argument_delimiter: ArgumentDelimiter,
}

impl CommandExecutor {
    /// Creates an executor over a shared flattened registry.
    #[must_use]
    pub fn new(actions: Arc<FlatActions>, argument_delimiter: ArgumentDelimiter) -> Self {
        Self {
            actions,
            argument_delimiter,
        }
    }

    /// Returns the flattened registry.
    #[must_use]
    pub fn actions(&self) -> &Arc<FlatActions> {
        &self.actions
    }

    /// Executes one command token.
    ///
    /// - Unknown path: `Ok(None)`.
    /// - Static value or pending result: returned as-is; any argument text
    ///   is ignored.
    /// - Action without call syntax: invoked with no arguments.
    /// - Action with call syntax: invoked with the argument text split on
    ///   the argument delimiter. `name()` passes one empty argument.
    ///
    /// Pending results are never awaited.
    ///
    /// # Errors
    ///
    /// Returns the invoked action's error unchanged.
    pub fn execute(&self, command: &str) -> ExecuteResult {
        let call = CommandCall::split(command);

        let Some(leaf) = self.actions.get(call.path) else {
            debug!(path = call.path, "no action registered for command");
            return Ok(None);
        };

        match leaf {
            Leaf::Static(value) => Ok(Some(Outcome::Ready(value))),
            Leaf::Pending(pending) => Ok(Some(Outcome::Pending(pending))),
            Leaf::Invocable(action) => {
                let args = call
                    .arguments
                    .map(|text| self.argument_delimiter.split(text))
                    .unwrap_or_default();
                trace!(path = call.path, ?args, "invoking action");
                action.invoke(&args).map(Some)
            }
        }
    }

    /// Executes tokens in order, one result per token.
    ///
    /// # Errors
    ///
    /// Stops at the first action error and returns it unchanged.
    pub fn execute_all<S: AsRef<str>>(
        &self,
        commands: &[S],
    ) -> Result<Vec<Option<Outcome>>, ActionError> {
        commands
            .iter()
            .map(|command| self.execute(command.as_ref()))
            .collect()
    }
}
