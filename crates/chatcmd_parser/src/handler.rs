//! The composed command pipeline.
//!
//! A [`CommandHandler`] owns a tokenizer and an executor built from one
//! namespace, one registry, and one configuration. The registry is flattened
//! once at construction and shared read-only afterwards, so handlers are
//! cheap to clone and safe to use from several threads.

use std::sync::Arc;

use chatcmd_foundation::{ActionError, Outcome};
use chatcmd_registry::{ActionTree, FlatActions, flatten};

use crate::config::HandlerConfig;
use crate::executor::{CommandExecutor, ExecuteResult};
use crate::namespace::NamespacePrefix;
use crate::tokenizer::CommandTokenizer;

/// Finds commands in text and executes them.
#[derive(Clone, Debug)]
pub struct CommandHandler {
    config: HandlerConfig,
    tokenizer: CommandTokenizer,
    executor: CommandExecutor,
}

impl CommandHandler {
    /// Builds a handler, flattening `actions` with the configured delimiter.
    #[must_use]
    pub fn new(namespace: &str, actions: &ActionTree, config: HandlerConfig) -> Self {
        let prefix = NamespacePrefix::new(namespace, &config);
        let flat = flatten(actions, &config.delimiter).into_shared();
        Self {
            tokenizer: CommandTokenizer::new(prefix),
            executor: CommandExecutor::new(flat, config.argument_delimiter.clone()),
            config,
        }
    }

    /// Parses and executes every command in `text`.
    ///
    /// Same as [`parse_and_execute_all`](Self::parse_and_execute_all).
    ///
    /// # Errors
    ///
    /// Returns the first action error unchanged.
    pub fn handle(&self, text: &str) -> Result<Vec<Option<Outcome>>, ActionError> {
        self.parse_and_execute_all(text)
    }

    /// Extracts command tokens from text, namespace stripped.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Executes a single command token (namespace already stripped).
    ///
    /// # Errors
    ///
    /// Returns the invoked action's error unchanged.
    pub fn execute(&self, command: &str) -> ExecuteResult {
        self.executor.execute(command)
    }

    /// Executes tokens in order, one result per token.
    ///
    /// # Errors
    ///
    /// Returns the first action error unchanged.
    pub fn execute_all<S: AsRef<str>>(
        &self,
        commands: &[S],
    ) -> Result<Vec<Option<Outcome>>, ActionError> {
        self.executor.execute_all(commands)
    }

    /// Extracts and executes every command in `text`.
    ///
    /// # Errors
    ///
    /// Returns the first action error unchanged.
    pub fn parse_and_execute_all(&self, text: &str) -> Result<Vec<Option<Outcome>>, ActionError> {
        self.execute_all(&self.parse(text))
    }

    /// Returns true if `text` ends inside an argument list that has not
    /// closed yet, so more text may still complete the command.
    #[must_use]
    pub fn has_open_arguments(&self, text: &str) -> bool {
        self.tokenizer.has_open_arguments(text)
    }

    /// Returns the tokenizer.
    #[must_use]
    pub fn tokenizer(&self) -> &CommandTokenizer {
        &self.tokenizer
    }

    /// Returns the namespace prefix commands must carry.
    #[must_use]
    pub fn prefix(&self) -> &NamespacePrefix {
        self.tokenizer.prefix()
    }

    /// Returns the handler's configuration.
    #[must_use]
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Returns the flattened registry.
    #[must_use]
    pub fn actions(&self) -> &Arc<FlatActions> {
        self.executor.actions()
    }
}

/// Builds a [`CommandHandler`] for `namespace` over `actions`.
///
/// `None` uses the default configuration.
#[must_use]
pub fn create_command_handler(
    namespace: &str,
    actions: &ActionTree,
    config: Option<HandlerConfig>,
) -> CommandHandler {
    CommandHandler::new(namespace, actions, config.unwrap_or_default())
}
