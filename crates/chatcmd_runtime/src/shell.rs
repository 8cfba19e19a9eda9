//! The interactive chat shell.
//!
//! Each message typed at the prompt is treated as a chat line: the handler
//! extracts whatever namespaced commands it contains and the shell prints
//! one line per command.

use chatcmd_foundation::{Outcome, Result, Value};
use chatcmd_parser::CommandHandler;
use futures::executor::block_on;
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Reads chat messages and reports the commands found in them.
pub struct Shell<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The command pipeline.
    handler: CommandHandler,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for argument lists spanning lines).
    continuation_prompt: String,
}

impl Shell<RustylineEditor> {
    /// Creates a new shell with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(handler: CommandHandler) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, handler))
    }
}

impl<E: LineEditor> Shell<E> {
    /// Creates a new shell with the given editor.
    pub fn with_editor(mut editor: E, handler: CommandHandler) -> Self {
        let prefix = handler.prefix().as_str().to_string();
        editor.set_completions(
            handler
                .actions()
                .paths()
                .map(|path| format!("{prefix}{path}"))
                .collect(),
        );
        editor.set_tokenizer(handler.tokenizer().clone());

        Self {
            editor,
            handler,
            show_banner: true,
            prompt: "chat> ".to_string(),
            continuation_prompt: "...   ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the command pipeline.
    #[must_use]
    pub const fn handler(&self) -> &CommandHandler {
        &self.handler
    }

    /// Runs the shell loop until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while let Some(input) = self.read_input()? {
            if input.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&input);

            for line in self.respond(&input) {
                println!("{line}");
            }
        }

        if self.show_banner {
            println!("\nGoodbye!");
        }
        Ok(())
    }

    /// Runs every command in `text`, returning one report line per command.
    ///
    /// Pending results are awaited before printing. Unlike
    /// [`CommandHandler::handle`], an action error is reported in place and
    /// the remaining commands still run.
    #[must_use]
    pub fn respond(&self, text: &str) -> Vec<String> {
        let tokens = self.handler.parse(text);
        debug!(commands = tokens.len(), "handling chat message");

        tokens
            .iter()
            .map(|token| {
                let report = match self.handler.execute(token) {
                    Ok(Some(outcome)) => format_value(&settle(outcome)),
                    Ok(None) => "(none)".to_string(),
                    Err(e) => format!("error: {e}"),
                };
                format!("{token} => {report}")
            })
            .collect()
    }

    /// Reads one message, following argument lists across lines.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if !self.handler.has_open_arguments(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                // An unclosed argument list at end of input is still handed
                // over; the tokenizer drops the incomplete command.
                ReadResult::Eof if first_line => return Ok(None),
                ReadResult::Eof => return Ok(Some(input)),
            }
        }
    }

    fn print_banner(&self) {
        let prefix = self.handler.prefix();
        println!("chatcmd {}", env!("CARGO_PKG_VERSION"));
        if prefix.is_global() {
            println!("Every word is a command. Press Ctrl+D to exit.");
        } else {
            println!("Commands start with {prefix}  Press Ctrl+D to exit.");
        }
        println!();
    }
}

fn settle(outcome: Outcome) -> Value {
    block_on(outcome.resolve())
}

/// Strings are quoted so empty or padded results stay visible.
fn format_value(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), |s| format!("{s:?}"))
}
