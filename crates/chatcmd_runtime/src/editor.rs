//! Line editor abstraction for the shell.
//!
//! This module provides a trait-based abstraction over line sources, so the
//! shell can read from rustyline interactively or from any reader in batch
//! mode.

use std::borrow::Cow;
use std::io::BufRead;

use chatcmd_foundation::{Error, ErrorKind, Result};
use chatcmd_parser::CommandTokenizer;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

/// Result of reading a line from the editor.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the command paths offered for completion.
    fn set_completions(&mut self, completions: Vec<String>);

    /// Set the tokenizer used to tell whether a message continues on the
    /// next line.
    fn set_tokenizer(&mut self, _tokenizer: CommandTokenizer) {}
}

/// Helper for rustyline that provides completion, hints, and validation.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct ChatHelper {
    #[rustyline(Completer)]
    completer: PathCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: ArgumentValidator,
}

impl Highlighter for ChatHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes namespaced command paths.
#[derive(Default)]
struct PathCompleter {
    completions: Vec<String>,
}

impl Completer for PathCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];

        let candidates = self
            .completions
            .iter()
            .filter(|c| c.starts_with(word))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Keeps reading while a command's argument list is open.
#[derive(Default)]
struct ArgumentValidator {
    tokenizer: Option<CommandTokenizer>,
}

impl ArgumentValidator {
    fn is_open(&self, input: &str) -> bool {
        self.tokenizer
            .as_ref()
            .is_some_and(|tokenizer| tokenizer.has_open_arguments(input))
    }
}

impl Validator for ArgumentValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if self.is_open(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// Rustyline-based line editor.
pub struct RustylineEditor {
    editor: Editor<ChatHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = ChatHelper {
            completer: PathCompleter::default(),
            hinter: HistoryHinter::new(),
            validator: ArgumentValidator::default(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, completions: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.completions = completions;
        }
    }

    fn set_tokenizer(&mut self, tokenizer: CommandTokenizer) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.validator.tokenizer = Some(tokenizer);
        }
    }
}

/// Reads lines from any buffered reader, ignoring prompts.
///
/// Used for batch mode (stdin) and tests.
pub struct ReaderEditor<R> {
    reader: R,
}

impl<R: BufRead> ReaderEditor<R> {
    /// Wraps a reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineEditor for ReaderEditor<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(ReadResult::Eof);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(ReadResult::Line(line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_completions(&mut self, _completions: Vec<String>) {}
}
