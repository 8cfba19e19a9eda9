//! Command extraction from free-form text.
//!
//! A single pass over the input's characters. Outside a command the scanner
//! tries to match the namespace prefix; once it matches, the following
//! characters form the command token until a break character ends it.
//! Text without a namespace match never produces a token.

use std::mem;

use tracing::{debug, trace};

use crate::namespace::NamespacePrefix;

/// Returns true for characters that separate words.
fn is_break(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Scanner state while walking the input.
#[derive(Debug, Default)]
struct ScanState {
    /// The namespace prefix has matched and a command is being captured.
    in_command: bool,
    /// An opening `(` has been seen in the current command.
    in_arguments: bool,
    /// Prefix text matched so far, or command text captured so far.
    buffer: String,
}

/// Extracts command tokens from text.
#[derive(Clone, Debug)]
pub struct CommandTokenizer {
    prefix: NamespacePrefix,
}

impl CommandTokenizer {
    /// Creates a tokenizer for the given namespace prefix.
    #[must_use]
    pub fn new(prefix: NamespacePrefix) -> Self {
        Self { prefix }
    }

    /// Returns the namespace prefix this tokenizer matches.
    #[must_use]
    pub fn prefix(&self) -> &NamespacePrefix {
        &self.prefix
    }

    /// Extracts command tokens, namespace stripped, in order of appearance.
    ///
    /// - Break characters (space, tab, newline) end a command, except inside
    ///   an argument list, where they are kept verbatim.
    /// - Once `(` is seen, everything is argument text. Parentheses are not
    ///   balanced; only a `)` directly followed by a break or the end of
    ///   input closes the command.
    /// - The namespace is not re-matched inside a command, so
    ///   `TEST.foo.TEST.bar` yields `foo.TEST.bar`.
    /// - A command whose argument list never closes is dropped.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let (commands, _) = self.scan(text);
        debug!(
            commands = commands.len(),
            prefix = %self.prefix,
            "tokenized input"
        );
        commands
    }

    /// Returns true if `text` ends inside an argument list that has not
    /// closed yet.
    ///
    /// Decided by the same scan as [`tokenize`](Self::tokenize), so a stray
    /// `(` in prose does not count and `bot.echo((a)` is already closed.
    #[must_use]
    pub fn has_open_arguments(&self, text: &str) -> bool {
        let (_, state) = self.scan(text);
        state.in_command && state.in_arguments
    }

    fn scan(&self, text: &str) -> (Vec<String>, ScanState) {
        let global = self.prefix.is_global();
        let mut commands = Vec::new();
        let mut state = ScanState {
            in_command: global,
            ..ScanState::default()
        };
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if !state.in_command {
                self.match_prefix(&mut state, ch);
                continue;
            }

            if is_break(ch) && !state.in_arguments {
                // A break right after the prefix abandons the match
                if state.buffer.is_empty() && !global {
                    state.in_command = false;
                }
                continue;
            }

            state.buffer.push(ch);

            let at_boundary = chars.peek().is_none_or(|&next| is_break(next));
            if ch == '(' {
                state.in_arguments = true;
            } else if at_boundary && (!state.in_arguments || ch == ')') {
                let command = mem::take(&mut state.buffer);
                trace!(%command, "extracted command");
                commands.push(command);
                state.in_command = global;
                state.in_arguments = false;
            }
        }

        (commands, state)
    }

    /// Advances the namespace match by one character.
    fn match_prefix(&self, state: &mut ScanState, ch: char) {
        state.buffer.push(ch);

        if !self.prefix.could_begin(&state.buffer) {
            // Restart from this character if it can begin a fresh match
            state.buffer.clear();
            let mut utf8 = [0; 4];
            if self.prefix.could_begin(ch.encode_utf8(&mut utf8)) {
                state.buffer.push(ch);
            }
        }

        if state.buffer == self.prefix.as_str() {
            state.in_command = true;
            state.buffer.clear();
        }
    }
}
