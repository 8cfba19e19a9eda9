//! Splitting a command token into path and argument text.

/// A command token split into its registry path and raw argument text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandCall<'a> {
    /// Everything before the first `(`.
    pub path: &'a str,
    /// Text between the first `(` and the last `)`, if the token has a `(`.
    pub arguments: Option<&'a str>,
}

impl<'a> CommandCall<'a> {
    /// Splits a token.
    ///
    /// Parentheses are not balanced: the argument text runs from the first
    /// `(` to the last `)`, inner parentheses included. Without a closing
    /// `)` the argument text runs to the end of the token. Anything after
    /// the last `)` is ignored.
    ///
    /// A registry key that itself contains `(` is therefore unreachable with
    /// call syntax.
    #[must_use]
    pub fn split(command: &'a str) -> Self {
        let Some((path, rest)) = command.split_once('(') else {
            return Self {
                path: command,
                arguments: None,
            };
        };

        let arguments = match rest.rfind(')') {
            Some(close) => &rest[..close],
            None => rest,
        };

        Self {
            path,
            arguments: Some(arguments),
        }
    }

    /// Returns true if the token used call syntax.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        self.arguments.is_some()
    }
}
