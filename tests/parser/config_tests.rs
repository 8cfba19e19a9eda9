//! Configuration tests.
//!
//! Tests for namespace prefixes and argument delimiters.

use chatcmd_foundation::ErrorKind;
use chatcmd_parser::{ArgumentDelimiter, CommandCall, HandlerConfig, NamespacePrefix};

#[test]
fn default_configuration() {
    let config = HandlerConfig::default();
    assert_eq!(config.delimiter, ".");
    assert!(config.include_leading_delimiter);
    assert!(matches!(
        config.argument_delimiter,
        ArgumentDelimiter::CommaOptionalSpace
    ));
}

#[test]
fn prefix_derivation() {
    let default = HandlerConfig::default();
    let bare = HandlerConfig::new().with_leading_delimiter(false);
    let slash = HandlerConfig::new().with_delimiter("/");

    assert_eq!(NamespacePrefix::new("bot", &default).as_str(), "bot.");
    assert_eq!(NamespacePrefix::new("bot", &bare).as_str(), "bot");
    assert_eq!(NamespacePrefix::new("bot", &slash).as_str(), "bot/");
    assert!(NamespacePrefix::new("", &default).is_global());
    assert!(NamespacePrefix::new("", &bare).is_global());
}

#[test]
fn default_split_consumes_one_space() {
    let split = ArgumentDelimiter::default();
    assert_eq!(split.split("a, b,c"), vec!["a", "b", "c"]);
    assert_eq!(split.split("a,  b"), vec!["a", " b"]);
    assert_eq!(split.split(" a"), vec![" a"]);
    assert_eq!(split.split(""), vec![""]);
}

#[test]
fn literal_split() {
    let split = ArgumentDelimiter::literal(" | ");
    assert_eq!(split.split("x | y|z"), vec!["x", "y|z"]);
    assert_eq!(ArgumentDelimiter::literal("").split("whole text"), vec!["whole text"]);
}

#[test]
fn pattern_split() {
    let config = HandlerConfig::new().with_argument_pattern(r"\s*;\s*").unwrap();
    assert_eq!(
        config.argument_delimiter.split("one ; two;three"),
        vec!["one", "two", "three"]
    );
}

#[test]
fn invalid_pattern_is_reported() {
    let err = HandlerConfig::new().with_argument_pattern("(unclosed").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"
    ));
}

#[test]
fn call_splitting() {
    assert_eq!(
        CommandCall::split("add(1, 2)"),
        CommandCall {
            path: "add",
            arguments: Some("1, 2"),
        }
    );
    assert_eq!(CommandCall::split("f(g(x))").arguments, Some("g(x)"));
    assert_eq!(CommandCall::split("f(a) trailing").arguments, Some("a"));
    assert_eq!(CommandCall::split("f(open").arguments, Some("open"));
    assert_eq!(CommandCall::split("f()").arguments, Some(""));
    assert!(!CommandCall::split("plain").is_call());
}
