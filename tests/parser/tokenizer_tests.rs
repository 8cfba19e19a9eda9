//! Tokenizer tests.
//!
//! Tests for extracting command tokens from raw chat text.

use chatcmd_parser::{CommandTokenizer, HandlerConfig, NamespacePrefix};

fn tokenize(namespace: &str, text: &str) -> Vec<String> {
    tokenize_with(namespace, &HandlerConfig::default(), text)
}

fn tokenize_with(namespace: &str, config: &HandlerConfig, text: &str) -> Vec<String> {
    CommandTokenizer::new(NamespacePrefix::new(namespace, config)).tokenize(text)
}

#[test]
fn commands_in_prose() {
    assert_eq!(
        tokenize("TEST", "abcd TEST.foo efg TEST.bar TEST.baz hijk"),
        vec!["foo", "bar", "baz"]
    );
}

#[test]
fn namespace_is_not_rematched_inside_a_command() {
    assert_eq!(
        tokenize("TEST", "abcd TEST.foo.TEST.bar efgh"),
        vec!["foo.TEST.bar"]
    );
}

#[test]
fn commands_on_separate_lines() {
    assert_eq!(
        tokenize("TEST", "TEST.foo\nTEST.bar\n   TEST.baz"),
        vec!["foo", "bar", "baz"]
    );
}

#[test]
fn prefix_is_a_literal_substring() {
    // No word boundary is required before the namespace.
    assert_eq!(tokenize("TEST", "abcdefgTEST.bad"), vec!["bad"]);
}

#[test]
fn partial_prefixes_do_not_trigger() {
    assert!(tokenize("TEST", "TESTabar").is_empty());
    assert!(tokenize("TEST", "TEST").is_empty());
    assert!(tokenize("TEST", "TE ST.foo").is_empty());
}

#[test]
fn matching_is_case_sensitive() {
    assert!(tokenize("TEST", "test.foo Test.foo").is_empty());
}

#[test]
fn mismatch_restarts_from_the_current_character_only() {
    assert_eq!(tokenize("TEST", "TTEST.foo"), vec!["foo"]);
    // The match attempt that began at the first `T` swallows the second one.
    assert_eq!(tokenize("TEST", "TESTEST.foo TEST.bar"), vec!["bar"]);
}

#[test]
fn arguments_span_breaks() {
    assert_eq!(
        tokenize("bot", "bot.note(first line\nsecond line) done"),
        vec!["note(first line\nsecond line)"]
    );
}

#[test]
fn arguments_may_contain_the_namespace() {
    assert_eq!(
        tokenize("bot", "bot.echo(ask bot.help) ok"),
        vec!["echo(ask bot.help)"]
    );
}

#[test]
fn close_paren_must_be_followed_by_a_break() {
    assert_eq!(
        tokenize("bot", "bot.calc((1)+(2)) later"),
        vec!["calc((1)+(2))"]
    );
}

#[test]
fn first_close_paren_before_a_break_ends_the_command() {
    assert_eq!(
        tokenize("bot", "bot.calc((1) + (2)) later"),
        vec!["calc((1)"]
    );
}

#[test]
fn closing_at_end_of_input() {
    assert_eq!(tokenize("bot", "run bot.go(now)"), vec!["go(now)"]);
}

#[test]
fn unterminated_arguments_emit_nothing() {
    assert_eq!(
        tokenize("bot", "bot.ok bot.broken(never closed"),
        vec!["ok"]
    );
}

#[test]
fn custom_delimiter_in_prefix() {
    let config = HandlerConfig::new().with_delimiter("/");
    assert_eq!(
        tokenize_with("bot", &config, "bot/math/add(1, 2) bot.math.add"),
        vec!["math/add(1, 2)"]
    );
}

#[test]
fn no_leading_delimiter() {
    let config = HandlerConfig::new().with_leading_delimiter(false);
    assert_eq!(
        tokenize_with("/", &config, "abcd /help efghi //help!"),
        vec!["help", "/help!"]
    );
}

#[test]
fn global_namespace() {
    assert_eq!(
        tokenize("", "hello there(a b) friend"),
        vec!["hello", "there(a b)", "friend"]
    );
}

#[test]
fn tabs_are_breaks() {
    assert_eq!(tokenize("TEST", "TEST.a\tTEST.b"), vec!["a", "b"]);
}
