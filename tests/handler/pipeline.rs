//! End-to-end handler behavior on chat text.

use chatcmd::{ActionTree, HandlerConfig, create_command_handler};
use chatcmd_foundation::{ActionError, Outcome, PendingResult, Value};

fn registry() -> ActionTree {
    ActionTree::new()
        .action("stringOutput", |_| Ok("OUTPUT A"))
        .pending("promiseOutput", PendingResult::ready("OUTPUT B"))
        .action("multiArgumentOutput", |args| Ok(args.join("")))
        .value("staticValue", 42)
        .action("key(with paren", |_| Ok("unreachable"))
        .namespace(
            "nested",
            ActionTree::new().namespace("deeper", ActionTree::new().value("leaf", true)),
        )
}

fn ready(results: &[Option<Outcome>]) -> Vec<Option<Value>> {
    results
        .iter()
        .map(|r| r.as_ref().and_then(Outcome::ready_value).cloned())
        .collect()
}

#[test]
fn commands_in_prose() {
    let handler = create_command_handler("TEST", &registry(), None);
    assert_eq!(
        handler.parse("abcd TEST.foo efg TEST.bar TEST.baz hijk"),
        vec!["foo", "bar", "baz"]
    );
}

#[test]
fn namespace_inside_command_is_literal() {
    let handler = create_command_handler("TEST", &registry(), None);
    assert_eq!(
        handler.parse("abcd TEST.foo.TEST.bar efgh"),
        vec!["foo.TEST.bar"]
    );
}

#[test]
fn argument_spacing_does_not_matter() {
    let handler = create_command_handler("TEST", &registry(), None);
    let spaced = handler.execute("multiArgumentOutput(a, b,c)").unwrap();
    let tight = handler.execute("multiArgumentOutput(a,b,c)").unwrap();

    assert_eq!(ready(&[spaced]), ready(&[tight]));
}

#[test]
fn paren_keys_are_unreachable_by_call() {
    let handler = create_command_handler("TEST", &registry(), None);
    assert!(handler.execute("key(with paren(1)").unwrap().is_none());
    assert!(handler.execute("key(with paren()").unwrap().is_none());
}

#[test]
fn slash_namespace_without_leading_delimiter() {
    let config = HandlerConfig::new().with_leading_delimiter(false);
    let handler = create_command_handler("/", &registry(), Some(config));
    assert_eq!(
        handler.parse("abcd /help efghi //help!"),
        vec!["help", "/help!"]
    );
}

#[test]
fn misses_and_static_values() {
    let handler = create_command_handler("TEST", &registry(), None);
    assert!(handler.execute("doesNotExist").unwrap().is_none());
    assert!(handler.execute("doesNotExist(1)").unwrap().is_none());

    let results = handler
        .handle("TEST.staticValue TEST.staticValue(1, 2) TEST.nested.deeper.leaf()")
        .unwrap();
    assert_eq!(
        ready(&results),
        vec![
            Some(Value::Int(42)),
            Some(Value::Int(42)),
            Some(Value::Bool(true))
        ]
    );
}

#[test]
fn mixed_message() {
    let handler = create_command_handler("TEST", &registry(), None);
    let results = handler
        .handle("ok TEST.stringOutput, then TEST.missing and TEST.multiArgumentOutput(x, y)")
        .unwrap();

    // `stringOutput,` keeps its trailing comma and misses.
    assert_eq!(
        ready(&results),
        vec![None, None, Some(Value::from("xy"))]
    );
}

#[test]
fn action_errors_reach_the_caller() {
    let tree = registry().action("refuse", |_| -> Result<Value, ActionError> {
        Err(ActionError::message("not today"))
    });
    let handler = create_command_handler("TEST", &tree, None);

    let err = handler.handle("TEST.stringOutput TEST.refuse").unwrap_err();
    assert_eq!(err.to_string(), "not today");
}

#[test]
fn handlers_are_independent() {
    let first = create_command_handler("a", &registry(), None);
    let second = create_command_handler(
        "b",
        &registry(),
        Some(HandlerConfig::new().with_delimiter("/")),
    );

    let text = "a.nested.deeper.leaf b/nested/deeper/leaf";
    assert_eq!(first.parse(text), vec!["nested.deeper.leaf"]);
    assert_eq!(second.parse(text), vec!["nested/deeper/leaf"]);
    assert_eq!(ready(&first.handle(text).unwrap()), ready(&second.handle(text).unwrap()));
}
