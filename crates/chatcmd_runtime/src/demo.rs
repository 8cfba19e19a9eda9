//! A small registry for trying the pipeline from the shell.

use std::time::Instant;

use chatcmd_foundation::{ActionError, Value};
use chatcmd_registry::ActionTree;

fn parse_numbers(args: &[String]) -> Result<Vec<f64>, ActionError> {
    args.iter()
        .map(|arg| {
            arg.trim()
                .parse::<f64>()
                .map_err(|_| ActionError::invalid_argument(arg.as_str(), "not a number"))
        })
        .collect()
}

/// Collapses whole floats back to integers for display.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Value::Int(n as i64)
    } else {
        Value::Float(n)
    }
}

/// Builds the demo registry.
///
/// ```text
/// math.add(1, 2, ...)       sum of the arguments
/// math.multiply(2, 3, ...)  product of the arguments
/// echo(a, b, ...)           the arguments joined by spaces
/// shout(text)               the argument upper-cased
/// version                   the crate version
/// clock.uptime              seconds since the registry was built
/// later.greet(name)         a greeting, produced asynchronously
/// ```
#[must_use]
pub fn demo_registry() -> ActionTree {
    let started = Instant::now();

    ActionTree::new()
        .namespace(
            "math",
            ActionTree::new()
                .action("add", |args| Ok(number(parse_numbers(args)?.iter().sum())))
                .action("multiply", |args| {
                    Ok(number(parse_numbers(args)?.iter().product()))
                }),
        )
        .action("echo", |args| Ok(args.join(" ")))
        .action("shout", |args| {
            ActionError::check_arity(args, 1)?;
            Ok(args[0].to_uppercase())
        })
        .value("version", env!("CARGO_PKG_VERSION"))
        .namespace(
            "clock",
            ActionTree::new().accessor("uptime", move || {
                Value::from(started.elapsed().as_secs_f64())
            }),
        )
        .namespace(
            "later",
            ActionTree::new().async_action("greet", |args| {
                let name = args.first().cloned().unwrap_or_default();
                async move { Value::from(format!("hello, {name}")) }
            }),
        )
}
