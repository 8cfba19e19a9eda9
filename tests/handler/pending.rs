//! Pending results and caller-side settlement.
//!
//! The pipeline never awaits: batches come back with pending results left
//! as they are, and the caller decides how to settle them.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chatcmd::{ActionTree, create_command_handler};
use chatcmd_foundation::{Outcome, PendingResult, Value};
use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::join_all;

#[test]
fn batch_results_are_returned_unsettled() {
    let (sender, receiver) = oneshot::channel::<Value>();
    let pending = PendingResult::new(async move { receiver.await.unwrap_or_default() });
    let tree = ActionTree::new()
        .pending("slow", pending)
        .value("fast", "now");
    let handler = create_command_handler("bot", &tree, None);

    let results = handler.handle("bot.slow bot.fast").unwrap();
    let [Some(slow), Some(fast)] = results.as_slice() else {
        panic!("expected two resolved paths, got {results:?}");
    };
    assert!(slow.is_pending());
    assert_eq!(fast.ready_value(), Some(&Value::from("now")));

    sender.send(Value::from("done")).unwrap();
    assert_eq!(block_on(slow.clone().resolve()), Value::from("done"));
}

#[test]
fn async_actions_do_not_run_until_polled() {
    let started = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&started);
    let tree = ActionTree::new().async_action("work", move |_| {
        let flag = Arc::clone(&flag);
        async move {
            flag.store(true, Ordering::SeqCst);
            Value::from("worked")
        }
    });
    let handler = create_command_handler("bot", &tree, None);

    let outcome = handler.execute("work").unwrap().unwrap();
    assert!(!started.load(Ordering::SeqCst));

    assert_eq!(block_on(outcome.resolve()), Value::from("worked"));
    assert!(started.load(Ordering::SeqCst));
}

#[test]
fn callers_can_settle_a_batch_together() {
    let tree = ActionTree::new()
        .async_action("upper", |args| {
            let text = args.join(" ").to_uppercase();
            async move { Value::from(text) }
        })
        .action("len", |args| Ok(i64::try_from(args.concat().len()).unwrap_or(i64::MAX)));
    let handler = create_command_handler("bot", &tree, None);

    let results = handler
        .handle("bot.upper(a, b) bot.len(abc) bot.nothing")
        .unwrap();
    let settled = block_on(join_all(
        results.into_iter().flatten().map(Outcome::resolve),
    ));

    assert_eq!(settled, vec![Value::from("A B"), Value::Int(3)]);
}

#[test]
fn shared_pending_results_settle_once() {
    let tree = ActionTree::new().pending("answer", PendingResult::new(async { Value::Int(42) }));
    let handler = create_command_handler("bot", &tree, None);

    let results = handler.handle("bot.answer bot.answer").unwrap();
    let settled: Vec<_> = results
        .into_iter()
        .flatten()
        .map(|outcome| block_on(outcome.resolve()))
        .collect();
    assert_eq!(settled, vec![Value::Int(42), Value::Int(42)]);
}
