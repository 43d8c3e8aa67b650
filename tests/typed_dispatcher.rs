mod common;

use common::{Counter, Host};
use reducer_dispatch::{dispatcher, CommitPolicy};

fn increment(state: Counter) -> Counter {
    Counter {
        count: state.count + 1,
        ..state
    }
}

fn add(state: Counter, amount: i64) -> Counter {
    Counter {
        count: state.count + amount,
        ..state
    }
}

fn rename(state: Counter, first: String, last: String) -> Counter {
    Counter {
        name: format!("{} {}", first, last),
        ..state
    }
}

dispatcher! {
    /// Actions over [`Counter`].
    struct CounterActions for Counter {
        fn increment() => increment;
        fn add(amount: i64) => add;
        fn rename(first: String, last: String) => rename;
        /// Returns the state untouched.
        fn keep() => |state: Counter| state;
    }
}

#[test]
fn keys_follow_declaration_order() {
    assert_eq!(
        CounterActions::KEYS,
        &["increment", "add", "rename", "keep"]
    );
    let host = Host::new(Counter::new(0, "x"));
    let actions = CounterActions::build(host.source(), host.sink());
    assert_eq!(actions.keys(), CounterActions::KEYS);
}

#[test]
fn methods_keep_reducer_arity() {
    let host = Host::new(Counter::new(0, "x"));
    let actions = CounterActions::build(host.source(), host.sink());

    assert!(actions.increment());
    assert!(actions.add(41));
    assert!(actions.rename("Ada".to_string(), "Lovelace".to_string()));

    let state = host.state();
    assert_eq!(state.count, 42);
    assert_eq!(state.name, "Ada Lovelace");
    assert_eq!(host.commits().len(), 3);
}

#[test]
fn no_op_actions_are_not_committed() {
    let host = Host::new(Counter::new(3, "x"));
    let actions = CounterActions::build(host.source(), host.sink());

    assert!(!actions.keep());
    assert!(!actions.add(0));
    assert!(host.commits().is_empty());
    assert_eq!(host.state().count, 3);
}

#[test]
fn always_policy_commits_every_call() {
    let host = Host::new(Counter::new(3, "x"));
    let actions = CounterActions::with_policy(host.source(), host.sink(), CommitPolicy::Always);

    assert!(actions.keep());
    assert!(actions.add(0));
    assert_eq!(host.commits().len(), 2);
}

#[test]
fn store_can_be_passed_directly() {
    let host = Host::new(Counter::new(1, "x"));
    let actions = CounterActions::build(host.store.clone(), host.store.clone());

    assert!(actions.add(2));
    assert_eq!(host.store.get().count, 3);
    assert_eq!(host.store.commits(), 1);
}

#[derive(Debug, PartialEq)]
struct Overflow;

fn checked_add(state: Counter, amount: i64) -> Result<Counter, Overflow> {
    let count = state.count.checked_add(amount).ok_or(Overflow)?;
    Ok(Counter { count, ..state })
}

dispatcher! {
    struct CheckedActions for Counter {
        fn checked_add(amount: i64) -> Result<_, Overflow> => checked_add;
        fn decrement() => |state: Counter| Counter {
            count: state.count - 1,
            ..state
        };
    }
}

#[test]
fn fallible_action_reports_commit_or_error() {
    let host = Host::new(Counter::new(i64::MAX - 1, "x"));
    let actions = CheckedActions::build(host.source(), host.sink());

    assert_eq!(actions.checked_add(1), Ok(true));
    assert_eq!(actions.checked_add(0), Ok(false));
    assert_eq!(actions.checked_add(1), Err(Overflow));
    assert_eq!(host.commits().len(), 1);
    assert_eq!(host.state().count, i64::MAX);

    assert!(actions.decrement());
    assert_eq!(host.state().count, i64::MAX - 1);
}
