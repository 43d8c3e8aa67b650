mod common;

use common::{Counter, Host};
use parking_lot::Mutex;
use reducer_dispatch::config::DispatchConfig;
use reducer_dispatch::{
    build, CommitPolicy, Dispatcher, DispatcherBuilder, Reducer, ReducerMap, UnknownAction,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn increment(state: Counter, (): ()) -> Counter {
    Counter {
        count: state.count + 1,
        ..state
    }
}

fn counter_reducers() -> ReducerMap<Counter> {
    ReducerMap::new()
        .with("increment", Reducer::new(increment))
        .with("keep", Reducer::new(|state: Counter, ()| state))
        .with(
            "rebuild",
            Reducer::new(|state: Counter, ()| Counter {
                count: state.count,
                name: state.name.clone(),
                tags: Arc::clone(&state.tags),
            }),
        )
        .with(
            "tag",
            Reducer::new(|state: Counter, ()| {
                state.tags.lock().push("deep".to_string());
                Counter {
                    tags: Arc::clone(&state.tags),
                    ..state
                }
            }),
        )
}

#[test]
fn dispatcher_has_exactly_the_reducer_keys() {
    let host = Host::new(Counter::new(1, "x"));
    let reducers = counter_reducers();
    let dispatcher = build(host.source(), host.sink(), &reducers);

    assert_eq!(
        dispatcher.keys().collect::<Vec<_>>(),
        reducers.keys().collect::<Vec<_>>()
    );
    assert_eq!(dispatcher.len(), reducers.len());
}

#[test]
fn empty_reducer_map_gives_empty_dispatcher() {
    let host = Host::new(0_i64);
    let dispatcher = build(host.source(), host.sink(), &ReducerMap::<i64>::new());
    assert!(dispatcher.is_empty());
}

#[test]
fn building_reads_nothing_and_commits_nothing() {
    let host = Host::new(Counter::new(1, "x"));
    let _dispatcher = build(host.source(), host.sink(), &counter_reducers());
    assert_eq!(host.reads(), 0);
    assert!(host.commits().is_empty());
}

#[test]
fn arguments_are_forwarded_with_current_state() {
    let host = Host::new(Counter::new(1, "x"));
    let seen: Arc<Mutex<Vec<(i64, i64, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let calls = Arc::new(AtomicUsize::new(0));

    let reducers = {
        let seen = Arc::clone(&seen);
        let calls = Arc::clone(&calls);
        ReducerMap::new().with(
            "update",
            Reducer::new(move |state: Counter, (amount, name): (i64, String)| {
                calls.fetch_add(1, Ordering::SeqCst);
                seen.lock().push((state.count, amount, name.clone()));
                Counter {
                    count: state.count + amount,
                    name,
                    ..state
                }
            }),
        )
    };
    let dispatcher = build(host.source(), host.sink(), &reducers);

    let update = dispatcher.action("update").unwrap();
    assert!(update.call((5, "y".to_string())));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(*seen.lock(), vec![(1, 5, "y".to_string())]);
    assert_eq!(host.state().count, 6);
    assert_eq!(host.state().name, "y");
}

#[test]
fn rebuilt_equal_state_is_not_committed() {
    let host = Host::new(Counter::new(1, "x"));
    let dispatcher = build(host.source(), host.sink(), &counter_reducers());

    assert!(!dispatcher.action("rebuild").unwrap().call(()));
    assert!(!dispatcher.action("keep").unwrap().call(()));
    assert!(host.commits().is_empty());
    assert_eq!(host.store.commits(), 0);
}

#[test]
fn changed_state_is_committed_once() {
    let host = Host::new(Counter::new(1, "x"));
    let dispatcher = build(host.source(), host.sink(), &counter_reducers());

    assert!(dispatcher.action("increment").unwrap().call(()));

    let commits = host.commits();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].count, 2);
    assert_eq!(commits[0].name, "x");
}

#[test]
fn each_call_reads_the_latest_state() {
    let host = Host::new(Counter::new(1, "x"));
    let dispatcher = build(host.source(), host.sink(), &counter_reducers());
    let increment = dispatcher.action("increment").unwrap();

    assert!(increment.call(()));
    assert!(increment.call(()));
    assert_eq!(host.state().count, 3);

    // A commit made by someone else between calls is observed too.
    host.store.set(Counter::new(10, "x"));
    assert!(increment.call(()));
    assert_eq!(host.state().count, 11);

    let counts: Vec<i64> = host.commits().iter().map(|c| c.count).collect();
    assert_eq!(counts, vec![2, 3, 11]);
}

#[test]
fn accessor_is_invoked_on_every_call() {
    let host = Host::new(Counter::new(1, "x"));
    let dispatcher = build(host.source(), host.sink(), &counter_reducers());
    let keep = dispatcher.action("keep").unwrap();

    keep.call(());
    let after_first = host.reads();
    keep.call(());
    assert!(after_first > 0);
    assert_eq!(host.reads(), after_first * 2);
}

#[test]
fn in_place_nested_change_is_invisible() {
    let host = Host::new(Counter::new(1, "x"));
    let dispatcher = build(host.source(), host.sink(), &counter_reducers());

    assert!(!dispatcher.action("tag").unwrap().call(()));
    assert!(host.commits().is_empty());
    // The nested mutation happened, only the commit was skipped.
    assert_eq!(*host.state().tags.lock(), vec!["deep".to_string()]);
}

#[test]
fn reducer_error_propagates_without_commit() {
    #[derive(Debug, PartialEq)]
    struct Overflow;

    let host = Host::new(u8::MAX);
    let reducers = ReducerMap::new().with(
        "increment",
        Reducer::fallible(|n: u8, ()| n.checked_add(1).ok_or(Overflow)),
    );
    let dispatcher = build(host.source(), host.sink(), &reducers);

    assert_eq!(
        dispatcher.action("increment").unwrap().try_call(()),
        Err(Overflow)
    );
    assert!(host.commits().is_empty());
}

#[test]
fn reducer_panic_unwinds_to_caller_without_commit() {
    let host = Host::new(Counter::new(1, "x"));
    let reducers = ReducerMap::new().with(
        "explode",
        Reducer::new(|_: Counter, ()| -> Counter { panic!("reducer failed") }),
    );
    let dispatcher = build(host.source(), host.sink(), &reducers);
    let explode = dispatcher.action("explode").unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| explode.call(())));
    assert!(result.is_err());
    assert!(host.commits().is_empty());
}

#[test]
fn unknown_key_is_a_lookup_error() {
    let host = Host::new(Counter::new(1, "x"));
    let dispatcher = build(host.source(), host.sink(), &counter_reducers());

    assert!(dispatcher.get("decrement").is_none());
    assert_eq!(
        dispatcher.action("decrement").unwrap_err(),
        UnknownAction {
            key: "decrement".to_string()
        }
    );
}

#[test]
fn always_policy_commits_unchanged_state() {
    let host = Host::new(Counter::new(1, "x"));
    let dispatcher = Dispatcher::builder(host.source(), host.sink())
        .policy(CommitPolicy::Always)
        .build(&counter_reducers());

    assert!(dispatcher.action("keep").unwrap().call(()));
    assert_eq!(host.commits().len(), 1);
}

#[test]
fn config_selects_commit_policy() {
    let host = Host::new(Counter::new(1, "x"));
    let config = DispatchConfig {
        commit: CommitPolicy::Always,
    };
    let dispatcher = DispatcherBuilder::new(host.source(), host.sink())
        .config(&config)
        .build(&counter_reducers());

    assert!(dispatcher
        .iter()
        .all(|(_, action)| action.policy() == CommitPolicy::Always));
}

#[test]
fn one_builder_serves_several_reducer_maps() {
    let host = Host::new(Counter::new(1, "x"));
    let builder = DispatcherBuilder::new(host.source(), host.sink());

    let first = builder.build(&counter_reducers());
    let reset = ReducerMap::new().with(
        "reset",
        Reducer::new(|state: Counter, ()| Counter { count: 0, ..state }),
    );
    let second = builder.build(&reset);

    assert!(first.action("increment").unwrap().call(()));
    assert!(second.action("reset").unwrap().call(()));
    assert_eq!(host.state().count, 0);
    assert_eq!(host.commits().len(), 2);
}
