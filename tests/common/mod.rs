//! Shared test utilities: a counter state and an observable host.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use reducer_dispatch::{shallow_eq, Store};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Application state used across dispatcher tests.
///
/// `tags` sits behind a shared pointer so tests can mutate it in place
/// without changing the member's identity.
#[derive(Clone, Debug)]
pub struct Counter {
    pub count: i64,
    pub name: String,
    pub tags: Arc<Mutex<Vec<String>>>,
}

shallow_eq!(Counter { count, name, tags });

impl Counter {
    pub fn new(count: i64, name: &str) -> Self {
        Self {
            count,
            name: name.to_string(),
            tags: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// A store whose accessor reads and sink commits are observable.
pub struct Host<S> {
    pub store: Store<S>,
    reads: Arc<AtomicUsize>,
    commits: Arc<Mutex<Vec<S>>>,
}

impl<S: Clone + Send + Sync + 'static> Host<S> {
    pub fn new(initial: S) -> Self {
        Self {
            store: Store::new(initial),
            reads: Arc::new(AtomicUsize::new(0)),
            commits: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn source(&self) -> impl Fn() -> S + Send + Sync + 'static {
        let store = self.store.clone();
        let reads = Arc::clone(&self.reads);
        move || {
            reads.fetch_add(1, Ordering::SeqCst);
            store.get()
        }
    }

    pub fn sink(&self) -> impl Fn(S) + Send + Sync + 'static {
        let store = self.store.clone();
        let commits = Arc::clone(&self.commits);
        move |state: S| {
            commits.lock().push(state.clone());
            store.set(state);
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn commits(&self) -> Vec<S> {
        self.commits.lock().clone()
    }

    pub fn state(&self) -> S {
        self.store.get()
    }
}
