//! Host-side state holder.
//!
//! A shared cell that plays both roles a dispatcher needs from its host: the
//! state accessor (returns a clone of the current value) and the state sink
//! (replaces the value). Cloning a `Store` yields another handle to the same
//! cell.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::dispatch::{StateSink, StateSource};

pub struct Store<S> {
    inner: Arc<RwLock<StoreInner<S>>>,
}

struct StoreInner<S> {
    state: S,
    commits: u64,
}

impl<S> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner { state, commits: 0 })),
        }
    }

    /// Replaces the current state and counts the commit.
    pub fn set(&self, state: S) {
        let mut inner = self.inner.write();
        inner.state = state;
        inner.commits += 1;
    }

    /// Number of commits since creation.
    pub fn commits(&self) -> u64 {
        self.inner.read().commits
    }

    /// Runs `f` against the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.read().state)
    }
}

impl<S: Clone> Store<S> {
    /// Returns a clone of the current state.
    pub fn get(&self) -> S {
        self.inner.read().state.clone()
    }
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    /// Accessor closure for [`build`](crate::build).
    pub fn source(&self) -> impl Fn() -> S + Send + Sync + 'static {
        let store = self.clone();
        move || store.get()
    }

    /// Sink closure for [`build`](crate::build).
    pub fn sink(&self) -> impl Fn(S) + Send + Sync + 'static {
        let store = self.clone();
        move |state| store.set(state)
    }
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Clone> StateSource<S> for Store<S> {
    fn current(&self) -> S {
        self.get()
    }
}

impl<S> StateSink<S> for Store<S> {
    fn commit(&self, state: S) {
        self.set(state)
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Store")
            .field("state", &inner.state)
            .field("commits", &inner.commits)
            .finish()
    }
}
