//! Reducer handles.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

type ReduceFn<S, A, E> = dyn Fn(S, A) -> Result<S, E> + Send + Sync;

/// A pure state transition: `(state, args) -> state`.
///
/// `A` carries the trailing arguments: a tuple for a fixed parameter list,
/// or any type shared by all reducers of a [`ReducerMap`](super::ReducerMap).
/// Reducers must be free of side effects; this is a contract, not enforced.
pub struct Reducer<S, A = (), E = Infallible> {
    reduce: Arc<ReduceFn<S, A, E>>,
}

impl<S, A> Reducer<S, A> {
    pub fn new<F>(reduce: F) -> Self
    where
        F: Fn(S, A) -> S + Send + Sync + 'static,
        S: 'static,
        A: 'static,
    {
        Self {
            reduce: Arc::new(move |state: S, args: A| Ok::<S, Infallible>(reduce(state, args))),
        }
    }
}

impl<S, A, E> Reducer<S, A, E> {
    /// A reducer that may fail. The error reaches the action caller unchanged.
    pub fn fallible<F>(reduce: F) -> Self
    where
        F: Fn(S, A) -> Result<S, E> + Send + Sync + 'static,
    {
        Self {
            reduce: Arc::new(reduce),
        }
    }

    #[inline]
    pub fn apply(&self, state: S, args: A) -> Result<S, E> {
        (self.reduce)(state, args)
    }

    /// Whether both handles wrap the very same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.reduce, &other.reduce)
    }
}

impl<S, A, E> Clone for Reducer<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            reduce: Arc::clone(&self.reduce),
        }
    }
}

impl<S, A, E> fmt::Debug for Reducer<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer").finish_non_exhaustive()
    }
}
