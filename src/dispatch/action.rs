//! A single callable action wrapping one reducer.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::equality::ShallowEq;

use super::binding::Binding;
use super::reducer::Reducer;

/// When an action hands its computed state to the sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Skip the commit when the new state is shallow-equal to the current one.
    #[default]
    OnChange,
    /// Commit every successfully computed state.
    Always,
}

/// One entry of a [`Dispatcher`](super::Dispatcher).
///
/// Each call runs read → compute → re-read → compare → (maybe) commit against
/// the shared [`Binding`]. Nothing is cached between calls. Concurrent calls
/// against the same binding are not serialized here; the host must do that.
pub struct Action<S, A = (), E = Infallible> {
    key: Arc<str>,
    reducer: Reducer<S, A, E>,
    binding: Arc<Binding<S>>,
    policy: CommitPolicy,
}

impl<S, A, E> Action<S, A, E> {
    pub fn new(
        key: impl Into<Arc<str>>,
        reducer: Reducer<S, A, E>,
        binding: Arc<Binding<S>>,
        policy: CommitPolicy,
    ) -> Self {
        Self {
            key: key.into(),
            reducer,
            binding,
            policy,
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }
}

impl<S: ShallowEq, A, E> Action<S, A, E> {
    /// Runs the reducer once and commits the result if it changed.
    ///
    /// Returns `Ok(true)` when the sink was called, `Ok(false)` when the
    /// commit was skipped. A reducer error is returned as is and nothing is
    /// committed.
    pub fn try_call(&self, args: A) -> Result<bool, E> {
        let state = self.binding.current();
        let next = self
            .reducer
            .apply(state, args)
            .inspect_err(|_| trace!(action = %self.key, "reducer failed, nothing committed"))?;

        if self.policy == CommitPolicy::OnChange && self.binding.current().shallow_eq(&next) {
            trace!(action = %self.key, "state unchanged, commit skipped");
            return Ok(false);
        }

        trace!(action = %self.key, policy = ?self.policy, "committing state");
        self.binding.commit(next);
        Ok(true)
    }
}

impl<S: ShallowEq, A> Action<S, A> {
    /// Infallible form of [`Action::try_call`].
    pub fn call(&self, args: A) -> bool {
        match self.try_call(args) {
            Ok(committed) => committed,
            Err(never) => match never {},
        }
    }
}

impl<S, A, E> Clone for Action<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            reducer: self.reducer.clone(),
            binding: Arc::clone(&self.binding),
            policy: self.policy,
        }
    }
}

impl<S, A, E> fmt::Debug for Action<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("key", &self.key)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
