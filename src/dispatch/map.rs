//! Reducer maps and the dispatchers built from them.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::DispatchConfig;

use super::action::{Action, CommitPolicy};
use super::binding::{Binding, StateSink, StateSource};
use super::reducer::Reducer;

/// Lookup of a key that the dispatcher was never given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no action named '{key}' in this dispatcher")]
pub struct UnknownAction {
    pub key: String,
}

/// Named reducers sharing one state type and one argument type.
///
/// Keys are unique; inserting an existing key replaces its reducer.
pub struct ReducerMap<S, A = (), E = Infallible> {
    reducers: BTreeMap<String, Reducer<S, A, E>>,
}

impl<S, A, E> ReducerMap<S, A, E> {
    pub fn new() -> Self {
        Self {
            reducers: BTreeMap::new(),
        }
    }

    /// Adds a reducer, returning the one previously registered under `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        reducer: Reducer<S, A, E>,
    ) -> Option<Reducer<S, A, E>> {
        self.reducers.insert(key.into(), reducer)
    }

    pub fn with(mut self, key: impl Into<String>, reducer: Reducer<S, A, E>) -> Self {
        self.insert(key, reducer);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Reducer<S, A, E>> {
        self.reducers.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.reducers.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.reducers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Reducer<S, A, E>> {
        self.reducers.iter()
    }

    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Default for ReducerMap<S, A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A, E> Clone for ReducerMap<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            reducers: self.reducers.clone(),
        }
    }
}

impl<S, A, E> fmt::Debug for ReducerMap<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.reducers.keys()).finish()
    }
}

impl<S, A, E, K> FromIterator<(K, Reducer<S, A, E>)> for ReducerMap<S, A, E>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Reducer<S, A, E>)>>(iter: I) -> Self {
        Self {
            reducers: iter
                .into_iter()
                .map(|(key, reducer)| (key.into(), reducer))
                .collect(),
        }
    }
}

/// Sibling map of a [`ReducerMap`]: one [`Action`] per reducer key.
pub struct Dispatcher<S, A = (), E = Infallible> {
    actions: BTreeMap<String, Action<S, A, E>>,
}

impl<S> Dispatcher<S> {
    pub fn builder<G, D>(get_state: G, dispatch: D) -> DispatcherBuilder<S>
    where
        G: StateSource<S> + Send + Sync + 'static,
        D: StateSink<S> + Send + Sync + 'static,
    {
        DispatcherBuilder::new(get_state, dispatch)
    }
}

impl<S, A, E> Dispatcher<S, A, E> {
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Action<S, A, E>> {
        self.actions.get(key)
    }

    /// Like [`Dispatcher::get`], with a typed error for absent keys.
    pub fn action(&self, key: &str) -> Result<&Action<S, A, E>, UnknownAction> {
        self.get(key).ok_or_else(|| UnknownAction {
            key: key.to_string(),
        })
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Action<S, A, E>> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<S, A, E> Clone for Dispatcher<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<S, A, E> fmt::Debug for Dispatcher<S, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Holds the binding and commit policy until a reducer map is supplied.
///
/// One builder can produce dispatchers for several reducer maps; each of
/// them shares the same source and sink.
pub struct DispatcherBuilder<S> {
    binding: Arc<Binding<S>>,
    policy: CommitPolicy,
}

impl<S> DispatcherBuilder<S> {
    pub fn new<G, D>(get_state: G, dispatch: D) -> Self
    where
        G: StateSource<S> + Send + Sync + 'static,
        D: StateSink<S> + Send + Sync + 'static,
    {
        Self {
            binding: Binding::shared(get_state, dispatch),
            policy: CommitPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: CommitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(self, config: &DispatchConfig) -> Self {
        self.policy(config.commit)
    }

    /// Wraps every reducer of `reducers` into an action.
    ///
    /// Neither the source, the sink nor any reducer is invoked here.
    pub fn build<A, E>(&self, reducers: &ReducerMap<S, A, E>) -> Dispatcher<S, A, E> {
        debug!(actions = reducers.len(), policy = ?self.policy, "building dispatcher");
        let actions = reducers
            .iter()
            .map(|(key, reducer)| {
                let action = Action::new(
                    key.as_str(),
                    reducer.clone(),
                    Arc::clone(&self.binding),
                    self.policy,
                );
                (key.clone(), action)
            })
            .collect();
        Dispatcher { actions }
    }
}

impl<S> fmt::Debug for DispatcherBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatcherBuilder")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Builds a dispatcher with the default [`CommitPolicy::OnChange`].
pub fn build<S, A, E, G, D>(
    get_state: G,
    dispatch: D,
    reducers: &ReducerMap<S, A, E>,
) -> Dispatcher<S, A, E>
where
    G: StateSource<S> + Send + Sync + 'static,
    D: StateSink<S> + Send + Sync + 'static,
{
    DispatcherBuilder::new(get_state, dispatch).build(reducers)
}
