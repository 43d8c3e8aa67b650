//! State accessor and state sink supplied by the host.

use std::fmt;
use std::sync::Arc;

/// Zero-argument accessor returning the state at call time.
///
/// Called on every action invocation; never memoized.
pub trait StateSource<S> {
    fn current(&self) -> S;
}

impl<S, F> StateSource<S> for F
where
    F: Fn() -> S,
{
    #[inline]
    fn current(&self) -> S {
        self()
    }
}

/// One-argument sink that commits a new state.
pub trait StateSink<S> {
    fn commit(&self, state: S);
}

impl<S, F> StateSink<S> for F
where
    F: Fn(S),
{
    #[inline]
    fn commit(&self, state: S) {
        self(state)
    }
}

/// A source and a sink, shared by every action of one dispatcher.
///
/// The binding never stores state itself; the host owns it.
pub struct Binding<S> {
    source: Box<dyn StateSource<S> + Send + Sync>,
    sink: Box<dyn StateSink<S> + Send + Sync>,
}

impl<S> Binding<S> {
    pub fn new<G, D>(get_state: G, dispatch: D) -> Self
    where
        G: StateSource<S> + Send + Sync + 'static,
        D: StateSink<S> + Send + Sync + 'static,
    {
        Self {
            source: Box::new(get_state),
            sink: Box::new(dispatch),
        }
    }

    /// Same as [`Binding::new`], already wrapped for sharing between actions.
    pub fn shared<G, D>(get_state: G, dispatch: D) -> Arc<Self>
    where
        G: StateSource<S> + Send + Sync + 'static,
        D: StateSink<S> + Send + Sync + 'static,
    {
        Arc::new(Self::new(get_state, dispatch))
    }

    #[inline]
    pub fn current(&self) -> S {
        self.source.current()
    }

    #[inline]
    pub fn commit(&self, state: S) {
        self.sink.commit(state)
    }
}

impl<S> fmt::Debug for Binding<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}
