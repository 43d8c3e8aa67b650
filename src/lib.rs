//! Turn a map of pure reducers into a map of callable actions.
//!
//! ```text
//! getState ──→ Reducer ──→ ShallowEq ──→ dispatch
//!    ↑                        │ (equal: skip)
//!    └────────────────────────┘
//! ```
//!
//! - **Reducer**: pure `(state, args) -> state` transition
//! - **Dispatcher**: sibling map of actions, one per reducer key
//! - **ShallowEq**: one-level comparison deciding whether a commit is needed

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod equality;
pub mod logging;
pub mod store;
pub mod value;

pub use dispatch::{
    build, Action, Binding, CommitPolicy, Dispatcher, DispatcherBuilder, Reducer, ReducerMap,
    StateSink, StateSource, UnknownAction,
};
pub use equality::{shallow_equal, Identity, ShallowEq};
pub use store::Store;
pub use value::Value;
