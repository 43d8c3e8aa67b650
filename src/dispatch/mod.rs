//! Dispatcher Builder: reducer map in, action map out.
//!
//! ```
//! use reducer_dispatch::{build, Reducer, ReducerMap, Store};
//!
//! let store = Store::new(1_i64);
//! let reducers = ReducerMap::new()
//!     .with("increment", Reducer::new(|n: i64, ()| n + 1))
//!     .with("keep", Reducer::new(|n: i64, ()| n));
//! let dispatcher = build(store.source(), store.sink(), &reducers);
//!
//! assert!(dispatcher.action("increment").unwrap().call(()));
//! assert!(!dispatcher.action("keep").unwrap().call(()));
//! assert_eq!(store.get(), 2);
//! assert_eq!(store.commits(), 1);
//! ```

mod action;
mod binding;
mod map;
mod reducer;
mod typed;

pub use action::{Action, CommitPolicy};
pub use binding::{Binding, StateSink, StateSource};
pub use map::{build, Dispatcher, DispatcherBuilder, ReducerMap, UnknownAction};
pub use reducer::Reducer;
