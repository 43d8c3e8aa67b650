//! Shallow equality used to decide whether a reducer result is worth committing.
//!
//! Two layers:
//!
//! - [`Identity`]: how a single *member* of a state compares (by value for
//!   primitives, by address for shared pointers)
//! - [`ShallowEq`]: how a whole *state* compares (same shape, same member
//!   keys, members pairwise identical)
//!
//! Members of members are never descended into. A reducer that rebuilds the
//! outer shell but keeps every member identical is treated as a no-op, even if
//! something behind one of those members was changed in place.

mod identity;
mod shallow;

pub use identity::Identity;
pub use shallow::{shallow_equal, ShallowEq};
