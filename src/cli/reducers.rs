//! Built-in reducers over object-shaped [`Value`] state.
//!
//! Arguments arrive positionally as `Vec<Value>`, mirroring a variadic
//! reducer signature. Every reducer shares untouched members with its input,
//! so no-op transitions are recognized by shallow comparison.

use thiserror::Error;

use crate::dispatch::{Reducer, ReducerMap};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectReducerError {
    #[error("'{action}' expects {expected} argument(s), got {actual}")]
    Arity {
        action: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("'{action}' expects {expected}, got {actual}")]
    Type {
        action: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

pub type ObjectReducers = ReducerMap<Value, Vec<Value>, ObjectReducerError>;

/// `set`, `remove`, `merge`, `clear` and `touch`.
pub fn object_reducers() -> ObjectReducers {
    ReducerMap::new()
        .with("set", Reducer::fallible(set))
        .with("remove", Reducer::fallible(remove))
        .with("merge", Reducer::fallible(merge))
        .with("clear", Reducer::fallible(clear))
        .with("touch", Reducer::fallible(touch))
}

fn set(state: Value, args: Vec<Value>) -> Result<Value, ObjectReducerError> {
    let [key, value] = take_args::<2>("set", args)?;
    Ok(state.with_member(key_of("set", &key)?, value))
}

fn remove(state: Value, args: Vec<Value>) -> Result<Value, ObjectReducerError> {
    let [key] = take_args::<1>("remove", args)?;
    Ok(state.without_member(&key_of("remove", &key)?))
}

fn merge(state: Value, args: Vec<Value>) -> Result<Value, ObjectReducerError> {
    let [patch] = take_args::<1>("merge", args)?;
    let patch = patch.as_object().ok_or(ObjectReducerError::Type {
        action: "merge",
        expected: "an object",
        actual: patch.kind(),
    })?;
    let base = state.as_object().into_iter().flatten();
    Ok(Value::object(
        base.chain(patch)
            .map(|(key, value)| (key.clone(), value.clone())),
    ))
}

fn clear(_state: Value, args: Vec<Value>) -> Result<Value, ObjectReducerError> {
    let [] = take_args::<0>("clear", args)?;
    Ok(Value::empty_object())
}

fn touch(state: Value, args: Vec<Value>) -> Result<Value, ObjectReducerError> {
    let [] = take_args::<0>("touch", args)?;
    Ok(state)
}

fn take_args<const N: usize>(
    action: &'static str,
    args: Vec<Value>,
) -> Result<[Value; N], ObjectReducerError> {
    <[Value; N]>::try_from(args).map_err(|args| ObjectReducerError::Arity {
        action,
        expected: N,
        actual: args.len(),
    })
}

fn key_of(action: &'static str, key: &Value) -> Result<String, ObjectReducerError> {
    key.as_str()
        .map(str::to_owned)
        .ok_or(ObjectReducerError::Type {
            action,
            expected: "a string key",
            actual: key.kind(),
        })
}
