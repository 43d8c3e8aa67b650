//! Command-line host for the `reducer-dispatch` binary.
//!
//! Holds a [`Value`] state in a [`Store`], builds a dispatcher over the
//! built-in object reducers and applies steps such as `set count 1`.

mod reducers;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::config::DispatchConfig;
use crate::dispatch::{Dispatcher, UnknownAction};
use crate::store::Store;
use crate::value::Value;

pub use reducers::{object_reducers, ObjectReducerError, ObjectReducers};

#[derive(Debug, Parser)]
#[command(
    name = "reducer-dispatch",
    version,
    about = "Apply named reducers to a JSON state, committing only real changes"
)]
pub struct Cli {
    /// Config file (default: ~/.config/reducer-dispatch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial state as JSON, overriding state.initial from the config
    #[arg(long, value_name = "JSON")]
    pub state: Option<String>,

    /// Commit every computed state, even when unchanged
    #[arg(long)]
    pub always_commit: bool,

    /// Steps to apply in order, e.g. "set count 1", "remove count", "touch"
    #[arg(value_name = "STEP", required = true)]
    pub steps: Vec<String>,
}

#[derive(Debug, Error)]
pub enum StepError {
    #[error("empty step")]
    Empty,

    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),

    #[error(transparent)]
    Reducer(#[from] ObjectReducerError),
}

/// One action name plus its positional arguments.
///
/// Parsed from whitespace-separated text. Each argument is read as JSON and
/// falls back to a plain string, so arguments cannot contain spaces.
#[derive(Debug, Clone)]
pub struct Step {
    pub action: String,
    pub args: Vec<Value>,
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let action = tokens.next().ok_or(StepError::Empty)?.to_string();
        let args = tokens
            .map(|token| token.parse::<Value>().unwrap_or_else(|_| Value::string(token)))
            .collect();
        Ok(Step { action, args })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// A store plus the dispatcher bound to it.
pub struct Session {
    store: Store<Value>,
    dispatcher: Dispatcher<Value, Vec<Value>, ObjectReducerError>,
}

impl Session {
    pub fn new(initial: Value, config: &DispatchConfig) -> Self {
        let store = Store::new(initial);
        let dispatcher = Dispatcher::builder(store.source(), store.sink())
            .config(config)
            .build(&object_reducers());
        Self { store, dispatcher }
    }

    /// Applies one step. Returns whether the state was committed.
    pub fn apply(&self, step: &Step) -> Result<bool, StepError> {
        let action = self.dispatcher.action(&step.action)?;
        let committed = action.try_call(step.args.clone())?;
        info!(action = action.key(), step = %step, committed, "step applied");
        Ok(committed)
    }

    pub fn state(&self) -> Value {
        self.store.get()
    }

    pub fn commits(&self) -> u64 {
        self.store.commits()
    }

    pub fn actions(&self) -> impl Iterator<Item = &str> + '_ {
        self.dispatcher.iter().map(|(_, action)| action.key())
    }
}
