use serde::{Deserialize, Serialize};

use crate::dispatch::CommitPolicy;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub state: StateConfig,
}

/// How dispatchers built from this config commit state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// "on_change" (default) or "always".
    #[serde(default)]
    pub commit: CommitPolicy,
}

/// Initial state for the `reducer-dispatch` binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    /// JSON document used as the initial state (default: `{}`).
    #[serde(default)]
    pub initial: Option<String>,
}
