//! Build errors for machine configs and the machine builder.

use thiserror::Error;

/// Errors that can occur when constructing a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state or transition")]
    NoStates,

    #[error("Initial state '{0}' is not defined in the transition table")]
    UnknownInitialState(String),

    #[error("Transition '{event}' from '{state}' targets undefined state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Invalid machine config: {0}")]
    InvalidConfig(String),
}
