//! Runtime errors raised by state machine operations.

use thiserror::Error;

/// Errors returned by validated state machine operations.
///
/// Navigation through history (`undo`/`redo`) never fails; it reports
/// boundaries with a `bool` instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The requested state is not part of the transition table
    #[error("Unknown state '{0}'")]
    InvalidState(String),

    /// The current state declares no transition for the event
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidEvent { state: String, event: String },
}
