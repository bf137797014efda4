//! The running state machine.
//!
//! [`StateMachine`] owns the transition table and history built from a
//! [`MachineConfig`](crate::core::MachineConfig) and exposes:
//!
//! - **Validated transitions**: `trigger` (by event) and `change_state` (by
//!   target), both failing with [`MachineError`]
//! - **History navigation**: `undo`, `redo`, `reset` and `clear_history`
//! - **Introspection**: `current_state`, `states`, `events`
//!
//! All operations are synchronous. The machine has no internal locking.

mod error;
mod machine;

pub use error::MachineError;
pub use machine::StateMachine;
