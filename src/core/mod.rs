//! Core data model of the state machine.
//!
//! This module contains the construction-time and bookkeeping types:
//! - The declarative transition table (`MachineConfig`, `StateDefinition`)
//! - The derived event index
//! - The cursor-based history
//!
//! Nothing here validates transitions; that is the job of
//! [`StateMachine`](crate::runtime::StateMachine).

mod definition;
mod history;
mod index;

pub use definition::{MachineConfig, StateDefinition, Validation};
pub use history::{History, HistoryEntry};
pub use index::EventIndex;
