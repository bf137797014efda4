//! Turnstile: a minimal table-driven finite state machine
//!
//! A machine is described by a declarative table mapping each state to the
//! events it handles and the state each event leads to. The machine tracks the
//! current state, validates transitions against the table, and keeps a linear
//! history that supports undo and redo.
//!
//! # Core Concepts
//!
//! - **Config**: The transition table (`MachineConfig`), written by hand, with
//!   the `machine_config!` macro, via `StateMachineBuilder`, or loaded from JSON
//! - **StateMachine**: Validated transitions (`trigger`, `change_state`) plus
//!   history navigation (`undo`, `redo`, `reset`, `clear_history`)
//! - **History**: Every committed state with a cursor; entries after the
//!   cursor are the redo tail and are dropped by the next transition
//!
//! # Example
//!
//! ```rust
//! use turnstile::{MachineConfig, StateDefinition, StateMachine};
//!
//! let config = MachineConfig::new("off")
//!     .with_state("off", StateDefinition::new().on("flip", "on"))
//!     .with_state("on", StateDefinition::new().on("flip", "off"));
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! assert_eq!(machine.current_state(), "off");
//!
//! machine.trigger("flip").unwrap();
//! machine.trigger("flip").unwrap();
//! assert_eq!(machine.current_state(), "off");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "on");
//!
//! machine.reset().unwrap();
//! assert_eq!(machine.current_state(), "off");
//! assert!(!machine.redo());
//! ```
//!
//! # Logging
//!
//! Construction and transitions emit [`tracing`] events at `debug` level and
//! history navigation at `trace` level. The library never installs a
//! subscriber.

pub mod builder;
pub mod core;
pub mod runtime;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{History, MachineConfig, StateDefinition, Validation};
pub use runtime::{MachineError, StateMachine};
