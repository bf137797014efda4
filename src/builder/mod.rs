//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and macros for creating state
//! machines with minimal boilerplate, as an alternative to writing a
//! [`MachineConfig`](crate::core::MachineConfig) by hand or loading one
//! from JSON.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::runtime::StateMachine;

/// Create a two-state toggle that flips between `a` and `b` on `event`.
///
/// # Example
///
/// ```
/// use turnstile::builder::toggle;
///
/// let mut switch = toggle("off", "on", "flip").unwrap();
/// switch.trigger("flip").unwrap();
/// assert_eq!(switch.current_state(), "on");
/// ```
pub fn toggle(
    a: impl Into<String>,
    b: impl Into<String>,
    event: impl Into<String>,
) -> Result<StateMachine, BuildError> {
    let (a, b, event) = (a.into(), b.into(), event.into());
    StateMachineBuilder::new()
        .initial(a.clone())
        .transition(a.clone(), event.clone(), b.clone())
        .transition(b, event, a)
        .build()
}

/// Create a machine that walks `steps` in order on `event`.
///
/// The last step has no outgoing transition. Fails with
/// [`BuildError::MissingInitialState`] when `steps` is empty.
///
/// # Example
///
/// ```
/// use turnstile::builder::sequence;
///
/// let mut wizard = sequence(["intro", "details", "confirm"], "next").unwrap();
/// wizard.trigger("next").unwrap();
/// wizard.trigger("next").unwrap();
/// assert_eq!(wizard.current_state(), "confirm");
/// assert!(wizard.is_final());
/// ```
pub fn sequence<I, S>(steps: I, event: impl Into<String>) -> Result<StateMachine, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let event = event.into();
    let steps: Vec<String> = steps.into_iter().map(Into::into).collect();

    let mut builder = StateMachineBuilder::new();
    if let Some(first) = steps.first() {
        builder = builder.initial(first.clone());
    }
    for pair in steps.windows(2) {
        builder = builder.transition(pair[0].clone(), event.clone(), pair[1].clone());
    }
    if let Some(last) = steps.last() {
        builder = builder.state(last.clone());
    }

    builder.build()
}
