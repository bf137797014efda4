//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDefinition, Validation};
use crate::runtime::StateMachine;
use indexmap::IndexMap;

/// Builder for constructing state machines with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDefinition>,
    validation: Validation,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring it again is a no-op.
    ///
    /// Only needed for states without outgoing transitions; `transition`
    /// declares its source state itself.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition from `from` to `to` on `event`.
    ///
    /// The target is not declared as a state; declare it with `state` or give
    /// it transitions of its own.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Set the validation mode (default: lazy).
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Produce the config without building a machine.
    /// Returns an error if required fields are missing.
    pub fn config(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
            validation: self.validation,
        })
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or strict validation fails.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        StateMachine::new(self.config()?)
    }
}
