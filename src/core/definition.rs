//! Declarative transition table supplied at construction.
//!
//! A [`MachineConfig`] names the initial state and maps every state to its
//! [`StateDefinition`]. Both maps keep insertion order, so the order states
//! and events appear in a config document is the order the machine reports
//! them in.

use crate::builder::BuildError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Outgoing transitions of a single state, keyed by event name.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateDefinition;
///
/// let door = StateDefinition::new()
///     .on("open", "opened")
///     .on("lock", "locked");
///
/// assert_eq!(door.target("open"), Some("opened"));
/// assert_eq!(door.target("kick"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name -> target state
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition for `event`, returning the updated definition.
    ///
    /// Redefining an event replaces its target but keeps its original position.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if one is declared.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Event names declared by this state, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }

    /// A state without outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// When unknown state identifiers in a config are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Accept the table as given. An unknown initial state or transition
    /// target is only noticed when the machine tries to leave it.
    #[default]
    Lazy,

    /// Reject unknown initial states and transition targets at construction.
    Strict,
}

/// Construction input for a [`StateMachine`](crate::runtime::StateMachine).
///
/// # Example
///
/// ```rust
/// use turnstile::core::{MachineConfig, Validation};
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "off",
///         "states": {
///             "off": { "transitions": { "flip": "on" } },
///             "on":  { "transitions": { "flip": "off" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.validation, Validation::Lazy);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in
    pub initial: String,

    /// State identifier -> definition, in construction order
    pub states: IndexMap<String, StateDefinition>,

    /// How eagerly unknown identifiers are rejected
    #[serde(default)]
    pub validation: Validation,
}

impl MachineConfig {
    /// Create a config with an empty table.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
            validation: Validation::default(),
        }
    }

    /// Add or replace a state definition.
    pub fn with_state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Set the validation mode.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    /// Serialize the config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    /// Check that the initial state and every transition target are
    /// configured states.
    ///
    /// Reports the first problem found, scanning states and their events in
    /// table order. Runs regardless of [`MachineConfig::validation`].
    pub fn validate(&self) -> Result<(), BuildError> {
        if !self.states.contains_key(&self.initial) {
            return Err(BuildError::UnknownInitialState(self.initial.clone()));
        }

        for (state, definition) in &self.states {
            for (event, target) in &definition.transitions {
                if !self.states.contains_key(target) {
                    return Err(BuildError::UnknownTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Whether `state` is a key of the table.
    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }
}
