//! Table-driven state machine with undo/redo history.

use crate::builder::BuildError;
use crate::core::{EventIndex, History, MachineConfig, StateDefinition, Validation};
use crate::runtime::error::MachineError;
use indexmap::IndexMap;

/// A finite state machine driven by a declarative transition table.
///
/// The machine owns the table, a derived event index and a linear history.
/// The current state is always the history entry under the cursor.
///
/// No internal synchronization is provided. Wrap an instance in a lock
/// (e.g. `Arc<Mutex<StateMachine>>`) to share it between threads.
///
/// # Example
///
/// ```rust
/// use turnstile::machine_config;
/// use turnstile::runtime::StateMachine;
///
/// let config = machine_config! {
///     initial: "off",
///     states: {
///         "off" => { "flip" => "on" },
///         "on" => { "flip" => "off" },
///     }
/// };
///
/// let mut light = StateMachine::new(config).unwrap();
/// light.trigger("flip").unwrap();
/// assert_eq!(light.current_state(), "on");
///
/// assert!(light.undo());
/// assert_eq!(light.current_state(), "off");
/// assert!(light.redo());
/// assert_eq!(light.current_state(), "on");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    states: IndexMap<String, StateDefinition>,
    state_list: Vec<String>,
    events: EventIndex,
    history: History,
    validation: Validation,
}

impl StateMachine {
    /// Create a machine from a config, starting in `config.initial`.
    ///
    /// With [`Validation::Lazy`] this never fails and performs no checks; an
    /// unknown initial state or transition target goes unnoticed until the
    /// machine tries to leave it. With [`Validation::Strict`] the table is
    /// checked with [`MachineConfig::validate`] first.
    pub fn new(config: MachineConfig) -> Result<Self, BuildError> {
        if config.validation == Validation::Strict {
            config.validate()?;
        } else if !config.contains(&config.initial) {
            tracing::warn!(
                initial = %config.initial,
                "initial state is not in the transition table"
            );
        }

        let MachineConfig {
            initial,
            states,
            validation,
        } = config;

        let state_list: Vec<String> = states.keys().cloned().collect();
        let events = EventIndex::build(&states);

        tracing::debug!(
            states = state_list.len(),
            events = events.len(),
            ?validation,
            %initial,
            "state machine created"
        );

        Ok(Self {
            states,
            state_list,
            events,
            history: History::new(initial),
            validation,
        })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &str {
        self.history.current()
    }

    /// The state `reset` returns to.
    pub fn initial_state(&self) -> &str {
        self.history.initial()
    }

    /// Jump to `target`, bypassing event rules.
    ///
    /// Fails with [`MachineError::InvalidState`] if `target` is not a
    /// configured state, leaving state and history untouched. On success the
    /// jump is recorded in history and any redo tail is dropped.
    pub fn change_state(&mut self, target: impl AsRef<str>) -> Result<(), MachineError> {
        let target = target.as_ref();
        if !self.states.contains_key(target) {
            return Err(MachineError::InvalidState(target.to_string()));
        }

        tracing::debug!(
            from = %self.current_state(),
            to = %target,
            cursor = self.history.cursor() + 1,
            "state changed"
        );
        self.history.record(target);
        Ok(())
    }

    /// Follow the transition declared for `event` from the current state.
    ///
    /// Fails with [`MachineError::InvalidEvent`] if the current state has no
    /// such transition, including when the current state itself is unknown.
    /// A declared target that is not configured fails with
    /// [`MachineError::InvalidState`].
    pub fn trigger(&mut self, event: impl AsRef<str>) -> Result<(), MachineError> {
        let event = event.as_ref();
        let target = self
            .states
            .get(self.current_state())
            .and_then(|definition| definition.target(event))
            .ok_or_else(|| MachineError::InvalidEvent {
                state: self.current_state().to_string(),
                event: event.to_string(),
            })?
            .to_string();

        tracing::debug!(event, from = %self.current_state(), to = %target, "event fired");
        self.change_state(target)
    }

    /// Transition back to the first history entry.
    ///
    /// This records a new entry; it does not rewind the cursor.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        let initial = self.history.initial().to_string();
        self.change_state(initial)
    }

    /// All configured states, or only those handling `event`.
    ///
    /// Both lists are in table order. An unknown event yields an empty slice.
    pub fn states(&self, event: Option<&str>) -> &[String] {
        match event {
            None => &self.state_list,
            Some(event) => self.events.states_for(event),
        }
    }

    /// Every event declared anywhere in the table, first-seen order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.events()
    }

    /// Events the current state can handle, in declaration order.
    pub fn available_events(&self) -> impl Iterator<Item = &str> {
        self.states
            .get(self.current_state())
            .into_iter()
            .flat_map(|definition| definition.events())
    }

    /// Definition of a configured state.
    pub fn definition(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// Check if the current state has no way out via `trigger` (pure)
    pub fn is_final(&self) -> bool {
        self.states
            .get(self.current_state())
            .map_or(true, StateDefinition::is_terminal)
    }

    /// Move one step back in history. Returns `false` at the first entry.
    pub fn undo(&mut self) -> bool {
        match self.history.back() {
            Some(state) => {
                tracing::trace!(state, "undo");
                true
            }
            None => false,
        }
    }

    /// Move one step forward in history. Returns `false` at the last entry.
    pub fn redo(&mut self) -> bool {
        match self.history.forward() {
            Some(state) => {
                tracing::trace!(state, "redo");
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_forward()
    }

    /// Forget all history except the current state, which becomes entry 0.
    pub fn clear_history(&mut self) {
        tracing::trace!(
            state = %self.current_state(),
            dropped = self.history.len() - 1,
            "history cleared"
        );
        self.history.clear();
    }

    /// Get state history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }
}
