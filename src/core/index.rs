//! Reverse lookup from event name to the states that handle it.

use super::definition::StateDefinition;
use indexmap::IndexMap;

/// Event name -> states declaring a transition for it.
///
/// Built once from the transition table. Events appear in the order they are
/// first seen, and each bucket lists states in table order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventIndex {
    buckets: IndexMap<String, Vec<String>>,
}

impl EventIndex {
    /// Scan every state's transitions and bucket the state under each event.
    pub fn build(states: &IndexMap<String, StateDefinition>) -> Self {
        let mut buckets: IndexMap<String, Vec<String>> = IndexMap::new();

        for (state, definition) in states {
            for event in definition.transitions.keys() {
                buckets
                    .entry(event.clone())
                    .or_default()
                    .push(state.clone());
            }
        }

        Self { buckets }
    }

    /// States handling `event`, empty if no state does.
    pub fn states_for(&self, event: &str) -> &[String] {
        self.buckets.get(event).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All known event names.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> IndexMap<String, StateDefinition> {
        let mut states = IndexMap::new();
        states.insert(
            "draft".to_string(),
            StateDefinition::new().on("submit", "review"),
        );
        states.insert(
            "review".to_string(),
            StateDefinition::new()
                .on("approve", "published")
                .on("reject", "draft"),
        );
        states.insert(
            "published".to_string(),
            StateDefinition::new().on("reject", "draft"),
        );
        states.insert("archived".to_string(), StateDefinition::new());
        states
    }

    #[test]
    fn buckets_states_by_event() {
        let index = EventIndex::build(&table());

        assert_eq!(index.states_for("submit"), ["draft"]);
        assert_eq!(index.states_for("approve"), ["review"]);
        assert_eq!(index.states_for("reject"), ["review", "published"]);
    }

    #[test]
    fn unknown_event_is_empty() {
        let index = EventIndex::build(&table());

        assert!(index.states_for("teleport").is_empty());
    }

    #[test]
    fn events_in_first_seen_order() {
        let index = EventIndex::build(&table());

        assert_eq!(
            index.events().collect::<Vec<_>>(),
            vec!["submit", "approve", "reject"]
        );
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn empty_table_has_empty_index() {
        let index = EventIndex::build(&IndexMap::new());

        assert!(index.is_empty());
        assert_eq!(index.events().count(), 0);
    }
}
