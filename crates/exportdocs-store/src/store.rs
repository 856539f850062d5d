//! EventStore trait definition.
//!
//! The report engine never writes to the store; it only looks up one event
//! by id per generated document.

use std::collections::HashMap;

use exportdocs_core::{Event, EventId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Read-only access to events and their contributions.
///
/// Implementations must be safe for concurrent reads; report generation
/// takes `&self` and keeps no state between calls.
pub trait EventStore: Send + Sync {
    /// A short name for logs and error messages.
    fn name(&self) -> &str;

    /// Loads an event with all its contributions.
    ///
    /// Returns a [`StoreErrorCode::NotFound`](crate::StoreErrorCode::NotFound)
    /// error when the id does not resolve.
    fn event(&self, id: EventId) -> StoreResult<Event>;
}

impl<S: EventStore + ?Sized> EventStore for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn event(&self, id: EventId) -> StoreResult<Event> {
        (**self).event(id)
    }
}

/// Events kept in a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    events: HashMap<EventId, Event>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an event, keyed by its id.
    pub fn insert(&mut self, event: Event) -> Option<Event> {
        self.events.insert(event.id, event)
    }

    /// Builder method to add an event.
    pub fn with_event(mut self, event: Event) -> Self {
        self.insert(event);
        self
    }

    /// Returns the stored ids in ascending order.
    pub fn ids(&self) -> Vec<EventId> {
        let mut ids: Vec<_> = self.events.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Event> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut store = Self::new();
        for event in iter {
            store.insert(event);
        }
        store
    }
}

impl EventStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn event(&self, id: EventId) -> StoreResult<Event> {
        debug!(event_id = id, "Looking up event");
        self.events
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::event_not_found(id).with_store(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exportdocs_core::Contribution;

    #[test]
    fn returns_stored_event() {
        let store = MemoryStore::new().with_event(
            Event::new(1, "Conf2024").with_contribution(Contribution::new(10, "Alpha")),
        );

        let event = store.event(1).unwrap();
        assert_eq!(event.title, "Conf2024");
        assert_eq!(event.contributions.len(), 1);
    }

    #[test]
    fn missing_event_is_not_found() {
        let store = MemoryStore::new();
        let err = store.event(99).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.store(), Some("memory"));
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut store = MemoryStore::new();
        assert!(store.insert(Event::new(1, "Old")).is_none());
        let previous = store.insert(Event::new(1, "New")).unwrap();
        assert_eq!(previous.title, "Old");
        assert_eq!(store.len(), 1);
        assert_eq!(store.event(1).unwrap().title, "New");
    }

    #[test]
    fn collects_from_iterator() {
        let store: MemoryStore = [Event::new(3, "C"), Event::new(1, "A")]
            .into_iter()
            .collect();
        assert_eq!(store.ids(), vec![1, 3]);
        assert!(!store.is_empty());
    }

    #[test]
    fn references_are_stores() {
        fn title_of(store: impl EventStore, id: EventId) -> String {
            store.event(id).unwrap().title
        }

        let store = MemoryStore::new().with_event(Event::new(5, "Borrowed"));
        assert_eq!(title_of(&store, 5), "Borrowed");
        assert_eq!((&store).name(), "memory");
    }
}
