//! Events loaded from a JSON export.
//!
//! The file holds either a single event object or an array of events, in
//! the shape of [`exportdocs_core::Event`]'s serde representation:
//!
//! ```json
//! [{"id": 1, "title": "Conf2024", "contributions": [
//!   {"id": 10, "title": "Alpha", "start": "2024-05-10T10:00:00",
//!    "person_links": [{"person": {"last_name": "Ivanov", "first_name": "I"}, "is_speaker": true}]}
//! ]}]
//! ```

use std::path::{Path, PathBuf};

use exportdocs_core::{Event, EventId};
use serde::Deserialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::{EventStore, MemoryStore};

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Event>),
    One(Event),
}

/// A read-only store backed by a JSON file, loaded once.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    events: MemoryStore,
}

impl JsonStore {
    /// Reads and decodes the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::io(format!("failed to read {}", path.display()))
                .with_store("json")
                .with_source(e)
        })?;

        let mut store = Self::from_str(&content)?;
        store.path = path.to_path_buf();
        debug!(path = %path.display(), events = store.events.len(), "Loaded event store");
        Ok(store)
    }

    /// Decodes events from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> StoreResult<Self> {
        let document: Document = serde_json::from_str(content).map_err(|e| {
            StoreError::invalid_data(format!("invalid event data: {}", e))
                .with_store("json")
                .with_source(e)
        })?;

        let events = match document {
            Document::Many(events) => events.into_iter().collect(),
            Document::One(event) => MemoryStore::new().with_event(event),
        };

        Ok(Self {
            path: PathBuf::new(),
            events,
        })
    }

    /// The file this store was loaded from (empty for in-memory JSON).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ids of all events in the file, ascending.
    pub fn ids(&self) -> Vec<EventId> {
        self.events.ids()
    }
}

impl EventStore for JsonStore {
    fn name(&self) -> &str {
        "json"
    }

    fn event(&self, id: EventId) -> StoreResult<Event> {
        self.events
            .event(id)
            .map_err(|_| StoreError::event_not_found(id).with_store(self.name()))
    }
}
