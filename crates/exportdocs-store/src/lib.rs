//! EventStore trait and implementations.
//!
//! The upstream data store is read-only from the exporter's point of view:
//!
//! - [`EventStore`] - The trait every backend implements
//! - [`MemoryStore`] - Events held in memory (tests, embedding)
//! - [`JsonStore`] - Events loaded from a JSON export file
//! - [`StoreError`] - Error types for store lookups
//!
//! # Example
//!
//! ```ignore
//! use exportdocs_store::{EventStore, JsonStore};
//!
//! let store = JsonStore::load("events.json")?;
//! let event = store.event(42)?;
//! ```

pub mod error;
pub mod json;
pub mod store;

pub use error::{StoreError, StoreErrorCode, StoreResult};
pub use json::JsonStore;
pub use store::{EventStore, MemoryStore};
