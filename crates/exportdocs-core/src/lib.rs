//! Core types: events, contributions, date grouping, name and status formatting

pub mod event;
pub mod grouping;
pub mod names;
pub mod status;
pub mod time;
pub mod tracing;

pub use event::{Contribution, Event, EventId, PaperRevision, Person, PersonLink, RevisionState};
pub use grouping::{DateGroups, Session};
pub use names::{UNTITLED, display_title, full_name, short_name};
pub use status::{KeywordClassifier, Status, StatusClassifier, classify_status};
pub use time::{format_date, format_datetime, month_genitive};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
