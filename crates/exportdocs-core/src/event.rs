//! Event types for conference scheduling data.
//!
//! This module provides the read-only records the report engine consumes:
//! - [`Event`]: A conference with its contributions
//! - [`Contribution`]: A scheduled talk, optionally timed and optionally published
//! - [`PersonLink`]: A person attached to a contribution, with a speaker flag
//! - [`Person`]: Name parts and a free-text affiliation
//! - [`PaperRevision`]: The reviewed article attached to a contribution

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier of an event in the upstream store.
pub type EventId = u64;

/// Review state of a submitted paper revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionState {
    /// Submitted and waiting for review.
    #[default]
    Submitted,
    /// Reviewers asked for corrections.
    ToBeCorrected,
    /// Accepted for publication.
    Accepted,
    /// Rejected.
    Rejected,
}

/// The latest reviewed revision of a contribution's paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRevision {
    pub state: RevisionState,
}

impl PaperRevision {
    /// Creates a revision in the given state.
    pub fn new(state: RevisionState) -> Self {
        Self { state }
    }

    /// Creates an accepted revision.
    pub fn accepted() -> Self {
        Self::new(RevisionState::Accepted)
    }

    pub fn is_accepted(&self) -> bool {
        self.state == RevisionState::Accepted
    }
}

/// A person as recorded by the upstream store.
///
/// There is no structured role or degree; the affiliation is free text and
/// status is inferred from it (see [`crate::status`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub last_name: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl Person {
    /// Creates a person with first and last name.
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: None,
            affiliation: None,
        }
    }

    /// Builder method to set the middle name.
    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = Some(middle_name.into());
        self
    }

    /// Builder method to set the affiliation.
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }
}

/// Association between a contribution and a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonLink {
    pub person: Person,
    /// Whether the person presents the contribution.
    #[serde(default)]
    pub is_speaker: bool,
}

impl PersonLink {
    /// Creates a speaker link.
    pub fn speaker(person: Person) -> Self {
        Self {
            person,
            is_speaker: true,
        }
    }

    /// Creates a non-speaking link (co-author, chair, ...).
    pub fn non_speaker(person: Person) -> Self {
        Self {
            person,
            is_speaker: false,
        }
    }
}

/// A scheduled talk belonging to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Soft-deletion flag. Deleted contributions never reach a report.
    #[serde(default)]
    pub is_deleted: bool,
    /// Start as stored upstream, in local wall time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(default)]
    pub person_links: Vec<PersonLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_revision: Option<PaperRevision>,
}

impl Contribution {
    /// Creates an untimed contribution with the given title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Creates an untimed contribution without a title.
    pub fn untitled(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Builder method to set the start instant.
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Builder method to add a speaker.
    pub fn with_speaker(mut self, person: Person) -> Self {
        self.person_links.push(PersonLink::speaker(person));
        self
    }

    /// Builder method to add a person link.
    pub fn with_person_link(mut self, link: PersonLink) -> Self {
        self.person_links.push(link);
        self
    }

    /// Builder method to attach a paper revision.
    pub fn with_revision(mut self, revision: PaperRevision) -> Self {
        self.accepted_revision = Some(revision);
        self
    }

    /// Builder method to mark as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    /// Returns the people linked with the speaker role, in link order.
    pub fn speakers(&self) -> impl Iterator<Item = &Person> {
        self.person_links
            .iter()
            .filter(|link| link.is_speaker)
            .map(|link| &link.person)
    }

    pub fn has_speakers(&self) -> bool {
        self.person_links.iter().any(|link| link.is_speaker)
    }

    /// Returns true if the attached paper revision has been accepted.
    pub fn has_accepted_paper(&self) -> bool {
        self.accepted_revision
            .is_some_and(|revision| revision.is_accepted())
    }

    /// Lowercased title used to order contributions inside a session.
    ///
    /// Untitled contributions get an empty key and sort first.
    pub fn sort_key(&self) -> String {
        self.title
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

/// A conference event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

impl Event {
    /// Creates an event without contributions.
    pub fn new(id: EventId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            contributions: Vec::new(),
        }
    }

    /// Builder method to add a contribution.
    pub fn with_contribution(mut self, contribution: Contribution) -> Self {
        self.contributions.push(contribution);
        self
    }

    /// Returns contributions that are not soft-deleted, in source order.
    pub fn active_contributions(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions.iter().filter(|c| !c.is_deleted)
    }
}
