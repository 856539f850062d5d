//! Chronological grouping of contributions.
//!
//! [`DateGroups`] partitions an event's live contributions into one bucket
//! per calendar day (each bucket ordered by start) plus an `undated` list for
//! contributions without a start. The structure borrows from the event and is
//! rebuilt for every report.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Contribution, Event};

/// One dated session: every contribution starting on `date`.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    /// 1-based position among dated sessions.
    pub number: usize,
    pub date: NaiveDate,
    /// Earliest start in the session.
    pub start: NaiveDateTime,
    /// Contributions ordered by start.
    pub contributions: &'a [&'a Contribution],
}

/// Contributions grouped by the calendar date of their start.
#[derive(Debug, Clone, Default)]
pub struct DateGroups<'a> {
    dated: BTreeMap<NaiveDate, Vec<&'a Contribution>>,
    undated: Vec<&'a Contribution>,
}

impl<'a> DateGroups<'a> {
    /// Groups the non-deleted contributions of `event`.
    ///
    /// Buckets are sorted with a stable sort, so contributions sharing a
    /// start keep their order in the event.
    pub fn from_event(event: &'a Event) -> Self {
        Self::from_contributions(event.active_contributions())
    }

    /// Groups an arbitrary sequence of contributions, skipping deleted ones.
    pub fn from_contributions(contributions: impl IntoIterator<Item = &'a Contribution>) -> Self {
        let mut groups = Self::default();

        for contribution in contributions.into_iter().filter(|c| !c.is_deleted) {
            match contribution.start {
                Some(start) => groups
                    .dated
                    .entry(start.date())
                    .or_default()
                    .push(contribution),
                None => groups.undated.push(contribution),
            }
        }

        for bucket in groups.dated.values_mut() {
            bucket.sort_by_key(|c| c.start);
        }

        groups
    }

    /// Iterates dated sessions in ascending date order.
    pub fn sessions(&self) -> impl Iterator<Item = Session<'_>> {
        self.dated
            .iter()
            .enumerate()
            .filter_map(|(index, (date, bucket))| {
                let start = bucket.first()?.start?;
                Some(Session {
                    number: index + 1,
                    date: *date,
                    start,
                    contributions: bucket.as_slice(),
                })
            })
    }

    /// Contributions without a start, in source order.
    pub fn undated(&self) -> &[&'a Contribution] {
        &self.undated
    }

    /// Number of dated sessions.
    pub fn session_count(&self) -> usize {
        self.dated.len()
    }

    /// Total number of grouped contributions.
    pub fn len(&self) -> usize {
        self.dated.values().map(Vec::len).sum::<usize>() + self.undated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dated.is_empty() && self.undated.is_empty()
    }
}
