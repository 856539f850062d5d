//! Shared report skeleton.
//!
//! Every report has the same shape: a title, the quoted event name, then one
//! section per session date and a final section for contributions without a
//! start. [`render`] walks that structure once; a [`ReportLayout`] supplies
//! the labels, decides which contributions qualify and writes each
//! section's body.

use exportdocs_core::{Contribution, DateGroups, Event, Person, Session, format_date};
use tracing::debug;

use crate::document::{Alignment, Document, Paragraph, ParagraphKind, Run};
use crate::style::StyleProfile;

/// Heading of the section collecting contributions without a start.
pub const UNDATED_HEADING: &str = "Доклады без указанного времени";

const SESSION_LABEL: &str = "Заседание";

/// One rendered line: a contribution paired with one of its speakers.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub contribution: &'a Contribution,
    pub speaker: &'a Person,
}

/// Per-report hooks for [`render`].
pub trait ReportLayout {
    /// Document title, e.g. `СПИСОК ДОКЛАДОВ`.
    fn title(&self) -> &str;

    /// Session heading; `number` is `None` when the event has a single
    /// dated session.
    fn session_heading(&self, number: Option<usize>) -> String {
        match number {
            Some(n) => format!("{} {}", SESSION_LABEL, n),
            None => SESSION_LABEL.to_string(),
        }
    }

    /// Line written under the session heading.
    fn date_line(&self, session: &Session<'_>) -> String {
        format_date(session.date)
    }

    /// Whether a contribution contributes entries to this report.
    fn is_eligible(&self, contribution: &Contribution) -> bool {
        contribution.has_speakers()
    }

    /// Writes the body of one section. `entries` may be empty.
    fn write_section(&mut self, doc: &mut Document, entries: &[Entry<'_>]);

    /// Called once after the last section, before styling.
    fn finish(&mut self, _doc: &mut Document) {}
}

/// Orders a section by lowercase title and expands speakers.
///
/// The sort is stable: equal titles keep their chronological order.
/// Contributions failing `is_eligible` are dropped.
pub fn section_entries<'a>(
    contributions: &[&'a Contribution],
    is_eligible: impl Fn(&Contribution) -> bool,
) -> Vec<Entry<'a>> {
    let mut ordered = contributions.to_vec();
    ordered.sort_by_key(|c| c.sort_key());

    ordered
        .into_iter()
        .filter(|c| is_eligible(c))
        .flat_map(|contribution| {
            contribution.speakers().map(move |speaker| Entry {
                contribution,
                speaker,
            })
        })
        .collect()
}

fn write_event_header(doc: &mut Document, title: &str, event: &Event) {
    doc.add_heading(ParagraphKind::Title, title, Alignment::Center);
    doc.add_paragraph(
        Paragraph::new()
            .align(Alignment::Center)
            .add_run(Run::new(format!("\"{}\"", event.title)).bold()),
    );
    doc.add_blank();
}

/// Renders `event` with `layout` and applies `profile`.
pub fn render<L: ReportLayout + ?Sized>(
    event: &Event,
    layout: &mut L,
    profile: &StyleProfile,
) -> Document {
    let mut doc = Document::new(profile);
    write_event_header(&mut doc, layout.title(), event);

    let groups = DateGroups::from_event(event);
    let numbered = groups.session_count() > 1;

    for session in groups.sessions() {
        let heading = layout.session_heading(numbered.then_some(session.number));
        doc.add_heading(ParagraphKind::Heading, heading, Alignment::Left);
        doc.add_paragraph(Paragraph::text(layout.date_line(&session)).align(Alignment::Left));

        let entries = section_entries(session.contributions, |c| layout.is_eligible(c));
        debug!(
            session = session.number,
            date = %session.date,
            contributions = session.contributions.len(),
            entries = entries.len(),
            "Writing session"
        );
        layout.write_section(&mut doc, &entries);
        doc.add_blank();
    }

    if !groups.undated().is_empty() {
        doc.add_heading(ParagraphKind::Heading, UNDATED_HEADING, Alignment::Left);
        let entries = section_entries(groups.undated(), |c| layout.is_eligible(c));
        debug!(
            contributions = groups.undated().len(),
            entries = entries.len(),
            "Writing contributions without time"
        );
        layout.write_section(&mut doc, &entries);
    }

    layout.finish(&mut doc);
    profile.finalize(&mut doc);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use exportdocs_core::PersonLink;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    /// Writes one paragraph per entry with the speaker's last name.
    struct Names {
        sections: usize,
        finished: bool,
    }

    impl ReportLayout for Names {
        fn title(&self) -> &str {
            "NAMES"
        }

        fn write_section(&mut self, doc: &mut Document, entries: &[Entry<'_>]) {
            self.sections += 1;
            for entry in entries {
                doc.add_paragraph(Paragraph::text(entry.speaker.last_name.clone()));
            }
        }

        fn finish(&mut self, _doc: &mut Document) {
            self.finished = true;
        }
    }

    fn speaker(last: &str) -> Person {
        Person::new(last, "X")
    }

    #[test]
    fn entries_sorted_by_title_and_expanded_per_speaker() {
        let beta = Contribution::new(1, "beta")
            .with_speaker(speaker("B1"))
            .with_person_link(PersonLink::non_speaker(speaker("Coauthor")))
            .with_speaker(speaker("B2"));
        let alpha = Contribution::new(2, "Alpha").with_speaker(speaker("A"));
        let untitled = Contribution::untitled(3).with_speaker(speaker("U"));
        let silent = Contribution::new(4, "Aardvark");

        let entries = section_entries(&[&beta, &alpha, &untitled, &silent], |c| c.has_speakers());
        let names: Vec<_> = entries.iter().map(|e| e.speaker.last_name.as_str()).collect();
        assert_eq!(names, vec!["U", "A", "B1", "B2"]);
    }

    #[test]
    fn equal_titles_keep_input_order() {
        let first = Contribution::new(1, "Same").with_speaker(speaker("First"));
        let second = Contribution::new(2, "same").with_speaker(speaker("Second"));

        let entries = section_entries(&[&first, &second], |_| true);
        let ids: Vec<_> = entries.iter().map(|e| e.contribution.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn single_session_heading_is_unnumbered() {
        let event = Event::new(1, "Conf")
            .with_contribution(
                Contribution::new(1, "A")
                    .with_start(at(10, 9))
                    .with_speaker(speaker("S")),
            );
        let mut layout = Names {
            sections: 0,
            finished: false,
        };
        let doc = render(&event, &mut layout, &StyleProfile::default());

        assert_eq!(
            doc.to_plain_text(),
            "NAMES\n\"Conf\"\n\nЗаседание\n10 мая 2024 г.\nS\n"
        );
        assert_eq!(layout.sections, 1);
        assert!(layout.finished);
    }

    #[test]
    fn several_sessions_are_numbered_and_undated_comes_last() {
        let event = Event::new(1, "Conf")
            .with_contribution(
                Contribution::new(1, "late")
                    .with_start(at(11, 9))
                    .with_speaker(speaker("L")),
            )
            .with_contribution(Contribution::new(2, "loose").with_speaker(speaker("N")))
            .with_contribution(
                Contribution::new(3, "early")
                    .with_start(at(10, 9))
                    .with_speaker(speaker("E")),
            );
        let mut layout = Names {
            sections: 0,
            finished: false,
        };
        let doc = render(&event, &mut layout, &StyleProfile::default());

        assert_eq!(
            doc.to_plain_text(),
            "NAMES\n\"Conf\"\n\n\
             Заседание 1\n10 мая 2024 г.\nE\n\n\
             Заседание 2\n11 мая 2024 г.\nL\n\n\
             Доклады без указанного времени\nN"
        );
        assert_eq!(layout.sections, 3);
    }

    #[test]
    fn output_is_styled() {
        let event = Event::new(1, "Conf");
        let mut layout = Names {
            sections: 0,
            finished: false,
        };
        let doc = render(&event, &mut layout, &StyleProfile::default());
        assert!(
            doc.paragraphs()
                .all(|p| p.line_spacing == Some(360) && p.runs.iter().all(|r| r.size == Some(28)))
        );
    }
}
