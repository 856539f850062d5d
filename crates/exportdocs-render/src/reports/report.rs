//! Conference report: numbered speaker/title paragraphs per session.

use exportdocs_core::{Session, display_title, format_datetime, short_name};

use crate::document::{Document, Paragraph, Run};
use crate::walker::{Entry, ReportLayout};

pub const TITLE: &str = "ОТЧЕТ О ПРОВЕДЕНИИ КОНФЕРЕНЦИИ";

/// Layout for the conference report.
///
/// Numbering runs through the whole document. Session dates include the
/// start time of the session's first contribution.
#[derive(Debug, Default)]
pub struct ConferenceReportLayout {
    written: usize,
}

impl ConferenceReportLayout {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportLayout for ConferenceReportLayout {
    fn title(&self) -> &str {
        TITLE
    }

    fn date_line(&self, session: &Session<'_>) -> String {
        format_datetime(session.start, true)
    }

    fn write_section(&mut self, doc: &mut Document, entries: &[Entry<'_>]) {
        for entry in entries {
            self.written += 1;
            let title = display_title(entry.contribution.title.as_deref());
            doc.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new(format!("{}. ", self.written)).bold())
                    .add_run(Run::new(short_name(entry.speaker)).bold())
                    .add_run(Run::new(format!(" {}", title))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProfile;
    use crate::walker::render;
    use chrono::{NaiveDate, NaiveDateTime};
    use exportdocs_core::{Contribution, Event, Person};

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn render_report(event: &Event) -> Document {
        render(event, &mut ConferenceReportLayout::new(), &StyleProfile::default())
    }

    fn sample_event() -> Event {
        Event::new(1, "Весенняя школа")
            .with_contribution(
                Contribution::new(1, "Оптика")
                    .with_start(at(10, 14, 0))
                    .with_speaker(Person::new("Смирнова", "Ольга")),
            )
            .with_contribution(
                Contribution::new(2, "Механика")
                    .with_start(at(10, 9, 30))
                    .with_speaker(Person::new("Кузнецов", "К")),
            )
            .with_contribution(
                Contribution::new(3, "Акустика")
                    .with_start(at(11, 10, 0))
                    .with_speaker(Person::new("Попов", "Павел")),
            )
            .with_contribution(Contribution::new(4, "Без докладчика").with_start(at(11, 12, 0)))
            .with_contribution(Contribution::untitled(5).with_speaker(Person::new("Волков", "В")))
    }

    #[test]
    fn numbering_continues_across_sessions() {
        let doc = render_report(&sample_event());
        insta::assert_snapshot!(doc.to_plain_text().trim_end(), @r#"
        ОТЧЕТ О ПРОВЕДЕНИИ КОНФЕРЕНЦИИ
        "Весенняя школа"

        Заседание 1
        10 мая 2024 г., 09-30
        1. Кузнецов К. Механика
        2. Смирнова О.л. Оптика

        Заседание 2
        11 мая 2024 г., 10-00
        3. Попов П.а. Акустика

        Доклады без указанного времени
        4. Волков В. Без названия
        "#);
    }

    #[test]
    fn number_and_name_are_bold() {
        let doc = render_report(&sample_event());
        let entry = doc
            .paragraphs()
            .find(|p| p.plain_text().starts_with("1. "))
            .unwrap();

        assert_eq!(entry.runs.len(), 3);
        assert!(entry.runs[0].bold);
        assert!(entry.runs[1].bold);
        assert!(!entry.runs[2].bold);
    }
}
