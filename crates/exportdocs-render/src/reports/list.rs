//! Contributions list: one table per session with a status column and an
//! empty column for the committee's decision.

use exportdocs_core::{StatusClassifier, display_title, short_name};

use crate::document::{Alignment, Document, Paragraph, Run, Table, TableCell, TableRow};
use crate::walker::{Entry, ReportLayout};

pub const TITLE: &str = "СПИСОК ДОКЛАДОВ";

pub const HEADERS: [&str; 4] = [
    "№",
    "Фамилия и инициалы докладчика, название доклада",
    "Статус (магистр / студент)",
    "Решение",
];

fn cell(text: impl Into<String>, alignment: Alignment) -> TableCell {
    TableCell::new(Paragraph::text(text).align(alignment)).centered_vertically()
}

fn header_row() -> TableRow {
    TableRow::new(
        HEADERS
            .iter()
            .map(|header| {
                TableCell::new(
                    Paragraph::new()
                        .align(Alignment::Center)
                        .add_run(Run::new(*header).bold()),
                )
                .centered_vertically()
            })
            .collect(),
    )
}

/// Layout for the contributions list. Row numbers restart in every table.
pub struct ListLayout<'c> {
    classifier: &'c dyn StatusClassifier,
}

impl<'c> ListLayout<'c> {
    pub fn new(classifier: &'c dyn StatusClassifier) -> Self {
        Self { classifier }
    }
}

impl ReportLayout for ListLayout<'_> {
    fn title(&self) -> &str {
        TITLE
    }

    fn write_section(&mut self, doc: &mut Document, entries: &[Entry<'_>]) {
        let mut table = Table::new();
        table.push_row(header_row());

        for (index, entry) in entries.iter().enumerate() {
            let speaker = short_name(entry.speaker);
            let title = display_title(entry.contribution.title.as_deref());
            let status = self
                .classifier
                .classify(entry.speaker.affiliation.as_deref());

            table.push_row(TableRow::new(vec![
                cell((index + 1).to_string(), Alignment::Center),
                cell(format!("{} {}", speaker, title), Alignment::Left),
                cell(status.label(), Alignment::Center),
                cell("", Alignment::Center),
            ]));
        }

        doc.add_table(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Block;
    use crate::style::StyleProfile;
    use crate::walker::render;
    use chrono::NaiveDate;
    use exportdocs_core::{Contribution, Event, KeywordClassifier, Person, PersonLink, Status};

    fn at(d: u32, h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn render_list(event: &Event) -> Document {
        let classifier = KeywordClassifier::default();
        let mut layout = ListLayout::new(&classifier);
        render(event, &mut layout, &StyleProfile::default())
    }

    fn table_lines(table: &Table) -> Vec<String> {
        table
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(TableCell::plain_text)
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect()
    }

    #[test]
    fn conf2024_rows_ordered_by_title() {
        let ivanov = Person::new("Ivanov", "I");
        let event = Event::new(1, "Conf2024")
            .with_contribution(
                Contribution::new(1, "Beta")
                    .with_start(at(10, 10, 0))
                    .with_speaker(ivanov.clone()),
            )
            .with_contribution(
                Contribution::new(2, "Alpha")
                    .with_start(at(10, 11, 0))
                    .with_speaker(ivanov),
            );

        let doc = render_list(&event);
        insta::assert_snapshot!(doc.to_plain_text().trim_end(), @r#"
        СПИСОК ДОКЛАДОВ
        "Conf2024"

        Заседание
        10 мая 2024 г.
        № | Фамилия и инициалы докладчика, название доклада | Статус (магистр / студент) | Решение
        1 | Ivanov I. Alpha | Не указан |
        2 | Ivanov I. Beta | Не указан |
        "#);
    }

    #[test]
    fn one_row_per_speaker_with_status() {
        let event = Event::new(1, "Conf").with_contribution(
            Contribution::new(1, "Доклад")
                .with_start(at(10, 9, 0))
                .with_speaker(Person::new("Петров", "Анна").with_affiliation("МГУ, 2 курс"))
                .with_person_link(PersonLink::non_speaker(Person::new("Руководитель", "Р")))
                .with_speaker(Person::new("Сидоров", "С").with_affiliation("Магистрант МФТИ")),
        );

        let doc = render_list(&event);
        let table = doc.tables().next().unwrap();
        assert_eq!(
            table_lines(table)[1..],
            [
                "1 | Петров А.н. Доклад | Студент | ".to_string(),
                "2 | Сидоров С. Доклад | Магистр | ".to_string(),
            ]
        );
    }

    #[test]
    fn numbering_restarts_per_table() {
        let speaker = Person::new("Ivanov", "I");
        let event = Event::new(1, "Conf")
            .with_contribution(
                Contribution::new(1, "Day one")
                    .with_start(at(10, 9, 0))
                    .with_speaker(speaker.clone()),
            )
            .with_contribution(
                Contribution::new(2, "Day two")
                    .with_start(at(11, 9, 0))
                    .with_speaker(speaker.clone()),
            )
            .with_contribution(Contribution::new(3, "Whenever").with_speaker(speaker));

        let doc = render_list(&event);
        let tables: Vec<_> = doc.tables().collect();
        assert_eq!(tables.len(), 3);
        for table in tables {
            assert_eq!(table.rows.len(), 2);
            assert!(table_lines(table)[1].starts_with("1 | "));
        }
    }

    #[test]
    fn contribution_without_speakers_yields_no_rows() {
        let event = Event::new(1, "Conf")
            .with_contribution(Contribution::new(1, "Silent"))
            .with_contribution(Contribution::new(2, "Also silent"));

        let doc = render_list(&event);
        let text = doc.to_plain_text();
        assert!(text.contains("Доклады без указанного времени"));

        let table = doc.tables().next().unwrap();
        assert_eq!(table.rows.len(), 1, "header row only");
    }

    #[test]
    fn untitled_contribution_sorts_first_and_uses_placeholder() {
        let speaker = Person::new("Ivanov", "I");
        let event = Event::new(1, "Conf")
            .with_contribution(Contribution::new(1, "Alpha").with_speaker(speaker.clone()))
            .with_contribution(Contribution::untitled(2).with_speaker(speaker));

        let doc = render_list(&event);
        let lines = table_lines(doc.tables().next().unwrap());
        assert_eq!(lines[1], "1 | Ivanov I. Без названия | Не указан | ");
        assert_eq!(lines[2], "2 | Ivanov I. Alpha | Не указан | ");
    }

    #[test]
    fn empty_title_uses_placeholder() {
        let mut contribution = Contribution::new(1, "").with_speaker(Person::new("Ivanov", "I"));
        contribution.title = Some(String::new());
        let event = Event::new(1, "Conf").with_contribution(contribution);

        let doc = render_list(&event);
        let row = &doc.tables().next().unwrap().rows[1];
        assert_eq!(row.cells[1].plain_text(), "Ivanov I. Без названия");
    }

    #[test]
    fn headers_are_bold_and_centered() {
        let event = Event::new(1, "Conf").with_contribution(Contribution::new(1, "x"));
        let doc = render_list(&event);
        let header = &doc.tables().next().unwrap().rows[0];
        for cell in &header.cells {
            let paragraph = &cell.paragraphs[0];
            assert_eq!(paragraph.alignment, Alignment::Center);
            assert!(paragraph.runs.iter().all(|r| r.bold));
        }
    }

    #[test]
    fn classifier_is_pluggable() {
        let speaker = Person::new("Ivanov", "I").with_affiliation("X");
        let event = Event::new(1, "Conf")
            .with_contribution(Contribution::new(1, "Talk").with_speaker(speaker));
        let everyone_is_master = |_: Option<&str>| Status::Master;
        let mut layout = ListLayout::new(&everyone_is_master);
        let doc = render(&event, &mut layout, &StyleProfile::default());

        let lines = table_lines(doc.tables().next().unwrap());
        assert_eq!(lines[1], "1 | Ivanov I. Talk | Магистр | ");
    }

    #[test]
    fn table_cells_are_styled() {
        let event = Event::new(1, "Conf")
            .with_contribution(Contribution::new(1, "Talk").with_speaker(Person::new("A", "B")));
        let doc = render_list(&event);
        let Some(Block::Table(table)) = doc.blocks.iter().find(|b| matches!(b, Block::Table(_)))
        else {
            panic!("expected a table");
        };
        let run = &table.rows[1].cells[1].paragraphs[0].runs[0];
        assert_eq!(run.font.as_deref(), Some("Times New Roman"));
        assert_eq!(run.color.as_deref(), Some("000000"));
    }
}
