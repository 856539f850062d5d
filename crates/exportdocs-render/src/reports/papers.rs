//! Publications list: speakers of contributions whose paper was accepted.

use exportdocs_core::{Contribution, display_title, full_name};

use crate::document::{Document, Paragraph, Run};
use crate::walker::{Entry, ReportLayout};

pub const TITLE: &str = "СПИСОК ПУБЛИКАЦИЙ";

/// Written once when no contribution in the event has an accepted paper.
pub const NOTHING_ACCEPTED: &str = "Статьи, принятые к публикации, не найдены.";

/// First-line indent of an entry, in twips (1.25 cm).
const ENTRY_INDENT: u16 = 709;

#[derive(Debug, Default)]
pub struct PapersLayout {
    written: usize,
}

impl PapersLayout {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, entry: &Entry<'_>) -> Paragraph {
        let speaker = entry.speaker;
        let mut paragraph = Paragraph::new()
            .first_line_indent(ENTRY_INDENT)
            .add_run(Run::new(format!("{}. ", self.written)).bold())
            .add_run(Run::new(full_name(speaker)).bold());

        if let Some(affiliation) = speaker.affiliation.as_deref().filter(|a| !a.is_empty()) {
            paragraph = paragraph.add_run(Run::new(format!(", {}", affiliation)));
        }

        paragraph.add_run(
            Run::new(display_title(entry.contribution.title.as_deref())).on_new_line(),
        )
    }
}

impl ReportLayout for PapersLayout {
    fn title(&self) -> &str {
        TITLE
    }

    fn session_heading(&self, number: Option<usize>) -> String {
        match number {
            Some(n) => format!("Заседание {}.", n),
            None => "Заседание.".to_string(),
        }
    }

    fn is_eligible(&self, contribution: &Contribution) -> bool {
        contribution.has_accepted_paper() && contribution.has_speakers()
    }

    fn write_section(&mut self, doc: &mut Document, entries: &[Entry<'_>]) {
        for entry in entries {
            self.written += 1;
            doc.add_paragraph(self.entry(entry));
        }
    }

    fn finish(&mut self, doc: &mut Document) {
        if self.written == 0 {
            doc.add_paragraph(Paragraph::new().add_run(Run::new(NOTHING_ACCEPTED).italic()));
        }
    }
}
