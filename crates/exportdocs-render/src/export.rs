//! Export entry points.

use std::fmt;
use std::str::FromStr;

use exportdocs_core::{EventId, KeywordClassifier, StatusClassifier};
use exportdocs_store::EventStore;
use tracing::{debug, info, info_span};

use crate::document::Document;
use crate::docx;
use crate::error::{ExportError, ExportResult};
use crate::reports::{ConferenceReportLayout, ListLayout, PapersLayout};
use crate::style::StyleProfile;
use crate::walker::render;

/// The reports an [`Exporter`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    List,
    Report,
    Papers,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::List, ReportKind::Report, ReportKind::Papers];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::List => "list",
            ReportKind::Report => "report",
            ReportKind::Papers => "papers",
        }
    }

    /// Default file name for the generated document.
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::List => "list.docx",
            ReportKind::Report => "report.docx",
            ReportKind::Papers => "papers.docx",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ReportKind::List),
            "report" => Ok(ReportKind::Report),
            "papers" => Ok(ReportKind::Papers),
            other => Err(format!("unknown report kind: {}", other)),
        }
    }
}

/// Generates reports for events read from a store.
///
/// Generation is read-only and keeps no state between calls, so one exporter
/// can serve concurrent requests.
pub struct Exporter<S> {
    store: S,
    classifier: Box<dyn StatusClassifier>,
    style: StyleProfile,
}

impl<S: EventStore> Exporter<S> {
    /// Creates an exporter with the keyword classifier and default styling.
    pub fn new(store: S) -> Self {
        Self {
            store,
            classifier: Box::new(KeywordClassifier::default()),
            style: StyleProfile::default(),
        }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl StatusClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleProfile) -> Self {
        self.style = style;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Builds the styled document without serializing it.
    pub fn build_document(&self, kind: ReportKind, event_id: EventId) -> ExportResult<Document> {
        let event = self
            .store
            .event(event_id)
            .map_err(|e| ExportError::from_store(event_id, e))?;
        debug!(
            store = self.store.name(),
            contributions = event.contributions.len(),
            "Loaded event"
        );

        let doc = match kind {
            ReportKind::List => {
                let mut layout = ListLayout::new(self.classifier.as_ref());
                render(&event, &mut layout, &self.style)
            }
            ReportKind::Report => render(&event, &mut ConferenceReportLayout::new(), &self.style),
            ReportKind::Papers => render(&event, &mut PapersLayout::new(), &self.style),
        };
        Ok(doc)
    }

    /// Generates `kind` for `event_id` as DOCX bytes.
    pub fn generate(&self, kind: ReportKind, event_id: EventId) -> ExportResult<Vec<u8>> {
        let span = info_span!("generate", report = %kind, event_id);
        let _guard = span.enter();

        let doc = self.build_document(kind, event_id)?;
        let bytes = docx::to_bytes(&doc)?;
        info!(blocks = doc.blocks.len(), bytes = bytes.len(), "Generated report");
        Ok(bytes)
    }

    pub fn generate_list(&self, event_id: EventId) -> ExportResult<Vec<u8>> {
        self.generate(ReportKind::List, event_id)
    }

    pub fn generate_report(&self, event_id: EventId) -> ExportResult<Vec<u8>> {
        self.generate(ReportKind::Report, event_id)
    }

    pub fn generate_papers(&self, event_id: EventId) -> ExportResult<Vec<u8>> {
        self.generate(ReportKind::Papers, event_id)
    }
}

/// Generates the contributions list with default settings.
pub fn generate_list<S: EventStore>(store: S, event_id: EventId) -> ExportResult<Vec<u8>> {
    Exporter::new(store).generate_list(event_id)
}

/// Generates the conference report with default settings.
pub fn generate_report<S: EventStore>(store: S, event_id: EventId) -> ExportResult<Vec<u8>> {
    Exporter::new(store).generate_report(event_id)
}

/// Generates the publications list with default settings.
pub fn generate_papers<S: EventStore>(store: S, event_id: EventId) -> ExportResult<Vec<u8>> {
    Exporter::new(store).generate_papers(event_id)
}
