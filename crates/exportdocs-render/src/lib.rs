//! DOCX report generation for conference events.
//!
//! Reports are built as an in-memory [`Document`], styled with a
//! [`StyleProfile`] and packed by [`docx::to_bytes`]. Most callers only need
//! [`Exporter`] or the `generate_*` shortcuts.

pub mod document;
pub mod docx;
pub mod error;
pub mod export;
pub mod reports;
pub mod style;
pub mod walker;

pub use document::{
    Alignment, Block, Document, Paragraph, ParagraphKind, Run, Table, TableCell, TableRow,
};
pub use error::{ExportError, ExportResult};
pub use export::{Exporter, ReportKind, generate_list, generate_papers, generate_report};
pub use reports::{ConferenceReportLayout, ListLayout, PapersLayout};
pub use style::{Margins, StyleProfile};
pub use walker::{Entry, ReportLayout, render};
