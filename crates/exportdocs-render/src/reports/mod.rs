//! Layouts for the three reports.

pub mod list;
pub mod papers;
pub mod report;

pub use list::ListLayout;
pub use papers::PapersLayout;
pub use report::ConferenceReportLayout;
