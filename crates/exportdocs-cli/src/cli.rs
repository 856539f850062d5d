//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use exportdocs_core::EventId;
use exportdocs_render::ReportKind;

/// exportdocs - DOCX reports for conference events
#[derive(Debug, Parser)]
#[command(name = "exportdocs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "EXPORTDOCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by the export commands.
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Event id to export
    #[arg(long, short)]
    pub event: EventId,

    /// JSON event store (overrides `[store] path`)
    #[arg(long, short, env = "EXPORTDOCS_STORE")]
    pub store: Option<PathBuf>,

    /// Output file; for `all`, the output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the contributions list
    List(ExportArgs),

    /// Write the conference report
    Report(ExportArgs),

    /// Write the list of accepted publications
    Papers(ExportArgs),

    /// Write all three reports
    All(ExportArgs),

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Command {
    /// Reports written by this command, empty for non-export commands.
    pub fn report_kinds(&self) -> &'static [ReportKind] {
        match self {
            Command::List(_) => &[ReportKind::List],
            Command::Report(_) => &[ReportKind::Report],
            Command::Papers(_) => &[ReportKind::Papers],
            Command::All(_) => &ReportKind::ALL,
            Command::Config { .. } => &[],
        }
    }
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
