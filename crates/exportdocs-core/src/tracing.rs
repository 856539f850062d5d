//! Log output for the exporter binaries.
//!
//! Library code only emits `tracing` events; whoever runs the export picks
//! the subscriber once through [`init_tracing`]:
//!
//! ```ignore
//! use exportdocs_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::for_cli(false))?;
//! ```
//!
//! Logs always go to stderr so generated files and command output on stdout
//! stay clean.

use thiserror::Error;
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    prelude::*,
    registry::LookupSpan,
};

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber is already installed
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),

    /// The filter directive does not parse
    #[error("invalid log filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Line format of emitted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// Multi-line, indented
    Pretty,
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

/// What [`init_tracing`] installs.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for the exportdocs crates when `RUST_LOG` is unset
    pub level: Level,
    pub format: TracingOutputFormat,
    /// Source file and line of each record
    pub show_location: bool,
    /// Module path of each record
    pub show_target: bool,
    pub timestamps: bool,
    /// Log when the per-report `generate` span opens and closes
    pub span_events: bool,
    /// Explicit filter directive; wins over `RUST_LOG` and `level`
    pub filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: TracingOutputFormat::Compact,
            show_location: false,
            show_target: false,
            timestamps: false,
            span_events: false,
            filter: None,
        }
    }
}

impl TracingConfig {
    /// Config for the command-line exporter.
    ///
    /// Warnings only by default; `debug` raises the level and adds source
    /// locations.
    #[must_use]
    pub fn for_cli(debug: bool) -> Self {
        if !debug {
            return Self::default();
        }
        Self {
            level: Level::DEBUG,
            show_location: true,
            show_target: true,
            ..Self::default()
        }
    }

    /// Config for unattended batch exports: JSON with timestamps and spans.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            level: Level::INFO,
            format: TracingOutputFormat::Json,
            show_location: true,
            show_target: true,
            timestamps: true,
            span_events: true,
            filter: None,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn build_filter(&self) -> Result<EnvFilter, TracingError> {
        if let Some(ref directive) = self.filter {
            return Ok(EnvFilter::try_new(directive)?);
        }
        // `exportdocs` prefixes the target of every crate in the workspace.
        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("exportdocs={}", self.level))))
    }

    fn output_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync + 'static>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let span_events = if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(self.show_location)
            .with_line_number(self.show_location)
            .with_target(self.show_target)
            .with_span_events(span_events);

        match (self.format, self.timestamps) {
            (TracingOutputFormat::Pretty, true) => layer.pretty().boxed(),
            (TracingOutputFormat::Pretty, false) => layer.pretty().without_time().boxed(),
            (TracingOutputFormat::Compact, true) => layer.compact().boxed(),
            (TracingOutputFormat::Compact, false) => layer.compact().without_time().boxed(),
            (TracingOutputFormat::Json, _) => layer.json().boxed(),
        }
    }
}

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG` replaces the default level unless `config` carries its own
/// filter directive.
///
/// # Errors
///
/// Fails when a subscriber is already installed or the filter directive is
/// invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.build_filter()?;
    tracing_subscriber::registry()
        .with(filter)
        .with(config.output_layer())
        .try_init()?;
    Ok(())
}
