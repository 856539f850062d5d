//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/exportdocs/config.toml` by default:
//!
//! ```toml
//! [store]
//! path = "/srv/conference/events.json"
//!
//! [output]
//! directory = "reports"
//!
//! [classifier]
//! student_keywords = ["студент", "бакалавр"]
//! master_keywords = ["магистр"]
//! ```

use std::path::{Path, PathBuf};

use exportdocs_core::KeywordClassifier;
use exportdocs_render::ReportKind;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Configuration for the exportdocs client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Event store settings.
    pub store: StoreSettings,

    /// Where reports are written.
    pub output: OutputSettings,

    /// Keywords used to derive a speaker's status from the affiliation.
    pub classifier: KeywordClassifier,
}

/// Event store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// JSON file holding the events.
    pub path: Option<PathBuf>,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving `list.docx`, `report.docx` and `papers.docx`.
    pub directory: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path, or defaults when the file
    /// does not exist.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse config: {}", e)))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("exportdocs")
    }

    /// The store file: `overridden` if given, else `[store] path`.
    pub fn store_path(&self, overridden: Option<&Path>) -> CliResult<PathBuf> {
        overridden
            .map(Path::to_path_buf)
            .or_else(|| self.store.path.clone())
            .ok_or_else(|| {
                CliError::Config(format!(
                    "no event store configured. Pass --store <FILE> or add to {}:\n  \
                     [store]\n  \
                     path = \"events.json\"",
                    Self::default_path().display()
                ))
            })
    }

    /// Destination of a report.
    ///
    /// With `single` set, `overridden` names the file itself; otherwise it
    /// names the directory receiving the default file name. Without an
    /// override the configured output directory is used.
    pub fn output_path(
        &self,
        kind: ReportKind,
        overridden: Option<&Path>,
        single: bool,
    ) -> PathBuf {
        match overridden {
            Some(path) if single => path.to_path_buf(),
            Some(dir) => dir.join(kind.file_name()),
            None => self.output.directory.join(kind.file_name()),
        }
    }

    /// Checks settings that parse but cannot work.
    pub fn validate(&self) -> CliResult<()> {
        if let Some(ref path) = self.store.path {
            if !path.is_file() {
                return Err(CliError::Config(format!(
                    "store file {} does not exist",
                    path.display()
                )));
            }
        }

        let classifier = &self.classifier;
        if let Some(keyword) = classifier
            .student_keywords
            .iter()
            .chain(&classifier.master_keywords)
            .find(|k| k.trim().is_empty())
        {
            return Err(CliError::Config(format!(
                "classifier keywords must not be blank (found {:?})",
                keyword
            )));
        }
        Ok(())
    }
}
