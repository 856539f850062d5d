//! Report export command.

use std::path::{Path, PathBuf};

use exportdocs_render::{Exporter, ReportKind};
use exportdocs_store::JsonStore;
use tracing::{debug, info};

use crate::cli::ExportArgs;
use crate::config::ClientConfig;
use crate::error::CliResult;

/// Generates `kinds` for the requested event and writes them to disk.
///
/// Returns the written paths in the order of `kinds`. Nothing is written
/// for a report that fails to generate.
pub fn run(
    kinds: &[ReportKind],
    args: &ExportArgs,
    config: &ClientConfig,
) -> CliResult<Vec<PathBuf>> {
    let store_path = config.store_path(args.store.as_deref())?;
    let store = JsonStore::load(&store_path)?;
    debug!(store = %store_path.display(), events = store.ids().len(), "Opened event store");

    let exporter = Exporter::new(store).with_classifier(config.classifier.clone());
    let single = kinds.len() == 1;

    let mut written = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let bytes = exporter.generate(kind, args.event)?;
        let path = config.output_path(kind, args.output.as_deref(), single);
        write_report(&path, &bytes)?;
        info!(report = %kind, path = %path.display(), "Wrote report");
        println!("{}: {}", kind, path.display());
        written.push(path);
    }
    Ok(written)
}

fn write_report(path: &Path, bytes: &[u8]) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
