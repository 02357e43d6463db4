//! Batch export of drawings to FBX files.
//!
//! Every item is exported independently: failures are logged and recorded
//! in the [`ExportReport`] and the batch moves on to the next item. A file
//! left half-written by a failed export is removed.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::error::{ExportError, Result};
use crate::fbx::{EXTENSION, write_document};
use crate::scene::{SceneGraph, build};
use crate::types::DrawingItem;

/// Outcome of a batch export
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(String, ExportError)>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Output file for an item: `<dir>/<name>.fbx`
pub fn output_path(item: &DrawingItem, destination_dir: &Path) -> PathBuf {
    destination_dir.join(format!("{}.{}", item.name, EXTENSION))
}

/// Build the scene graph for `item` and write its document to `out`.
pub fn write_item<W: Write>(out: &mut W, item: &DrawingItem) -> Result<()> {
    let graph = build(item)?;
    write_document(out, &graph)
}

fn write_file(path: &Path, graph: &SceneGraph) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_document(&mut out, graph)?;
    out.flush()?;
    Ok(())
}

/// Export one item. The scene graph is built, and the item name checked,
/// before anything is created on disk. The output file is closed before this
/// returns, whether or not the export succeeded.
pub fn export_item(item: &DrawingItem, destination_dir: &Path) -> Result<PathBuf> {
    let graph = build(item)?;
    let path = output_path(item, destination_dir);
    info!("Exporting file: {}...", path.display());

    if let Err(e) = write_file(&path, &graph) {
        if path.exists() {
            if let Err(rm) = fs::remove_file(&path) {
                warn!("Could not remove partial file {}: {}", path.display(), rm);
            }
        }
        return Err(e);
    }
    Ok(path)
}

/// Export every item in order, continuing past failures.
pub fn export_all(items: &[DrawingItem], destination_dir: &Path) -> ExportReport {
    let mut report = ExportReport::default();

    for item in items {
        match export_item(item, destination_dir) {
            Ok(path) => report.written.push(path),
            Err(e) => {
                error!("Failed to export {}: {}", item.name, e);
                report.failed.push((item.name.clone(), e));
            }
        }
    }

    report
}
