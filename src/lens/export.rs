//! File export
//!
//! Writes a batch of successful records to a file whose format follows the
//! file extension:
//!
//! | Extension | Content |
//! |-----------|---------|
//! | `.json` | array of projections, or a bare object for one record |
//! | `.md` | the Markdown theme document per record, each followed by `---` when there are several |
//! | anything else | the minimal-lines text per record, blank line after each |
//!
//! Field lists come from [`FieldSelection::resolve`], the same call the
//! console rendering uses.

use crate::lens::fields::{FieldCatalog, FieldSelection};
use crate::lens::record::Record;
use crate::lens::theme::json::to_json_pretty;
use crate::lens::theme::markdown::markdown_string;
use crate::lens::theme::{Palette, RenderContext, Theme};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const MARKDOWN_SEPARATOR: &str = "---\n\n";

// =============================================================================
// Types
// =============================================================================

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Text,
}

impl ExportFormat {
    /// Pick the format from the extension of `path` (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("json") => ExportFormat::Json,
            Some("md") => ExportFormat::Markdown,
            _ => ExportFormat::Text,
        }
    }
}

/// Errors that can occur while exporting
#[derive(Debug)]
pub enum ExportError {
    /// The target could not be created or written
    Io { path: PathBuf, source: io::Error },
    /// The batch could not be serialized
    Serialize(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io { path, source } => {
                write!(f, "Could not write to file '{}'. {}", path.display(), source)
            }
            ExportError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
            ExportError::Serialize(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialize(e)
    }
}

// =============================================================================
// Lens
// =============================================================================

/// Serializes record batches to files
pub struct ExportLens<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> ExportLens<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Build the file content for `records` without touching the filesystem
    pub fn render(
        &self,
        records: &[Record],
        format: ExportFormat,
        selection: &FieldSelection,
    ) -> Result<String, ExportError> {
        let palette = Palette::plain();
        let defaults = self.catalog.default_fields();

        match format {
            ExportFormat::Json => {
                let mut projections: Vec<Value> = records
                    .iter()
                    .map(|record| {
                        let fields = selection.resolve(defaults, record);
                        Value::Object(record.project(&fields))
                    })
                    .collect();

                let mut content = if projections.len() == 1 {
                    to_json_pretty(&projections.remove(0))?
                } else {
                    to_json_pretty(&projections)?
                };
                content.push('\n');
                Ok(content)
            }
            ExportFormat::Markdown => {
                let mut content = String::new();
                for record in records {
                    let fields = selection.resolve(defaults, record);
                    let ctx = RenderContext::new(record, &fields, self.catalog, &palette);
                    content.push_str(&markdown_string(&ctx));
                    if records.len() > 1 {
                        content.push_str(MARKDOWN_SEPARATOR);
                    }
                }
                Ok(content)
            }
            ExportFormat::Text => {
                let mut content = String::new();
                for record in records {
                    let fields = selection.resolve(defaults, record);
                    let ctx = RenderContext::new(record, &fields, self.catalog, &palette);
                    content.push_str(&Theme::Minimal.render(&ctx));
                    content.push('\n');
                }
                Ok(content)
            }
        }
    }

    /// Write `records` to `path`, choosing the format from its extension.
    ///
    /// An empty batch writes nothing. On a failed write the partial file is
    /// removed before the error is returned.
    pub fn export(
        &self,
        records: &[Record],
        path: impl AsRef<Path>,
        selection: &FieldSelection,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        if records.is_empty() {
            warn!("nothing to export to {}", path.display());
            return Ok(());
        }

        let format = ExportFormat::from_path(path);
        let content = self.render(records, format, selection)?;
        info!(
            "exporting {} record(s) as {:?} to {}",
            records.len(),
            format,
            path.display()
        );
        write_file(path, &content)
    }
}

fn io_error(path: &Path, source: io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    // an existing target (file, symlink, device) is never removed on failure
    let created = fs::symlink_metadata(path).is_err();
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    finish_write(BufWriter::new(file), path, content, created)
}

/// Write `content` through `writer`; on failure remove `path` if this export
/// created it.
fn finish_write<W: Write>(
    mut writer: W,
    path: &Path,
    content: &str,
    created: bool,
) -> Result<(), ExportError> {
    let result = writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush());
    drop(writer);

    if let Err(source) = result {
        if created {
            if let Err(e) = fs::remove_file(path) {
                warn!("unable to remove partial export {}: {}", path.display(), e);
            }
        }
        return Err(io_error(path, source));
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
