//! Monthly output files.
//!
//! Each month bucket becomes `<output_dir>/timeline_<YYYY-MM>.json`, a
//! pretty-printed document shaped like the source export.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use splitter_core::error::{Result, SplitterError};
use splitter_core::models::{month_file_name, MonthlyTimelineRef};
use tracing::info;

/// One file produced by [`write_month_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// The `YYYY-MM` key of the bucket.
    pub month: String,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Number of segments in the file.
    pub segments: usize,
}

/// Create `output_dir` if needed, logging when it did not exist before.
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(output_dir).map_err(|source| SplitterError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    info!("Created output directory: '{}'", output_dir.display());
    Ok(())
}

/// Serialize `doc` as pretty JSON indented by `indent` spaces.
pub fn to_pretty_json<T: Serialize>(doc: &T, indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    Ok(buf)
}

/// Write one file per bucket into `output_dir`, overwriting existing files.
///
/// Buckets are written in key order. A failure stops the run; files written
/// before it stay on disk.
pub fn write_month_files(
    output_dir: &Path,
    buckets: &BTreeMap<String, Vec<Value>>,
    indent: usize,
) -> Result<Vec<WrittenFile>> {
    ensure_output_dir(output_dir)?;

    let mut written = Vec::with_capacity(buckets.len());

    for (month, segments) in buckets {
        let path = output_dir.join(month_file_name(month));
        let doc = MonthlyTimelineRef {
            semantic_segments: segments,
        };

        let bytes = to_pretty_json(&doc, indent).map_err(|source| SplitterError::Serialize {
            month: month.clone(),
            source,
        })?;

        std::fs::write(&path, bytes).map_err(|source| SplitterError::WriteOutput {
            path: path.clone(),
            source,
        })?;

        info!(
            "Successfully created '{}' with {} objects.",
            path.display(),
            segments.len()
        );

        written.push(WrittenFile {
            month: month.clone(),
            path,
            segments: segments.len(),
        });
    }

    Ok(written)
}
