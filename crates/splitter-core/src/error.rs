use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors produced by the Timeline Splitter.
///
/// Per-item problems are not errors; they are recorded as
/// [`SkippedItem`](crate::models::SkippedItem) values and counted.
#[derive(Error, Debug)]
pub enum SplitterError {
    /// The source file does not exist or could not be read.
    #[error("The source file was not found at '{path}': {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file is not valid UTF-8 JSON.
    #[error("Could not decode JSON from '{path}': {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document has no usable `semanticSegments`.
    #[error(
        "No segments could be grouped by month \
         (processed: {processed}, skipped: {skipped})"
    )]
    NoSegmentsFound { processed: usize, skipped: usize },

    /// Strict mode is enabled and at least one item was skipped.
    #[error("Strict mode: {skipped} segment(s) lacked a usable 'startTime'")]
    StrictModeViolation { skipped: usize },

    /// The output directory could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A monthly output file could not be written.
    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A monthly document could not be serialized.
    #[error("Failed to serialize month {month}: {source}")]
    Serialize {
        month: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SplitterError {
    /// Process exit code for this error.
    ///
    /// Load and partition failures each get a distinct code starting at `3`,
    /// leaving `2` to clap's usage errors; failures while writing share the
    /// generic code `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            SplitterError::FileNotFound { .. } => 3,
            SplitterError::MalformedJson { .. } => 4,
            SplitterError::NoSegmentsFound { .. } => 5,
            SplitterError::StrictModeViolation { .. } => 6,
            SplitterError::CreateOutputDir { .. }
            | SplitterError::WriteOutput { .. }
            | SplitterError::Serialize { .. } => 1,
        }
    }
}

/// Convenience alias used throughout the splitter crates.
pub type Result<T> = std::result::Result<T, SplitterError>;
