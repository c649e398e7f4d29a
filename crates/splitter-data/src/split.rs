//! Main split pipeline for the Timeline Splitter.
//!
//! Loads the export, partitions its segments by month and writes the month
//! files, returning a [`SplitReport`] for the caller to summarise.

use std::time::Instant;

use chrono::Utc;
use splitter_core::error::{Result, SplitterError};
use splitter_core::settings::SplitOptions;
use tracing::{debug, info, warn};

use crate::partitioner::partition_segments;
use crate::reader::{extract_segments, load_timeline};
use crate::writer::{write_month_files, WrittenFile};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the split result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SplitMetadata {
    /// ISO-8601 timestamp when this run finished.
    pub generated_at: String,
    /// Wall-clock seconds spent reading and parsing the source file.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent grouping segments.
    pub partition_time_seconds: f64,
    /// Wall-clock seconds spent writing month files.
    pub write_time_seconds: f64,
}

/// The complete output of [`split_timeline`].
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Files written, in month order.
    pub files: Vec<WrittenFile>,
    /// Segments written to a month file.
    pub processed: usize,
    /// Segments skipped for lacking a usable `startTime`.
    pub skipped: usize,
    /// Timing information for this run.
    pub metadata: SplitMetadata,
}

impl SplitReport {
    /// Number of distinct months written.
    pub fn months_written(&self) -> usize {
        self.files.len()
    }

    /// Log the end-of-run summary.
    pub fn log_summary(&self) {
        info!("--- Splitting process finished ---");
        info!("Months written: {}", self.months_written());
        for file in &self.files {
            info!("  {}: {} segments", file.month, file.segments);
        }
        info!("Total semantic segments processed: {}", self.processed);
        info!("Total semantic segments skipped: {}", self.skipped);
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full split pipeline.
///
/// 1. Load the source document and take its `semanticSegments`.
/// 2. Partition the segments by `YYYY-MM`.
/// 3. Refuse to write when nothing was bucketed, or in strict mode when
///    anything was skipped.
/// 4. Write one file per month.
///
/// Nothing touches the output directory before step 4.
pub fn split_timeline(options: &SplitOptions) -> Result<SplitReport> {
    info!("--- Starting to split '{}' by month ---", options.source.display());

    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let load_start = Instant::now();
    let document = load_timeline(&options.source)?;
    let segments = extract_segments(document)?;
    let load_time = load_start.elapsed().as_secs_f64();
    debug!("Loaded {} segments", segments.len());

    // ── Step 2: Partition ─────────────────────────────────────────────────────
    let partition_start = Instant::now();
    let partition = partition_segments(segments, options.strict);
    let partition_time = partition_start.elapsed().as_secs_f64();

    // ── Step 3: Guard ─────────────────────────────────────────────────────────
    if partition.is_empty() {
        info!(
            "Segments with valid timestamps: {}, skipped (missing/invalid timestamp): {}",
            partition.processed, partition.skipped
        );
        return Err(SplitterError::NoSegmentsFound {
            processed: partition.processed,
            skipped: partition.skipped,
        });
    }

    debug!(
        "Grouped {} segments into {} months ({} skipped)",
        partition.processed,
        partition.months(),
        partition.skipped
    );

    if options.strict && partition.skipped > 0 {
        if let Some(first) = partition.skipped_items.first() {
            warn!("Strict mode: first unusable segment is at index {}", first.index());
        }
        return Err(SplitterError::StrictModeViolation {
            skipped: partition.skipped,
        });
    }

    // ── Step 4: Write ─────────────────────────────────────────────────────────
    let write_start = Instant::now();
    let files = write_month_files(&options.output_dir, &partition.buckets, options.indent)?;
    let write_time = write_start.elapsed().as_secs_f64();

    let metadata = SplitMetadata {
        generated_at: Utc::now().to_rfc3339(),
        load_time_seconds: load_time,
        partition_time_seconds: partition_time,
        write_time_seconds: write_time,
    };
    debug!("Run metadata: {:?}", metadata);

    Ok(SplitReport {
        files,
        processed: partition.processed,
        skipped: partition.skipped,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
