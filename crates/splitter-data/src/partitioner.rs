//! Grouping of timeline segments into month buckets.

use std::collections::BTreeMap;

use serde_json::Value;
use splitter_core::models::{SkippedItem, START_TIME_KEY};
use splitter_core::month_key::{derive_month_key, MonthKey};
use tracing::warn;

// ── Partition ─────────────────────────────────────────────────────────────────

/// Segments grouped by `YYYY-MM`, plus bookkeeping for the run summary.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Month key → segments of that month in source order. Never holds an
    /// empty bucket.
    pub buckets: BTreeMap<String, Vec<Value>>,
    /// Segments placed in a bucket.
    pub processed: usize,
    /// Segments left out of every bucket.
    pub skipped: usize,
    /// One entry per skipped segment, in source order.
    pub skipped_items: Vec<SkippedItem>,
}

impl Partition {
    /// Number of distinct months found.
    pub fn months(&self) -> usize {
        self.buckets.len()
    }

    /// `true` when no segment could be bucketed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn push(&mut self, month: String, segment: Value) {
        self.buckets.entry(month).or_default().push(segment);
        self.processed += 1;
    }

    fn skip(&mut self, item: SkippedItem) {
        warn!("Skipping segment: {}", item);
        self.skipped_items.push(item);
        self.skipped += 1;
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Move every segment into the bucket named by its `startTime` prefix.
///
/// Segments without a usable `startTime` are skipped, logged and counted.
/// With `require_calendar_month` set, prefixes that are not a real `YYYY-MM`
/// month are treated as unusable too.
pub fn partition_segments(segments: Vec<Value>, require_calendar_month: bool) -> Partition {
    let mut partition = Partition::default();

    for (index, segment) in segments.into_iter().enumerate() {
        match derive_month_key(&segment, require_calendar_month) {
            MonthKey::Month(month) => partition.push(month, segment),
            MonthKey::Missing => partition.skip(SkippedItem::MissingStartTime {
                index,
                fields: field_names(&segment),
            }),
            MonthKey::Invalid => partition.skip(SkippedItem::InvalidStartTime {
                index,
                value: segment.get(START_TIME_KEY).cloned().unwrap_or(Value::Null),
            }),
        }
    }

    partition
}

/// Keys present on `segment`, for diagnosing skipped items.
fn field_names(segment: &Value) -> Vec<String> {
    segment
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
