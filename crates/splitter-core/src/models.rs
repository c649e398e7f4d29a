use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Root key holding the list of timeline entries, in input and output files.
pub const SEGMENTS_KEY: &str = "semanticSegments";

/// Field on each segment whose prefix selects its month bucket.
pub const START_TIME_KEY: &str = "startTime";

/// Output document for one month, shaped like a Takeout timeline export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTimeline {
    /// Segments of one month, in source order and otherwise untouched.
    #[serde(rename = "semanticSegments")]
    pub semantic_segments: Vec<Value>,
}

/// Borrowing variant of [`MonthlyTimeline`] used when serializing buckets.
#[derive(Debug, Serialize)]
pub struct MonthlyTimelineRef<'a> {
    #[serde(rename = "semanticSegments")]
    pub semantic_segments: &'a [Value],
}

/// A segment that was left out of every bucket.
#[derive(Debug, Clone, PartialEq)]
pub enum SkippedItem {
    /// `startTime` is absent or falsy; `fields` lists the keys the item did
    /// have (empty when the item is not an object).
    MissingStartTime { index: usize, fields: Vec<String> },
    /// `startTime` is present but no `YYYY-MM` prefix could be taken from it.
    InvalidStartTime { index: usize, value: Value },
}

impl SkippedItem {
    /// Position of the item in the source `semanticSegments` list.
    pub fn index(&self) -> usize {
        match self {
            SkippedItem::MissingStartTime { index, .. }
            | SkippedItem::InvalidStartTime { index, .. } => *index,
        }
    }
}

impl fmt::Display for SkippedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkippedItem::MissingStartTime { index, fields } => write!(
                f,
                "item {} missing '{}' field, present fields: [{}]",
                index,
                START_TIME_KEY,
                fields.join(", ")
            ),
            SkippedItem::InvalidStartTime { index, value } => write!(
                f,
                "item {} has unusable '{}' {}",
                index, START_TIME_KEY, value
            ),
        }
    }
}

/// Name of the output file for a month key, e.g. `timeline_2018-09.json`.
pub fn month_file_name(month: &str) -> String {
    format!("timeline_{}.json", month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_monthly_timeline_serializes_with_takeout_key() {
        let doc = MonthlyTimeline {
            semantic_segments: vec![json!({"startTime": "2024-01-05T10:00:00Z"})],
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({"semanticSegments": [{"startTime": "2024-01-05T10:00:00Z"}]})
        );
    }

    #[test]
    fn test_monthly_timeline_ref_matches_owned_shape() {
        let segments = vec![json!({"x": 1}), json!({"x": 2})];
        let borrowed = serde_json::to_value(MonthlyTimelineRef {
            semantic_segments: &segments,
        })
        .unwrap();
        let owned = serde_json::to_value(MonthlyTimeline {
            semantic_segments: segments.clone(),
        })
        .unwrap();
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_month_file_name() {
        assert_eq!(month_file_name("2018-09"), "timeline_2018-09.json");
    }

    #[test]
    fn test_skipped_item_display_missing() {
        let item = SkippedItem::MissingStartTime {
            index: 3,
            fields: vec!["x".to_string(), "endTime".to_string()],
        };
        assert_eq!(
            item.to_string(),
            "item 3 missing 'startTime' field, present fields: [x, endTime]"
        );
        assert_eq!(item.index(), 3);
    }

    #[test]
    fn test_skipped_item_display_invalid() {
        let item = SkippedItem::InvalidStartTime {
            index: 0,
            value: json!(12345),
        };
        assert_eq!(item.to_string(), "item 0 has unusable 'startTime' 12345");
    }
}
