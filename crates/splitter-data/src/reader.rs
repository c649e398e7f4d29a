//! Timeline file loading.
//!
//! Reads a Takeout-style timeline export from disk and hands out its
//! `semanticSegments` list for partitioning.

use std::path::Path;

use serde_json::Value;
use splitter_core::error::{Result, SplitterError};
use splitter_core::models::SEGMENTS_KEY;
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and parse the JSON document at `path`.
///
/// Any I/O failure maps to [`SplitterError::FileNotFound`]; content that is
/// not valid UTF-8 JSON maps to [`SplitterError::MalformedJson`].
pub fn load_timeline(path: &Path) -> Result<Value> {
    let bytes = std::fs::read(path).map_err(|source| SplitterError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    serde_json::from_slice(&bytes).map_err(|source| SplitterError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Take ownership of the `semanticSegments` list inside `document`.
///
/// Fails with [`SplitterError::NoSegmentsFound`] when the root is not an
/// object, or the list is missing, not an array, or empty.
pub fn extract_segments(document: Value) -> Result<Vec<Value>> {
    let no_segments = SplitterError::NoSegmentsFound {
        processed: 0,
        skipped: 0,
    };

    let Value::Object(mut root) = document else {
        return Err(no_segments);
    };

    match root.remove(SEGMENTS_KEY) {
        Some(Value::Array(segments)) if !segments.is_empty() => Ok(segments),
        _ => Err(no_segments),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    // ── load_timeline ─────────────────────────────────────────────────────────

    #[test]
    fn test_load_timeline_valid() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "Timeline.json",
            br#"{"semanticSegments": [{"startTime": "2024-01-05T10:00:00Z"}]}"#,
        );

        let doc = load_timeline(&path).unwrap();
        assert_eq!(doc["semanticSegments"][0]["startTime"], "2024-01-05T10:00:00Z");
    }

    #[test]
    fn test_load_timeline_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_timeline(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SplitterError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_timeline_directory_is_not_readable_as_file() {
        let dir = TempDir::new().unwrap();
        let err = load_timeline(dir.path()).unwrap_err();
        assert!(matches!(err, SplitterError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_timeline_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.json", b"{not valid json{{");
        let err = load_timeline(&path).unwrap_err();
        assert!(matches!(err, SplitterError::MalformedJson { .. }));
    }

    #[test]
    fn test_load_timeline_empty_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.json", b"");
        let err = load_timeline(&path).unwrap_err();
        assert!(matches!(err, SplitterError::MalformedJson { .. }));
    }

    #[test]
    fn test_load_timeline_invalid_utf8_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "latin1.json", b"{\"a\": \"caf\xe9\"}");
        let err = load_timeline(&path).unwrap_err();
        assert!(matches!(err, SplitterError::MalformedJson { .. }));
    }

    #[test]
    fn test_load_timeline_leaves_source_untouched() {
        let dir = TempDir::new().unwrap();
        let content = br#"{"semanticSegments": []}"#;
        let path = write_file(&dir, "Timeline.json", content);
        load_timeline(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), content);
    }

    // ── extract_segments ──────────────────────────────────────────────────────

    #[test]
    fn test_extract_segments_returns_list_in_order() {
        let doc = json!({"semanticSegments": [{"x": 1}, {"x": 2}], "rawSignals": []});
        let segments = extract_segments(doc).unwrap();
        assert_eq!(segments, vec![json!({"x": 1}), json!({"x": 2})]);
    }

    #[test]
    fn test_extract_segments_rejects_bad_shapes() {
        let cases = [
            json!({"semanticSegments": []}),
            json!({"semanticSegments": {"x": 1}}),
            json!({"semanticSegments": null}),
            json!({"otherKey": [{"x": 1}]}),
            json!([{"startTime": "2024-01-01"}]),
            json!("semanticSegments"),
        ];
        for doc in cases {
            let err = extract_segments(doc.clone()).unwrap_err();
            assert!(
                matches!(err, SplitterError::NoSegmentsFound { .. }),
                "{} should have no segments",
                doc
            );
        }
    }
}
