//! Shared types for the Timeline Splitter.
//!
//! Holds the error taxonomy, the run configuration, the timeline data model
//! and the rules for deriving a month key from a segment.

pub mod error;
pub mod models;
pub mod month_key;
pub mod settings;
