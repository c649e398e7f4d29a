//! Data layer for the Timeline Splitter.
//!
//! Responsible for loading a timeline export, grouping its segments by
//! month, writing the month files and running the end-to-end split.

pub mod partitioner;
pub mod reader;
pub mod split;
pub mod writer;

pub use splitter_core as core;
