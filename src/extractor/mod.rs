//! Tile extraction
//!
//! This module runs the crop tool over the tile jobs and collects the
//! per-job outcomes.

mod tile_extractor;

pub use tile_extractor::{
    ExtractionSummary, JobOutcome, TileExtractor, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE,
};
