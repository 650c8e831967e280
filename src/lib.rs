pub mod tiles;
pub mod cropper;
pub mod extractor;
pub mod utils;
pub mod commands;

pub use tiles::{CropRectangle, TileError, TileJob, TileLayout, TileResult};
pub use cropper::{ConvertTool, CropTool, ExecutionResult, PostProcess};
pub use extractor::{ExtractionSummary, TileExtractor};
