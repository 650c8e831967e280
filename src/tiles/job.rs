//! A single unit of work in a sweep

use std::path::{Path, PathBuf};

use super::rectangle::CropRectangle;

/// Extension used for every tile written by the sweep
pub const TILE_EXTENSION: &str = "png";

/// A crop rectangle paired with the 1-based index that names its output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileJob {
    /// Source region to crop
    pub rectangle: CropRectangle,

    /// Sequence number of the tile, starting at 1
    pub index: u32,
}

impl TileJob {
    pub fn new(rectangle: CropRectangle, index: u32) -> Self {
        TileJob { rectangle, index }
    }

    /// File name of the tile, e.g. `17.png`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.index, TILE_EXTENSION)
    }

    /// Destination path of the tile inside `output_dir`
    pub fn destination(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}
