//! Crop rectangle for a single tile
//!
//! A `CropRectangle` is the pixel geometry of one tile inside the source
//! sheet. Coordinates follow the usual image convention where (0,0) is the
//! top-left corner.

use std::fmt;

/// Pixel geometry of one tile
///
/// Width and height give the tile size; `left` and `top` give the offset of
/// its top-left corner within the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropRectangle {
    /// Width of the tile in pixels
    pub width: u32,

    /// Height of the tile in pixels
    pub height: u32,

    /// X-coordinate of the top-left corner (pixels from left)
    pub left: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub top: u32,
}

impl CropRectangle {
    /// Create a new crop rectangle
    ///
    /// # Arguments
    /// * `width` - Width of the tile in pixels
    /// * `height` - Height of the tile in pixels
    /// * `left` - X-coordinate of the top-left corner
    /// * `top` - Y-coordinate of the top-left corner
    pub fn new(width: u32, height: u32, left: u32, top: u32) -> Self {
        CropRectangle { width, height, left, top }
    }

    /// Rightmost X coordinate (exclusive)
    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    /// Bottommost Y coordinate (exclusive)
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// ImageMagick crop geometry, e.g. `64x96+960+384`
    pub fn geometry(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CropRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.left, self.top)
    }
}
