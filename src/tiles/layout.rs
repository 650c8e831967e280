//! Fixed tile grid of the sprite sheet
//!
//! The sheet is cut into horizontal bands. Every band is swept left to
//! right from `SWEEP_START` up to (but not including) `SWEEP_END` in steps
//! of `TILE_STEP`, and each band sits `BAND_SPACING` pixels below the
//! previous one. Tiles are numbered band by band, left to right, from 1.

use log::debug;

use super::job::TileJob;
use super::rectangle::CropRectangle;

/// Vertical offset of the first band
pub const FIRST_BAND_TOP: u32 = 256;

/// Distance between the tops of consecutive bands
pub const BAND_SPACING: u32 = 64;

/// Width of every tile
pub const TILE_WIDTH: u32 = 64;

/// Horizontal distance between neighbouring tiles
pub const TILE_STEP: u32 = 64;

/// First `left` offset of each sweep
pub const SWEEP_START: u32 = 0;

/// Exclusive upper bound for `left` in each sweep
pub const SWEEP_END: u32 = 1024;

/// Tile heights of the bands, top to bottom
const BAND_HEIGHTS: [u32; 3] = [64, 64, 96];

/// One horizontal row of tiles sharing a top offset and tile size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub top: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl Band {
    pub fn new(top: u32, tile_width: u32, tile_height: u32) -> Self {
        Band { top, tile_width, tile_height }
    }

    /// Rectangle of the tile whose left edge is at `left`
    pub fn rectangle_at(&self, left: u32) -> CropRectangle {
        CropRectangle::new(self.tile_width, self.tile_height, left, self.top)
    }
}

/// The complete grid of bands and the horizontal sweep shared by all of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayout {
    bands: Vec<Band>,
    sweep_start: u32,
    sweep_end: u32,
    step: u32,
}

impl TileLayout {
    /// Layout of the grassland sheet: three bands starting at y=256,
    /// the last one with taller tiles.
    pub fn standard() -> Self {
        let bands = BAND_HEIGHTS
            .iter()
            .enumerate()
            .map(|(i, &height)| Band::new(FIRST_BAND_TOP + i as u32 * BAND_SPACING, TILE_WIDTH, height))
            .collect();

        TileLayout {
            bands,
            sweep_start: SWEEP_START,
            sweep_end: SWEEP_END,
            step: TILE_STEP,
        }
    }

    /// Bands in sweep order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Left offsets visited by one sweep
    pub fn lefts(&self) -> impl Iterator<Item = u32> {
        (self.sweep_start..self.sweep_end).step_by(self.step as usize)
    }

    /// Rectangles of one band, left to right
    pub fn band_rectangles<'a>(&'a self, band: &'a Band) -> impl Iterator<Item = CropRectangle> + 'a {
        self.lefts().map(move |left| band.rectangle_at(left))
    }

    /// Total number of tiles in the layout
    pub fn tile_count(&self) -> usize {
        self.bands.len() * self.lefts().count()
    }

    /// Enumerate every tile job in output order
    ///
    /// Indices start at 1 and are contiguous: band order first, then left
    /// to right within a band.
    pub fn jobs(&self) -> Vec<TileJob> {
        let jobs: Vec<TileJob> = self
            .bands
            .iter()
            .flat_map(|band| self.band_rectangles(band))
            .zip(1u32..)
            .map(|(rectangle, index)| TileJob::new(rectangle, index))
            .collect();

        debug!("Enumerated {} tile jobs over {} bands", jobs.len(), self.bands.len());
        jobs
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        TileLayout::standard()
    }
}
