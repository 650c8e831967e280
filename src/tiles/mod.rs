//! Tile geometry module
//!
//! This module describes what gets cut out of the sprite sheet: crop
//! rectangles, the fixed band layout, and the numbered jobs derived from it.

pub mod errors;
pub mod rectangle;
pub mod job;
pub mod layout;
#[cfg(test)]
mod tests;

pub use errors::{TileError, TileResult};
pub use rectangle::CropRectangle;
pub use job::TileJob;
pub use layout::{Band, TileLayout};
