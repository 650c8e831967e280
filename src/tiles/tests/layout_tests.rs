//! Tests for the tile layout

extern crate std;

use crate::tiles::layout::{TileLayout, SWEEP_END};
use crate::tiles::rectangle::CropRectangle;

#[test]
fn test_standard_layout_has_three_bands() {
    let layout = TileLayout::standard();
    std::assert_eq!(layout.bands().len(), 3);
    std::assert_eq!(layout.tile_count(), 48);
}

#[test]
fn test_band_tops_step_by_64() {
    let layout = TileLayout::standard();
    let tops: Vec<u32> = layout.bands().iter().map(|b| b.top).collect();
    std::assert_eq!(tops, vec![256, 320, 384]);
}

#[test]
fn test_band_tile_sizes() {
    let layout = TileLayout::standard();
    let bands = layout.bands();

    std::assert_eq!((bands[0].tile_width, bands[0].tile_height), (64, 64));
    std::assert_eq!((bands[1].tile_width, bands[1].tile_height), (64, 64));
    std::assert_eq!((bands[2].tile_width, bands[2].tile_height), (64, 96));
}

#[test]
fn test_each_band_sweeps_sixteen_lefts() {
    let layout = TileLayout::standard();
    let expected: Vec<u32> = (0..16).map(|i| i * 64).collect();

    for band in layout.bands() {
        let lefts: Vec<u32> = layout.band_rectangles(band).map(|r| r.left).collect();
        std::assert_eq!(lefts, expected);
        std::assert!(lefts.iter().all(|&left| left < SWEEP_END));
        std::assert!(layout.band_rectangles(band).all(|r| r.top == band.top));
    }
}

#[test]
fn test_job_indices_are_contiguous() {
    let jobs = TileLayout::standard().jobs();
    let indices: Vec<u32> = jobs.iter().map(|j| j.index).collect();
    std::assert_eq!(indices, (1..=48).collect::<Vec<u32>>());
}

#[test]
fn test_jobs_are_band_major() {
    let jobs = TileLayout::standard().jobs();

    // Each block of 16 shares a top and walks left to right
    for (band_no, chunk) in jobs.chunks(16).enumerate() {
        let top = 256 + band_no as u32 * 64;
        for (i, job) in chunk.iter().enumerate() {
            std::assert_eq!(job.rectangle.top, top);
            std::assert_eq!(job.rectangle.left, i as u32 * 64);
        }
    }
}

#[test]
fn test_first_and_last_jobs() {
    let jobs = TileLayout::standard().jobs();

    std::assert_eq!(jobs[0].index, 1);
    std::assert_eq!(jobs[0].rectangle, CropRectangle::new(64, 64, 0, 256));

    let last = jobs.last().unwrap();
    std::assert_eq!(last.index, 48);
    std::assert_eq!(last.rectangle, CropRectangle::new(64, 96, 960, 384));
}

#[test]
fn test_band_boundaries() {
    let jobs = TileLayout::standard().jobs();

    std::assert_eq!(jobs[15].rectangle, CropRectangle::new(64, 64, 960, 256));
    std::assert_eq!(jobs[16].rectangle, CropRectangle::new(64, 64, 0, 320));
    std::assert_eq!(jobs[32].rectangle, CropRectangle::new(64, 96, 0, 384));
}

#[test]
fn test_enumeration_is_deterministic() {
    std::assert_eq!(TileLayout::standard().jobs(), TileLayout::default().jobs());
}
