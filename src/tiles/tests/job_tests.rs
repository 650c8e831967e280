//! Tests for crop rectangles and tile jobs

extern crate std;

use std::path::{Path, PathBuf};

use crate::tiles::job::TileJob;
use crate::tiles::rectangle::CropRectangle;

#[test]
fn test_rectangle_geometry_string() {
    let rect = CropRectangle::new(64, 96, 960, 384);
    std::assert_eq!(rect.geometry(), "64x96+960+384");
    std::assert_eq!(rect.to_string(), "64x96+960+384");
}

#[test]
fn test_rectangle_edges() {
    let rect = CropRectangle::new(64, 96, 960, 384);
    std::assert_eq!(rect.right(), 1024);
    std::assert_eq!(rect.bottom(), 480);
}

#[test]
fn test_job_destination() {
    let job = TileJob::new(CropRectangle::new(64, 64, 0, 256), 1);
    std::assert_eq!(job.file_name(), "1.png");
    std::assert_eq!(job.destination(Path::new("images")), PathBuf::from("images").join("1.png"));
}
