//! External crop tools
//!
//! This module defines the `CropTool` strategy used by the sweep and the
//! ImageMagick backend that implements it.

mod crop_strategy;
mod convert_strategy;

pub use crop_strategy::{CropTool, ExecutionResult, PostProcess, NOT_FOUND_EXIT_CODE, ABNORMAL_EXIT_CODE};
pub use convert_strategy::{ConvertTool, DEFAULT_PROGRAM};
