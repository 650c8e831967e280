//! Crop tool strategy definitions
//!
//! The sweep never touches pixels itself. Every tile is produced by a
//! `CropTool`, which takes the source path, a rectangle, post-process flags
//! and a destination, and reports an exit code plus captured output.

use std::io;
use std::path::Path;
use std::process::Output;

use crate::tiles::errors::{TileError, TileResult};
use crate::tiles::rectangle::CropRectangle;

/// Exit code reported when the tool program cannot be found
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Exit code reported for other spawn errors and for signal termination
pub const ABNORMAL_EXIT_CODE: i32 = -1;

/// Post-processing applied by the crop tool after cropping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Strip uniform borders from the cropped tile
    Trim,
}

impl PostProcess {
    /// Command-line flag understood by ImageMagick
    pub fn flag(&self) -> &'static str {
        match self {
            PostProcess::Trim => "-trim",
        }
    }
}

/// Outcome of one crop invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Process exit code, 0 on success
    pub exit_code: i32,

    /// Captured standard output
    pub output: Vec<u8>,
}

impl ExecutionResult {
    pub fn new(exit_code: i32, output: Vec<u8>) -> Self {
        ExecutionResult { exit_code, output }
    }

    /// Successful run with no output
    pub fn success() -> Self {
        ExecutionResult::new(0, Vec::new())
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Build a result from a finished child process
    pub fn from_output(output: Output) -> Self {
        let exit_code = output.status.code().unwrap_or(ABNORMAL_EXIT_CODE);
        ExecutionResult::new(exit_code, output.stdout)
    }

    /// Build a result for a process that could not be started
    pub fn from_spawn_error(error: &io::Error) -> Self {
        let exit_code = match error.kind() {
            io::ErrorKind::NotFound => NOT_FOUND_EXIT_CODE,
            _ => ABNORMAL_EXIT_CODE,
        };
        ExecutionResult::new(exit_code, error.to_string().into_bytes())
    }

    /// Turn a non-zero exit into `TileError::SubprocessFailure`
    pub fn into_result(self) -> TileResult<Vec<u8>> {
        if self.is_success() {
            Ok(self.output)
        } else {
            Err(TileError::SubprocessFailure {
                exit_code: self.exit_code,
                output: self.output,
            })
        }
    }
}

/// Strategy for producing one tile file from a region of the source image
///
/// Implementations must not panic or return early on failure: every
/// problem is reported through the returned `ExecutionResult`.
pub trait CropTool {
    /// Crop `rectangle` out of `source`, apply `post_process`, write to `destination`
    ///
    /// # Arguments
    /// * `source` - Path to the source sheet
    /// * `rectangle` - Region to crop
    /// * `post_process` - Flags applied after cropping, in order
    /// * `destination` - Path of the tile file to write
    ///
    /// # Returns
    /// Exit code and captured output of the invocation
    fn crop(&mut self, source: &Path, rectangle: &CropRectangle,
            post_process: &[PostProcess], destination: &Path) -> ExecutionResult;

    /// Short name used in log messages
    fn name(&self) -> &str;
}
