//! ImageMagick `convert` backend
//!
//! Runs `convert <source> -crop WxH+L+T [-trim] <destination>` as a child
//! process. Arguments are passed as a vector, never through a shell, so
//! paths with spaces or metacharacters are handed over untouched.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, trace};

use crate::tiles::rectangle::CropRectangle;

use super::crop_strategy::{CropTool, ExecutionResult, PostProcess};

/// Default ImageMagick program name
pub const DEFAULT_PROGRAM: &str = "convert";

/// Crop tool that shells out to ImageMagick
#[derive(Debug, Clone)]
pub struct ConvertTool {
    program: String,
}

impl ConvertTool {
    /// Create a backend invoking `program`
    pub fn new(program: impl Into<String>) -> Self {
        ConvertTool { program: program.into() }
    }

    /// Argument vector for one crop, without the program name
    pub fn build_args(source: &Path, rectangle: &CropRectangle,
                      post_process: &[PostProcess], destination: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(4 + post_process.len());
        args.push(source.as_os_str().to_os_string());
        args.push("-crop".into());
        args.push(rectangle.geometry().into());
        args.extend(post_process.iter().map(|p| OsString::from(p.flag())));
        args.push(destination.as_os_str().to_os_string());
        args
    }

    /// Human-readable command line, for dry runs and logs
    pub fn command_line(&self, source: &Path, rectangle: &CropRectangle,
                        post_process: &[PostProcess], destination: &Path) -> String {
        let mut line = self.program.clone();
        for arg in Self::build_args(source, rectangle, post_process, destination) {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

impl Default for ConvertTool {
    fn default() -> Self {
        ConvertTool::new(DEFAULT_PROGRAM)
    }
}

impl CropTool for ConvertTool {
    fn crop(&mut self, source: &Path, rectangle: &CropRectangle,
            post_process: &[PostProcess], destination: &Path) -> ExecutionResult {
        let args = Self::build_args(source, rectangle, post_process, destination);
        trace!("Running {} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) => {
                if !output.stderr.is_empty() {
                    debug!("{} stderr: {}", self.program, String::from_utf8_lossy(&output.stderr).trim());
                }
                ExecutionResult::from_output(output)
            }
            Err(e) => {
                debug!("Failed to start {}: {}", self.program, e);
                ExecutionResult::from_spawn_error(&e)
            }
        }
    }

    fn name(&self) -> &str {
        &self.program
    }
}
