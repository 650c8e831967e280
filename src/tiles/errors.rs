//! Custom error types for tile extraction

use std::fmt;
use std::io;

/// Tile extraction error types
#[derive(Debug)]
pub enum TileError {
    /// I/O error
    IoError(io::Error),
    /// External crop tool exited with a non-zero code
    SubprocessFailure {
        exit_code: i32,
        output: Vec<u8>,
    },
    /// Bad command-line or caller supplied value
    InvalidArgument(String),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::IoError(e) => write!(f, "I/O error: {}", e),
            TileError::SubprocessFailure { exit_code, output } => write!(
                f,
                "Crop tool failed with exit code {}: {}",
                exit_code,
                String::from_utf8_lossy(output).trim()
            ),
            TileError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for TileError {}

impl From<io::Error> for TileError {
    fn from(error: io::Error) -> Self {
        TileError::IoError(error)
    }
}

/// Result type for tile operations
pub type TileResult<T> = Result<T, TileError>;
