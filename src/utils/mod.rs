//! Utility modules for common functionality
//!
//! Logging and progress reporting shared by the commands.

pub mod logger;
pub mod progress;
