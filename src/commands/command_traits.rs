//! Command pattern interfaces
//!
//! A tilesweep invocation is either a real sweep or a dry run. Both are
//! `Command`s picked by a `CommandFactory` from the parsed CLI arguments
//! and handed the run-report logger.

use crate::utils::logger::Logger;
use crate::tiles::errors::TileResult;

/// Represents an executable command in the application
pub trait Command {
    /// Short name used in log and error messages
    fn name(&self) -> &'static str;

    /// Execute the command
    ///
    /// Only setup problems are returned as errors. Individual tile
    /// failures are reported, not propagated.
    fn execute(&self) -> TileResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Pick the command for `args`
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from `commands::cli::build_cli`
    /// * `logger` - Logger receiving the run report
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> TileResult<Box<dyn Command + 'a>>;
}
