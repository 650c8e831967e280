//! CLI command implementations
//!
//! This module contains the commands supported by the CLI application
//! using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod options;
pub mod extract_command;
pub mod plan_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use plan_command::PlanCommand;
pub use options::SweepOptions;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::tiles::errors::TileResult;

/// Factory for creating command instances based on CLI arguments
pub struct TilesweepCommandFactory;

impl TilesweepCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TilesweepCommandFactory
    }
}

impl Default for TilesweepCommandFactory {
    fn default() -> Self {
        TilesweepCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for TilesweepCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> TileResult<Box<dyn Command + 'a>> {
        if args.get_flag("dry-run") {
            Ok(Box::new(PlanCommand::new(args, logger)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cli::build_cli;

    fn command_name(argv: &[&str]) -> &'static str {
        let logger = Logger::disabled();
        let args = build_cli().try_get_matches_from(argv).unwrap();
        let command = TilesweepCommandFactory::new().create_command(&args, &logger).unwrap();
        command.name()
    }

    #[test]
    fn test_factory_defaults_to_extract() {
        assert_eq!(command_name(&["tilesweep"]), "extract");
    }

    #[test]
    fn test_factory_dry_run_plans() {
        assert_eq!(command_name(&["tilesweep", "--dry-run"]), "plan");
        assert_eq!(command_name(&["tilesweep", "-n", "sheet.png"]), "plan");
    }

    #[test]
    fn test_factory_rejects_empty_tool() {
        let logger = Logger::disabled();
        let args = build_cli().try_get_matches_from(["tilesweep", "--tool", " "]).unwrap();
        assert!(TilesweepCommandFactory::new().create_command(&args, &logger).is_err());
    }
}
