//! Dry-run command
//!
//! Prints the crop command of every tile job in sweep order without
//! running anything.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::options::SweepOptions;
use crate::cropper::ConvertTool;
use crate::tiles::errors::TileResult;
use crate::tiles::layout::TileLayout;
use crate::utils::logger::Logger;

/// Command listing the planned crops
pub struct PlanCommand<'a> {
    options: SweepOptions,
    logger: &'a Logger,
}

impl<'a> PlanCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> TileResult<Self> {
        info!("Creating new plan command from arguments");
        Ok(PlanCommand::from_options(SweepOptions::from_args(args)?, logger))
    }

    pub fn from_options(options: SweepOptions, logger: &'a Logger) -> Self {
        PlanCommand { options, logger }
    }

    /// Command lines of every job, in sweep order
    pub fn plan(&self) -> Vec<String> {
        let tool = ConvertTool::new(self.options.tool.clone());
        let post_process = self.options.post_process();

        TileLayout::standard()
            .jobs()
            .iter()
            .map(|job| {
                tool.command_line(
                    &self.options.source,
                    &job.rectangle,
                    &post_process,
                    &job.destination(&self.options.output_dir),
                )
            })
            .collect()
    }
}

impl<'a> Command for PlanCommand<'a> {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn execute(&self) -> TileResult<()> {
        let plan = self.plan();
        self.logger.log(&format!("Dry run: {} tiles", plan.len()))?;
        for line in &plan {
            println!("{}", line);
            self.logger.log(line)?;
        }
        Ok(())
    }
}
