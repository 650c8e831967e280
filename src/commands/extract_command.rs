//! Tile extraction command
//!
//! Runs the full sweep: every job of the standard layout is cropped with
//! the configured tool, a report line per tile goes to the run log, and a
//! summary is printed at the end. Failed tiles never stop the sweep and
//! never turn into a command error.

use std::path::Path;

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::commands::options::SweepOptions;
use crate::cropper::{ConvertTool, ExecutionResult};
use crate::extractor::{ExtractionSummary, TileExtractor};
use crate::tiles::errors::TileResult;
use crate::tiles::job::TileJob;
use crate::tiles::layout::TileLayout;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for cutting the sheet into tiles
pub struct ExtractCommand<'a> {
    /// Source, destination and tool settings
    options: SweepOptions,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Logger receiving the run report
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger receiving the run report
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> TileResult<Self> {
        info!("Creating new extract command from arguments");
        let command = ExtractCommand::from_options(SweepOptions::from_args(args)?, logger);

        // Verbose records go to stderr and would tear through the bar
        if args.get_flag("verbose") {
            Ok(command.without_progress())
        } else {
            Ok(command)
        }
    }

    pub fn from_options(options: SweepOptions, logger: &'a Logger) -> Self {
        ExtractCommand {
            options,
            show_progress: true,
            logger,
        }
    }

    /// Disable the progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Run every tile job and return the per-job outcomes
    ///
    /// Report-file write errors are logged and skipped so that a broken
    /// report never keeps a tile from being cropped.
    pub fn sweep(&self) -> ExtractionSummary {
        let jobs = TileLayout::standard().jobs();
        info!("Cropping {} tiles from {} with {}",
              jobs.len(), self.options.source.display(), self.options.tool);

        self.report(&format!(
            "Sweep of {} with {} into {}",
            self.options.source.display(),
            self.options.tool,
            self.options.output_dir.display()
        ));

        let total = jobs.len() as u64;
        let progress = if self.show_progress {
            ProgressTracker::new(total, "Cropping tiles")
        } else {
            ProgressTracker::hidden(total)
        };

        let tool = ConvertTool::new(self.options.tool.clone());
        let mut extractor = TileExtractor::new(tool, &self.options.source, &self.options.output_dir)
            .with_post_process(self.options.post_process());

        let output_dir = self.options.output_dir.clone();
        let summary = extractor.run_with(&jobs, |job, result| {
            self.report(&report_line(job, result, &output_dir));
            progress.set_message(&job.file_name());
            progress.advance();
        });
        if !progress.is_finished() {
            progress.finish();
        }

        self.report(&summary_line(&summary));
        summary
    }

    fn report(&self, line: &str) {
        if let Err(e) = self.logger.log(line) {
            warn!("Failed to write run report: {}", e);
        }
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn execute(&self) -> TileResult<()> {
        let summary = self.sweep();
        println!("{}", summary_line(&summary));
        Ok(())
    }
}

/// One line of the run report, e.g. `#1 64x64+0+256 -> images/1.png [exit 0]`
pub fn report_line(job: &TileJob, result: &ExecutionResult, output_dir: &Path) -> String {
    let mut line = format!(
        "#{} {} -> {} [exit {}]",
        job.index,
        job.rectangle,
        job.destination(output_dir).display(),
        result.exit_code
    );
    if !result.is_success() && !result.output.is_empty() {
        line.push_str(": ");
        line.push_str(String::from_utf8_lossy(&result.output).trim());
    }
    line
}

/// Closing line of the run report
pub fn summary_line(summary: &ExtractionSummary) -> String {
    format!(
        "Cropped {} of {} tiles ({} failed)",
        summary.succeeded(),
        summary.attempted(),
        summary.failed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cli::build_cli;
    use crate::tiles::rectangle::CropRectangle;

    #[test]
    fn test_verbose_hides_progress() {
        let logger = Logger::disabled();
        let quiet = build_cli().try_get_matches_from(["tilesweep"]).unwrap();
        let verbose = build_cli().try_get_matches_from(["tilesweep", "-v"]).unwrap();

        assert!(ExtractCommand::new(&quiet, &logger).unwrap().show_progress);
        assert!(!ExtractCommand::new(&verbose, &logger).unwrap().show_progress);
    }

    #[test]
    fn test_report_line_success() {
        let job = TileJob::new(CropRectangle::new(64, 64, 0, 256), 1);
        let line = report_line(&job, &ExecutionResult::success(), Path::new("images"));
        assert_eq!(line, format!("#1 64x64+0+256 -> {} [exit 0]", Path::new("images").join("1.png").display()));
    }

    #[test]
    fn test_report_line_failure_includes_output() {
        let job = TileJob::new(CropRectangle::new(64, 96, 960, 384), 48);
        let result = ExecutionResult::new(1, b"no such file\n".to_vec());
        let line = report_line(&job, &result, Path::new("images"));
        assert!(line.starts_with("#48 64x96+960+384 -> "));
        assert!(line.ends_with("[exit 1]: no such file"));
    }

    #[test]
    fn test_summary_line() {
        let mut summary = ExtractionSummary::new();
        summary.record(TileJob::new(CropRectangle::new(64, 64, 0, 256), 1), ExecutionResult::success());
        summary.record(TileJob::new(CropRectangle::new(64, 64, 64, 256), 2), ExecutionResult::new(127, Vec::new()));
        assert_eq!(summary_line(&summary), "Cropped 1 of 2 tiles (1 failed)");
    }
}
