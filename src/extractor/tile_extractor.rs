//! Sequential tile sweep
//!
//! The extractor walks a list of `TileJob`s in order and hands each one to
//! a `CropTool`. A failed crop is recorded and the sweep moves on; nothing
//! here aborts early.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::cropper::{CropTool, ExecutionResult, PostProcess};
use crate::tiles::job::TileJob;

/// Default source sheet, read from the working directory
pub const DEFAULT_SOURCE: &str = "grassland_tiles.png";

/// Default directory receiving the numbered tiles
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// A job together with what the crop tool reported for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub job: TileJob,
    pub result: ExecutionResult,
}

/// Per-job outcomes of one sweep, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    outcomes: Vec<JobOutcome>,
}

impl ExtractionSummary {
    pub fn new() -> Self {
        ExtractionSummary { outcomes: Vec::new() }
    }

    pub fn record(&mut self, job: TileJob, result: ExecutionResult) {
        self.outcomes.push(JobOutcome { job, result });
    }

    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.outcomes
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    /// Outcomes with a non-zero exit code
    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| !o.result.is_success())
    }
}

/// Drives a crop tool over a sequence of tile jobs
pub struct TileExtractor<T: CropTool> {
    tool: T,
    source: PathBuf,
    output_dir: PathBuf,
    post_process: Vec<PostProcess>,
}

impl<T: CropTool> TileExtractor<T> {
    /// Create an extractor that trims every tile
    ///
    /// # Arguments
    /// * `tool` - Backend performing the crops
    /// * `source` - Path to the source sheet
    /// * `output_dir` - Directory receiving `<index>.png` files; must exist
    pub fn new(tool: T, source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        TileExtractor {
            tool,
            source: source.into(),
            output_dir: output_dir.into(),
            post_process: vec![PostProcess::Trim],
        }
    }

    /// Replace the post-process flags passed with every crop
    pub fn with_post_process(mut self, post_process: Vec<PostProcess>) -> Self {
        self.post_process = post_process;
        self
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn into_tool(self) -> T {
        self.tool
    }

    /// Crop a single tile
    pub fn run_job(&mut self, job: &TileJob) -> ExecutionResult {
        let destination = job.destination(&self.output_dir);
        let result = self.tool.crop(&self.source, &job.rectangle, &self.post_process, &destination);

        if result.is_success() {
            debug!("Tile {} ({}) -> {}", job.index, job.rectangle, destination.display());
        } else {
            debug!("Tile {} ({}) failed with exit code {}", job.index, job.rectangle, result.exit_code);
        }
        result
    }

    /// Run every job in order
    pub fn run(&mut self, jobs: &[TileJob]) -> ExtractionSummary {
        self.run_with(jobs, |_, _| {})
    }

    /// Run every job in order, calling `on_job` after each one completes
    pub fn run_with<F>(&mut self, jobs: &[TileJob], mut on_job: F) -> ExtractionSummary
    where
        F: FnMut(&TileJob, &ExecutionResult),
    {
        debug!("Extracting {} tiles from {} with {}",
              jobs.len(), self.source.display(), self.tool.name());

        let mut summary = ExtractionSummary::new();
        for job in jobs {
            let result = self.run_job(job);
            on_job(job, &result);
            summary.record(*job, result);
        }

        if summary.failed() == 0 {
            info!("Extracted {} tiles into {}", summary.succeeded(), self.output_dir.display());
        } else {
            warn!("{} of {} tiles failed", summary.failed(), summary.attempted());
        }
        summary
    }
}
