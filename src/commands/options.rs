//! Sweep options shared by the commands

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::cropper::PostProcess;
use crate::tiles::errors::{TileError, TileResult};

/// Where to read, where to write, and which tool to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Path to the source sheet
    pub source: PathBuf,
    /// Directory receiving the tiles
    pub output_dir: PathBuf,
    /// Crop program name or path
    pub tool: String,
    /// Whether to pass the trim flag
    pub trim: bool,
}

impl SweepOptions {
    /// Read options from parsed CLI arguments
    pub fn from_args(args: &ArgMatches) -> TileResult<Self> {
        let source = args.get_one::<String>("source")
            .ok_or_else(|| TileError::InvalidArgument("Missing source image".to_string()))?;
        let output_dir = args.get_one::<String>("output-dir")
            .ok_or_else(|| TileError::InvalidArgument("Missing output directory".to_string()))?;
        let tool = args.get_one::<String>("tool")
            .ok_or_else(|| TileError::InvalidArgument("Missing crop tool".to_string()))?;

        if tool.trim().is_empty() {
            return Err(TileError::InvalidArgument("Crop tool name is empty".to_string()));
        }

        let options = SweepOptions {
            source: PathBuf::from(source),
            output_dir: PathBuf::from(output_dir),
            tool: tool.clone(),
            trim: !args.get_flag("no-trim"),
        };
        info!("Sweep options: {:?}", options);
        Ok(options)
    }

    /// Post-process flags passed with every crop
    pub fn post_process(&self) -> Vec<PostProcess> {
        if self.trim {
            vec![PostProcess::Trim]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cli::build_cli;

    #[test]
    fn test_defaults() {
        let args = build_cli().try_get_matches_from(["tilesweep"]).unwrap();
        let options = SweepOptions::from_args(&args).unwrap();

        assert_eq!(options.source, PathBuf::from("grassland_tiles.png"));
        assert_eq!(options.output_dir, PathBuf::from("images"));
        assert_eq!(options.tool, "convert");
        assert_eq!(options.post_process(), vec![PostProcess::Trim]);
    }

    #[test]
    fn test_overrides() {
        let args = build_cli()
            .try_get_matches_from(["tilesweep", "sheet.png", "-o", "tiles", "--tool", "magick", "--no-trim"])
            .unwrap();
        let options = SweepOptions::from_args(&args).unwrap();

        assert_eq!(options.source, PathBuf::from("sheet.png"));
        assert_eq!(options.output_dir, PathBuf::from("tiles"));
        assert_eq!(options.tool, "magick");
        assert!(options.post_process().is_empty());
    }

    #[test]
    fn test_empty_tool_rejected() {
        let args = build_cli().try_get_matches_from(["tilesweep", "--tool", " "]).unwrap();
        assert!(matches!(SweepOptions::from_args(&args), Err(TileError::InvalidArgument(_))));
    }
}
