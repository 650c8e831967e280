//! Command-line definition
//!
//! Kept in the library so commands can be built from parsed arguments in
//! tests as well as from `main`.

use clap::{Arg, ArgAction, Command as ClapCommand};

use crate::cropper::DEFAULT_PROGRAM;
use crate::extractor::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE};

/// Default path of the run report
pub const DEFAULT_LOG_FILE: &str = "tilesweep.log";

/// Path of the file receiving `log` facade records
pub const GLOBAL_LOG_FILE: &str = "tilesweep-global.log";

/// Build the clap command for the `tilesweep` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("tilesweep")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Cut a tiled sprite sheet into numbered tile images")
        .arg(
            Arg::new("source")
                .help("Source sprite sheet")
                .default_value(DEFAULT_SOURCE)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Existing directory receiving <index>.png tiles")
                .value_name("DIR")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("tool")
                .long("tool")
                .help("ImageMagick program used for cropping")
                .value_name("PROGRAM")
                .default_value(DEFAULT_PROGRAM),
        )
        .arg(
            Arg::new("no-trim")
                .long("no-trim")
                .help("Do not trim borders from cropped tiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("List the crop commands without running them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Per-tile run report")
                .value_name("FILE")
                .default_value(DEFAULT_LOG_FILE),
        )
}
