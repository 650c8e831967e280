use std::process;
use log::{error, info, LevelFilter};

use tilesweep::utils::logger::Logger;
use tilesweep::commands::cli::{build_cli, DEFAULT_LOG_FILE, GLOBAL_LOG_FILE};
use tilesweep::commands::{CommandFactory, TilesweepCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let log_file = matches
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_FILE);
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = Logger::init_global_logger(GLOBAL_LOG_FILE, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = TilesweepCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            info!("Running {} command", command.name());
            if let Err(e) = command.execute() {
                error!("{} command failed: {}", command.name(), e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
