//! LTS Analyzer CLI
//!
//! Command-line entry point of the OSM Cycling Level of Traffic Stress Analyzer.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- -f city.osm
//! cargo run -- -f city.osm -o geojson -p stress_ -t -v
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, invalid output format, file not found, etc.)

use log::{debug, info};
use lts_analyzer::{cli, Options};
use std::process;
use std::time::Instant;

fn init_logging(options: &Options) {
    let level = if options.verbose() { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_module_path(false)
        .init();
}

fn run(options: Options) {
    for arg in options.ignored_arguments() {
        debug!("ignoring unrecognized argument {:?}", arg);
    }
    debug!("loaded {:?}", options);
    info!("input file: {}", options.input().display());
    info!("working directory: {}", options.directory().display());
    info!(
        "output format: {} (files named like {})",
        options.output_format(),
        options.output_file_name(1)
    );
}

fn main() {
    let started = Instant::now();
    // Diagnostics are already printed by the loader
    let options = match cli::load_from_env() {
        Ok(options) => options,
        Err(_) => process::exit(1),
    };
    let elapsed = started.elapsed();

    init_logging(&options);
    if options.timers() {
        info!("options loaded in {:?}", elapsed);
    }

    run(options);
}
