//! LTS Analyzer Library
//! # Overview
//!
//! Command-line front end of the OSM Cycling Level of Traffic Stress Analyzer.
//! It turns the process arguments into a validated, immutable [`Options`]
//! record that the entry point hands to the rest of the program.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Options, OutputFormat, OptionsError)
//! - [`cli`] - Argument scanning, usage text and diagnostic reporting
//!
//! # Arguments
//!
//! - `-f <path>`: OSM XML input file (required, must exist)
//! - `-o osm|geojson`: output format, case-insensitive (default `osm`)
//! - `-p <prefix>`: prefix for all output files (default `level_`)
//! - `-t`: enable timer output
//! - `-v`: enable verbose output
//!
//! Unrecognized arguments are ignored.

// Module declarations
pub mod cli;
pub mod types;

pub use types::{Options, OptionsError, OutputFormat};
