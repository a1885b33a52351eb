//! Types module
//!
//! Contains the data structures shared by the loader and its callers:
//! - `options`: the validated configuration record and output format
//! - `error`: error types for option loading

pub mod error;
pub mod options;

pub use error::OptionsError;
pub use options::{Options, OutputFormat, DEFAULT_PREFIX, DESCRIPTION};
