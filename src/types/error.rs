//! Error types for the option loader
//!
//! Every way loading the command line can fail. Messages are written for the
//! person running the tool and are printed as `Error: <message>`.
//!
//! # Error Categories
//!
//! - **Argument Errors**: a flag without its value, an unknown output format
//! - **Validation Errors**: required values left empty, input file missing
//! - **Environment Errors**: the working directory cannot be determined

use thiserror::Error;

/// Main error type for option loading
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    /// A value-taking flag was the last argument
    #[error("{flag} command line argument must be followed by {expected}.")]
    MissingValue {
        /// The flag as typed, e.g. `-f`
        flag: &'static str,
        /// What should have followed the flag
        expected: &'static str,
    },

    /// `-o` was followed by something other than `osm` or `geojson`
    #[error("-o command line argument must be either OSM or GeoJSON, got '{value}'.")]
    InvalidOutputFormat {
        /// The rejected token, as given
        value: String,
    },

    /// The input path or the output prefix is empty after scanning
    ///
    /// Reported to the user with the full usage text.
    #[error("an input file (-f) and a non-empty output prefix (-p) are required.")]
    MissingRequired,

    /// The input path does not name an existing file
    #[error("File '{path}' does not exist.")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while inspecting the environment
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for OptionsError {
    fn from(error: std::io::Error) -> Self {
        OptionsError::IoError {
            message: error.to_string(),
        }
    }
}

impl OptionsError {
    /// Create a MissingValue error
    pub fn missing_value(flag: &'static str, expected: &'static str) -> Self {
        OptionsError::MissingValue { flag, expected }
    }

    /// Create an InvalidOutputFormat error
    pub fn invalid_output_format(value: &str) -> Self {
        OptionsError::InvalidOutputFormat {
            value: value.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        OptionsError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Whether the usage text should be shown instead of a one-line diagnostic
    pub fn shows_usage(&self) -> bool {
        matches!(self, OptionsError::MissingRequired)
    }
}
