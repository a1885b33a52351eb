use clap::ValueEnum;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Program description shown at the top of the usage text
pub const DESCRIPTION: &str = "OSM Cycling Level of Traffic Stress Analyzer";

/// Prefix applied to every output file when `-p` is not given
pub const DEFAULT_PREFIX: &str = "level_";

/// Format of the files written by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// OpenStreetMap XML
    #[default]
    #[value(name = "osm")]
    Osm,
    /// GeoJSON feature collections
    #[value(name = "geojson")]
    GeoJson,
}

impl OutputFormat {
    /// Parse a `-o` token
    ///
    /// Surrounding whitespace is ignored and the comparison is case-insensitive,
    /// so `OSM`, ` osm ` and `OsM` all select [`OutputFormat::Osm`].
    pub fn parse_token(token: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(token.trim(), true).ok()
    }

    /// Canonical lower-case token for this format
    pub fn token(&self) -> &'static str {
        match self {
            OutputFormat::Osm => "osm",
            OutputFormat::GeoJson => "geojson",
        }
    }

    /// File extension used for output files of this format
    pub fn extension(&self) -> &'static str {
        self.token()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Validated run configuration
///
/// Built once by [`Options::load`] at startup and passed by value
/// to the rest of the program. Outside this crate the fields are only
/// reachable through accessors, so a loaded record cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub(crate) input: PathBuf,
    pub(crate) directory: PathBuf,
    pub(crate) prefix: String,
    pub(crate) output_format: OutputFormat,
    pub(crate) verbose: bool,
    pub(crate) timers: bool,
    pub(crate) ignored: Vec<OsString>,
}

impl Options {
    /// Defaults applied before the arguments are scanned
    pub(crate) fn with_directory(directory: PathBuf) -> Self {
        Self {
            input: PathBuf::new(),
            directory,
            prefix: DEFAULT_PREFIX.to_string(),
            output_format: OutputFormat::default(),
            verbose: false,
            timers: false,
            ignored: Vec::new(),
        }
    }

    /// Path to the OSM XML input file
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Working directory at the time the options were loaded
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Prefix for all output files
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Format of the files to write
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Whether `-v` was given
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether `-t` was given
    pub fn timers(&self) -> bool {
        self.timers
    }

    /// Arguments that were skipped because no flag recognizes them
    pub fn ignored_arguments(&self) -> &[OsString] {
        &self.ignored
    }

    /// Name of the output file for one stress level, e.g. `level_1.geojson`
    pub fn output_file_name(&self, level: u8) -> String {
        format!(
            "{}{}.{}",
            self.prefix,
            level,
            self.output_format.extension()
        )
    }
}
