use crate::types::{OutputFormat, DEFAULT_PREFIX, DESCRIPTION};
use clap::ValueEnum;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

/// Name shown in the usage synopsis when `argv[0]` is unavailable
const FALLBACK_PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Program name for the usage text, derived from `argv[0]`
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_PROGRAM)
        .to_string()
}

/// Accepted `-o` tokens, quoted and joined, e.g. `"osm" or "geojson"`
fn output_formats() -> String {
    OutputFormat::value_variants()
        .iter()
        .filter_map(|format| format.to_possible_value())
        .map(|value| format!("\"{}\"", value.get_name()))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Write the usage text for `program` to `out`
pub fn write_usage(out: &mut dyn Write, program: &str) -> io::Result<()> {
    writeln!(out, "{}", DESCRIPTION)?;
    writeln!(
        out,
        "Usage: {} -f filename [-o otype] [-p prefix] [-t] [-v]",
        program
    )?;
    writeln!(out, "where:")?;
    writeln!(out, " filename is path to the OSM XML input file.")?;
    writeln!(
        out,
        " otype    is the output file type. It is either {}.",
        output_formats()
    )?;
    writeln!(out, "          The default is {}.", OutputFormat::default())?;
    writeln!(out, " prefix   is the prefix to be used for all output files.")?;
    writeln!(out, "          The default is \"{}\".", DEFAULT_PREFIX)?;
    writeln!(out, " -t       Enables timer output.")?;
    writeln!(out, " -v       Enables verbose output.")?;
    Ok(())
}
