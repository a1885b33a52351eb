// CLI module
// Command-line scanning, usage text and diagnostic reporting

mod args;
mod usage;

pub use usage::{program_name, write_usage};

use crate::types::{Options, OptionsError};
use std::ffi::OsStr;
use std::io::{self, Write};

/// Load options and report any failure to `out`
///
/// Runs [`Options::load`] over `args` (program name excluded). On failure the
/// diagnostic is written to `out` before the error is returned: the usage text
/// for missing required values, a single `Error:` line otherwise.
pub fn load<I, S>(program: &str, args: I, out: &mut dyn Write) -> Result<Options, OptionsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Options::load(args).map_err(|error| {
        report(&error, program, out);
        error
    })
}

/// Load options from the process arguments, reporting failures on stdout
pub fn load_from_env() -> Result<Options, OptionsError> {
    let mut args = std::env::args_os();
    let program = program_name(args.next().as_deref());
    load(&program, args, &mut io::stdout())
}

fn report(error: &OptionsError, program: &str, out: &mut dyn Write) {
    let written = if error.shows_usage() {
        write_usage(out, program)
    } else {
        writeln!(out, "Error: {}", error)
    };
    // Nothing left to report to if the diagnostic stream itself is gone
    let _ = written.and_then(|_| out.flush());
}
