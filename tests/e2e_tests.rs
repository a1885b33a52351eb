//! End-to-end integration tests
//!
//! These tests run the compiled binary the way a user would and check:
//! 1. The process exit code
//! 2. What was printed to stdout (usage text or a single `Error:` line)
//!
//! Input files are real temporary files so the existence check runs against
//! the filesystem.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::ffi::OsStr;
    use std::io::Write;
    use std::process::{Command, Output};
    use tempfile::{Builder, NamedTempFile};

    /// Run the binary with `args` and capture its output
    fn run_binary<S: AsRef<OsStr>>(args: &[S]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_lts-analyzer"))
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap_or_else(|e| panic!("Failed to run binary: {}", e))
    }

    fn osm_input() -> NamedTempFile {
        let mut file = Builder::new()
            .suffix(".osm")
            .tempfile()
            .expect("Failed to create temp file");
        writeln!(file, "<osm version=\"0.6\"></osm>").expect("Failed to write temp file");
        file
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    #[rstest]
    #[case::defaults(&[])]
    #[case::geojson(&["-o", "GeoJSON"])]
    #[case::all_flags(&["-p", "custom_", "-t", "-v"])]
    #[case::unknown_ignored(&["--unknown", "-x"])]
    #[case::help_ignored(&["-h"])]
    fn test_successful_load(#[case] extra: &[&str]) {
        let input = osm_input();
        let mut args = vec!["-f", input.path().to_str().unwrap()];
        args.extend_from_slice(extra);

        let output = run_binary(&args);

        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        assert!(stdout(&output).is_empty());
    }

    #[rstest]
    #[case::no_arguments(&[])]
    #[case::only_switches(&["-t", "-v"])]
    #[case::empty_prefix(&["-f", "whatever.osm", "-p", ""])]
    fn test_usage_on_missing_required(#[case] args: &[&str]) {
        let output = run_binary(args);

        assert_eq!(output.status.code(), Some(1));
        let text = stdout(&output);
        assert!(text.starts_with("OSM Cycling Level of Traffic Stress Analyzer"));
        assert!(text.contains("Usage: lts-analyzer -f filename"));
    }

    #[rstest]
    #[case::verbose(true)]
    #[case::quiet(false)]
    fn test_verbose_debug_lines(#[case] verbose: bool) {
        let input = osm_input();
        let mut args = vec!["-f", input.path().to_str().unwrap(), "-zz"];
        if verbose {
            args.push("-v");
        }

        let output = run_binary(&args);

        assert!(output.status.success());
        let log = String::from_utf8_lossy(&output.stderr);
        assert!(log.contains("input file:"), "stderr: {}", log);
        assert_eq!(log.contains("ignoring unrecognized argument \"-zz\""), verbose, "stderr: {}", log);
        assert_eq!(log.contains("loaded Options"), verbose, "stderr: {}", log);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_input_path() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.osm"));
        std::fs::write(&path, "<osm/>").expect("Failed to write temp file");

        let output = run_binary(&[OsStr::new("-f"), path.as_os_str()]);

        assert_eq!(output.status.code(), Some(0));
        assert!(stdout(&output).is_empty());
    }

    #[rstest]
    #[case::missing_file_path(&["-v", "-f"], "must be followed by a file path")]
    #[case::missing_file_path_after_help(&["-h", "-f"], "must be followed by a file path")]
    #[case::missing_format(&["-o"], "must be followed by either OSM or GeoJSON")]
    #[case::missing_prefix(&["-p"], "must be followed by a file prefix")]
    #[case::invalid_format(&["-f", "a.osm", "-o", "xml"], "must be either OSM or GeoJSON")]
    #[case::nonexistent(&["-f", "nonexistent.xml"], "File 'nonexistent.xml' does not exist.")]
    fn test_error_diagnostics(#[case] args: &[&str], #[case] expected: &str) {
        let output = run_binary(args);

        assert_eq!(output.status.code(), Some(1));
        let text = stdout(&output);
        assert!(text.starts_with("Error: "), "unexpected output: {}", text);
        assert!(text.contains(expected), "unexpected output: {}", text);
    }

    #[test]
    fn test_timers_logged() {
        let input = osm_input();
        let output = run_binary(&["-f", input.path().to_str().unwrap(), "-t"]);

        assert!(output.status.success());
        let log = String::from_utf8_lossy(&output.stderr);
        assert!(log.contains("options loaded in"), "stderr: {}", log);
    }
}
