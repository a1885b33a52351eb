use crate::types::{Options, OptionsError, OutputFormat};
use std::ffi::OsStr;
use std::path::PathBuf;

impl Options {
    /// Load options from command-line tokens
    ///
    /// `args` are the process arguments without the program name. The working
    /// directory is taken from the process at call time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `-f`, `-o` or `-p` is the last token
    /// - `-o` is followed by anything but `osm` or `geojson`
    /// - the input path or the output prefix ends up empty
    /// - the input path is not an existing file
    pub fn load<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let directory = std::env::current_dir()?;
        Self::load_in(directory, args)
    }

    /// Same as [`Options::load`] with an explicit working directory
    pub fn load_in<I, S>(directory: PathBuf, args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut options = Options::with_directory(directory);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            // Flags are ASCII; anything that is not valid UTF-8 cannot be one
            match arg.to_str() {
                Some("-f") => {
                    let value = args
                        .next()
                        .ok_or_else(|| OptionsError::missing_value("-f", "a file path"))?;
                    options.input = PathBuf::from(value.as_ref());
                }
                Some("-o") => {
                    let value = args.next().ok_or_else(|| {
                        OptionsError::missing_value("-o", "either OSM or GeoJSON")
                    })?;
                    let value = value.as_ref();
                    options.output_format = value
                        .to_str()
                        .and_then(OutputFormat::parse_token)
                        .ok_or_else(|| {
                            OptionsError::invalid_output_format(&value.to_string_lossy())
                        })?;
                }
                Some("-p") => {
                    let value = args
                        .next()
                        .ok_or_else(|| OptionsError::missing_value("-p", "a file prefix"))?;
                    options.prefix = value.as_ref().to_string_lossy().into_owned();
                }
                Some("-t") => options.timers = true,
                Some("-v") => options.verbose = true,
                _ => options.ignored.push(arg.to_os_string()),
            }
        }

        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), OptionsError> {
        if self.input.as_os_str().is_empty() || self.prefix.is_empty() {
            return Err(OptionsError::MissingRequired);
        }
        // Directories and dangling links do not count as input files
        if !self.input.is_file() {
            return Err(OptionsError::file_not_found(
                &self.input.display().to_string(),
            ));
        }
        Ok(())
    }
}
