//! Configuration model and construction from raw arguments.

use crate::cli;
use crate::error::{HarvestError, Result};
use crate::harvest;
use crate::version::AssemblyVersion;
use std::fmt;
use std::path::PathBuf;

/// Width of the label column in the configuration summary.
const LABEL_WIDTH: usize = 25;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments at all: show usage and exit successfully.
    Help,
    /// Rewrite attributes with the given configuration.
    Harvest(Config),
}

/// Effective settings for one harvesting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Value written into `AssemblyVersion` attributes.
    pub assembly_version: AssemblyVersion,

    /// Value written into `AssemblyFileVersion` attributes, if requested.
    pub assembly_file_version: Option<AssemblyVersion>,

    /// File name globs, in the order given (split on `;`, empty entries kept).
    pub file_patterns: Vec<String>,

    /// Absolute root of the directory tree to search.
    pub directory: PathBuf,
}

impl Config {
    /// Parse command-line tokens (without the program name).
    ///
    /// Options are validated in a fixed order: `/av:`, `/afv:`, `/f:`. Every
    /// file pattern is compiled here, so a bad one is reported before any file
    /// is touched. The first problem found is returned.
    pub fn from_args(args: &[String]) -> Result<Invocation> {
        if args.is_empty() {
            return Ok(Invocation::Help);
        }

        let assembly_version = parse_required_version(args, cli::ASSEMBLY_VERSION)?;
        let assembly_file_version = parse_optional_version(args, cli::ASSEMBLY_FILE_VERSION)?;
        let file_patterns = parse_file_patterns(args)?;
        let directory = resolve_directory(cli::positional(args))?;

        Ok(Invocation::Harvest(Config {
            assembly_version,
            assembly_file_version,
            file_patterns,
            directory,
        }))
    }
}

/// Option name as shown in diagnostics, e.g. `/av` for `/av:`.
fn flag_name(prefix: &'static str) -> &'static str {
    prefix.trim_end_matches(':')
}

fn non_empty_value<'a>(args: &'a [String], prefix: &str) -> Option<&'a str> {
    cli::option_value(args, prefix).filter(|value| !value.is_empty())
}

fn parse_version(value: &str, prefix: &'static str) -> Result<AssemblyVersion> {
    value.parse().map_err(|_| HarvestError::InvalidVersion {
        flag: flag_name(prefix),
        value: value.to_string(),
    })
}

fn parse_required_version(args: &[String], prefix: &'static str) -> Result<AssemblyVersion> {
    let value = non_empty_value(args, prefix).ok_or(HarvestError::MissingOption {
        flag: flag_name(prefix),
    })?;
    parse_version(value, prefix)
}

fn parse_optional_version(
    args: &[String],
    prefix: &'static str,
) -> Result<Option<AssemblyVersion>> {
    non_empty_value(args, prefix)
        .map(|value| parse_version(value, prefix))
        .transpose()
}

fn parse_file_patterns(args: &[String]) -> Result<Vec<String>> {
    let value = non_empty_value(args, cli::FILES).ok_or(HarvestError::MissingOption {
        flag: flag_name(cli::FILES),
    })?;
    let patterns: Vec<String> = value.split(';').map(str::to_string).collect();
    for pattern in &patterns {
        harvest::compile_pattern(pattern)?;
    }
    Ok(patterns)
}

/// Use the given directory, or the working directory when none was given.
/// Relative paths are made absolute against the working directory.
fn resolve_directory(arg: Option<&str>) -> Result<PathBuf> {
    let path = match arg.filter(|a| !a.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()
            .map_err(|e| HarvestError::io("determine current directory", ".", e))?,
    };
    if path.is_absolute() {
        return Ok(path);
    }
    std::path::absolute(&path).map_err(|e| HarvestError::io("resolve directory", path, e))
}

fn or_null(version: Option<&AssemblyVersion>) -> String {
    version.map_or_else(|| "<null>".to_string(), ToString::to_string)
}

fn summary_line(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{:<width$}{}", label, value, width = LABEL_WIDTH)
}

/// Renders the effective-values summary printed before harvesting.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary_line(f, "AssemblyVersion:", self.assembly_version)?;
        summary_line(
            f,
            "AssemblyFileVersion:",
            or_null(self.assembly_file_version.as_ref()),
        )?;
        let files: String = self
            .file_patterns
            .iter()
            .map(|pattern| format!("[{}] ", pattern))
            .collect();
        summary_line(f, "Files:", files)?;
        summary_line(f, "Directory:", self.directory.display())
    }
}
