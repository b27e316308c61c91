//! Command-line token handling for the harvester.
//!
//! Options use the `/name:value` form and are matched by case-insensitive
//! prefix; the first matching token wins. The directory is the first token
//! that is not an option. This module only extracts raw values; turning them
//! into a validated configuration happens in `config`.

use std::path::Path;


/// Character that introduces an option token.
pub const OPTION_MARKER: char = '/';

/// Prefix of the required AssemblyVersion option.
pub const ASSEMBLY_VERSION: &str = "/av:";

/// Prefix of the optional AssemblyFileVersion option.
pub const ASSEMBLY_FILE_VERSION: &str = "/afv:";

/// Prefix of the required file pattern option.
pub const FILES: &str = "/f:";

const DEFAULT_PROGRAM_NAME: &str = "assembly-harvester";

/// Returns true if the token looks like `/name:...` rather than a path.
///
/// Absolute Unix paths such as `/tmp` or `/home/me/src` start with the marker
/// too, so a token only counts as an option when it has a `:` and the name
/// before it contains no further separator.
pub fn is_option(token: &str) -> bool {
    let Some(rest) = token.strip_prefix(OPTION_MARKER) else {
        return false;
    };
    match rest.split_once(':') {
        Some((name, _)) => !name.contains(OPTION_MARKER),
        None => false,
    }
}

/// Find the value of the first token starting with `prefix` (ASCII case-insensitive).
///
/// Surrounding double quotes are trimmed from the value. Returns `None` when
/// no token carries the prefix.
pub fn option_value<'a>(args: &'a [String], prefix: &str) -> Option<&'a str> {
    args.iter()
        .find(|arg| {
            arg.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
        .map(|arg| arg[prefix.len()..].trim_matches('"'))
}

/// Return the first token that is not an option.
pub fn positional(args: &[String]) -> Option<&str> {
    args.iter()
        .map(String::as_str)
        .find(|arg| !is_option(arg))
}

/// Print the banner shown at the start of every run.
pub fn print_logo() {
    println!("AssemblyInfo Harvester");
    println!("A tool to change AssemblyVersion and AssemblyFileVersion attribute values");
    println!();
}

/// Name of the running executable, for the usage line.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

fn push_option(text: &mut String, option: &str, lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        let label = if i == 0 { option } else { "" };
        text.push_str(&format!("{:<3}{:<20}{}\n", "", label, line));
    }
}

/// Render the usage screen.
pub fn help_text(program: &str) -> String {
    let mut text = format!("Usage:\n{} <options> [<directory>]\n\noptions:\n", program);
    push_option(
        &mut text,
        "/av:\"<version>\"",
        &["Required", "A version to set for AssemblyVersion attribute"],
    );
    text.push('\n');
    push_option(
        &mut text,
        "/afv:\"<version>\"",
        &["Optional", "A version to set for AssemblyFileVersion attribute"],
    );
    text.push('\n');
    push_option(
        &mut text,
        "/f:\"<file(s)>\"",
        &[
            "Required",
            "Names of file to look for attributes in",
            "Separate multiple file names with semi-colon (;)",
        ],
    );
    text.push('\n');
    push_option(
        &mut text,
        "<directory>",
        &[
            "Optional",
            "A path to start harvesting from",
            "If not specified harvesting will start from current directory",
        ],
    );
    text
}
