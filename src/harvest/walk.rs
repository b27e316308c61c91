//! Recursive file discovery by file-name glob.
//!
//! Patterns follow the simple wildcard rules of a file search box: `*` matches
//! any run of characters and `?` matches one character. Everything else,
//! brackets and braces included, is literal.

use crate::error::{HarvestError, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Translate a wildcard pattern into glob syntax.
///
/// Glob metacharacters other than `*` and `?` become one-character classes,
/// and a run of `*` collapses to one (`**` has no special meaning here).
fn glob_source(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len());
    let mut prev_star = false;
    for c in pattern.chars() {
        match c {
            '*' if prev_star => continue,
            '[' | ']' | '{' | '}' => {
                source.push('[');
                source.push(c);
                source.push(']');
            }
            _ => source.push(c),
        }
        prev_star = c == '*';
    }
    source
}

/// Compile a file-name pattern.
///
/// Patterns match the file name only, so a pattern holding a path separator is
/// rejected. Case sensitivity follows the host: insensitive on Windows,
/// sensitive elsewhere.
pub fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    if pattern.chars().any(std::path::is_separator) {
        return Err(HarvestError::InvalidPattern {
            pattern: pattern.to_string(),
            message: "a file pattern cannot contain a path separator".to_string(),
        });
    }

    GlobBuilder::new(&glob_source(pattern))
        .literal_separator(true)
        .backslash_escape(false)
        .case_insensitive(cfg!(windows))
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| HarvestError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })
}

/// Find every file under `root` (at any depth) whose name matches `pattern`.
pub fn find_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = compile_pattern(pattern)?;
    find_matching(root, &matcher)
}

/// Files sort before directories, then by name.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Find every file under `root` whose name satisfies `matcher`.
///
/// Within each directory, matching files come first in name order, then
/// subdirectories are searched in name order. Symlinked directories are not
/// followed.
pub fn find_matching(root: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(HarvestError::DirectoryNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root).follow_links(false).sort_by(files_first);

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            HarvestError::io("read directory", path, e.into())
        })?;
        if entry.depth() > 0 && is_file(&entry) && matcher.is_match(entry.file_name()) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
