//! Harvesting: find matching files and rewrite their version attributes.
//!
//! For each file pattern, in order, every matching file under the root is
//! read, the `AssemblyVersion` attribute is rewritten (and the
//! `AssemblyFileVersion` attribute too when a file version was given), and the
//! file is written back. The first filesystem error stops the run.

mod io;
mod patterns;
mod walk;


pub use patterns::{
    ASSEMBLY_FILE_VERSION_ATTRIBUTE, ASSEMBLY_VERSION_ATTRIBUTE, AttributePattern,
    replace_version,
};
pub use walk::{compile_pattern, find_files, find_matching};

use crate::config::Config;
use crate::error::Result;
use crate::version::AssemblyVersion;
use std::path::{Path, PathBuf};

/// The rewrites applied to each file.
#[derive(Debug)]
struct Rewriter {
    version: (AttributePattern, AssemblyVersion),
    file_version: Option<(AttributePattern, AssemblyVersion)>,
}

impl Rewriter {
    fn new(config: &Config) -> Self {
        Self {
            version: (
                AttributePattern::new(ASSEMBLY_VERSION_ATTRIBUTE),
                config.assembly_version,
            ),
            file_version: config.assembly_file_version.map(|v| {
                (AttributePattern::new(ASSEMBLY_FILE_VERSION_ATTRIBUTE), v)
            }),
        }
    }

    fn rewrite(&self, content: &[u8]) -> Vec<u8> {
        let (pattern, version) = &self.version;
        let content = pattern.replace(content, version);
        match &self.file_version {
            Some((pattern, version)) => pattern.replace(&content, version).into_owned(),
            None => content.into_owned(),
        }
    }

    fn rewrite_file(&self, path: &Path) -> Result<()> {
        let content = io::read_content(path)?;
        io::write_content(path, &self.rewrite(&content))
    }
}

/// Run the harvest described by `config`.
///
/// Every file pattern is compiled before the first file is touched.
/// `on_file` is called with each file path right after it has been written.
/// Returns every processed path in processing order.
pub fn harvest<F>(config: &Config, mut on_file: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path),
{
    let matchers = config
        .file_patterns
        .iter()
        .map(|pattern| compile_pattern(pattern))
        .collect::<Result<Vec<_>>>()?;
    let rewriter = Rewriter::new(config);
    let mut processed = Vec::new();

    for matcher in &matchers {
        for path in find_matching(&config.directory, matcher)? {
            rewriter.rewrite_file(&path)?;
            on_file(&path);
            processed.push(path);
        }
    }

    Ok(processed)
}
