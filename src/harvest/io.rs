//! File I/O for harvested files.
//!
//! Files are overwritten in place: no backup and no temp-file rename.

use crate::error::{HarvestError, Result};
use std::fs;
use std::path::Path;

/// Read the whole file.
pub fn read_content(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| HarvestError::io("read", path, e))
}

/// Overwrite the file with `content`.
pub fn write_content(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content).map_err(|e| HarvestError::io("write", path, e))
}
