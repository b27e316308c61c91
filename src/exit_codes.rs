//! Exit code constants for the harvester CLI.
//!
//! - 0: Success (including the help screen)
//! - 1: User error (missing or malformed option, bad file pattern)
//! - 2: Filesystem failure (missing directory, read or write error)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing required option, invalid version, or invalid file pattern.
pub const USER_ERROR: i32 = 1;

/// Filesystem failure: root directory missing, or a file could not be read or written.
pub const IO_FAILURE: i32 = 2;
