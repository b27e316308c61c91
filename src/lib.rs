//! AssemblyInfo Harvester: rewrite `AssemblyVersion` and `AssemblyFileVersion`
//! attributes in every matching file of a directory tree.
//!
//! The binary parses its arguments with [`config::Config::from_args`] and hands
//! the result to [`harvest::harvest`]; both return errors instead of exiting so
//! the driver alone decides the exit code.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod harvest;
pub mod version;

#[cfg(test)]
pub(crate) mod test_support;
