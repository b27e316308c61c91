//! Harvester configuration.
//!
//! The configuration is built once from the command-line tokens and is never
//! mutated afterwards. Parsing never exits the process; errors are returned to
//! the caller.

mod model;


pub use model::{Config, Invocation};
