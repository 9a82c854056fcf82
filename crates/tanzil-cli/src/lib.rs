//! Library components of the Tanzil importer CLI.

pub mod executor;
pub mod logging;
pub mod pipeline;
