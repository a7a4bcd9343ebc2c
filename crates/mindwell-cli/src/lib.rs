//! mindwell-cli library root.
//!
//! Re-exports the command-line modules so integration tests can exercise
//! config handling and the dashboard report without spawning the binary.

pub mod aws;
pub mod config;
pub mod report;
pub mod snapshot;
