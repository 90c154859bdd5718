//! CLI module
//!
//! Command-line interface for fetching and decoding metadata.
//!
//! # Commands
//!
//! - `fetch` - Request metadata from a server and decode it
//! - `decode` - Decode a saved metadata response file

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
