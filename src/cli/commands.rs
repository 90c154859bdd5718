//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RETS COMPACT metadata client
#[derive(Parser, Debug)]
#[command(name = "rets-compact")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection settings file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Metadata options file (JSON)
    #[arg(short = 'm', long, global = true)]
    pub metadata_options: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request metadata from a server and decode it
    Fetch {
        /// GetMetadata capability URL (overridden by --config)
        #[arg(long)]
        url: Option<String>,

        /// Metadata type requested (overridden by --metadata-options)
        #[arg(long, default_value = "METADATA-SYSTEM")]
        mtype: String,

        /// Metadata format requested
        #[arg(long, default_value = "COMPACT")]
        format: String,

        /// Metadata identifier
        #[arg(long, default_value = "*")]
        id: String,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the raw XML body instead of decoded JSON
        #[arg(long)]
        raw: bool,
    },

    /// Decode a saved metadata response file
    Decode {
        /// Path to the XML response file
        file: PathBuf,

        /// Metadata type the file contains
        #[arg(long, default_value = "METADATA-SYSTEM")]
        mtype: String,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
