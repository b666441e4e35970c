//! Command-line argument definitions for the Ministream CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, watch mode, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Ministream topology tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the topology snapshot JSON file
    #[arg(help = "Path to the topology snapshot file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "topology.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Keep polling the snapshot file and re-render on each refresh
    #[arg(long)]
    pub watch: bool,

    /// With --watch: stop after this many refresh cycles (runs until
    /// interrupted by default)
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
