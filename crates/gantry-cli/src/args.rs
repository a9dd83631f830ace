//! Command-line argument definitions for the Gantry CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. There are no required arguments; every option has a
//! default so that a bare invocation renders the architecture diagram into
//! the working directory.

use clap::Parser;

/// Command-line arguments for the architecture diagram generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the output file
    #[arg(short, long, default_value = "aws_architecture_diagram.png")]
    pub output: String,

    /// Output format (png, svg, dot)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
