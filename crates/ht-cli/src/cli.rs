//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Personal health activity tracker.
///
/// Log dated observations such as minutes walked, liters of water or hours
/// slept, then review them as a list or as per-activity statistics.
#[derive(Debug, Parser)]
#[command(name = "ht", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum number of records for this session.
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    /// Print statistics as JSON instead of a text report.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start an interactive session (the default).
    Session,

    /// Print the effective configuration.
    Config,
}
