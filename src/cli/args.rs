// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for scanforge

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scanforge")]
#[command(about = "Generates simulation configs and chained production commands for parameter scans")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate config files and command lists from a parameter table
    Generate {
        #[arg(help = "Path to the tab-separated parameter table")]
        parameters: PathBuf,

        #[arg(short, long, help = "Config template file (overrides configuration)")]
        template: Option<PathBuf>,

        #[arg(long, help = "Directory for rendered config files")]
        cfg_dir: Option<PathBuf>,

        #[arg(long, help = "Directory for rendered command lists")]
        commands_dir: Option<PathBuf>,

        #[arg(long, help = "Dry run - render without writing files")]
        dry_run: bool,
    },

    /// Validate a parameter table without generating anything
    Validate {
        #[arg(help = "Path to the tab-separated parameter table")]
        parameters: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
