//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - generate: write metadata documents beside a toolbox source file
//! - inspect: print resolved documents without writing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tbxmeta - XML metadata generation for geospatial toolboxes
#[derive(Parser, Debug)]
#[command(name = "tbxmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate metadata documents beside a toolbox source file
    Generate {
        /// Toolbox descriptor file (.yaml/.yml/.json)
        source: PathBuf,

        /// Replace existing metadata documents
        #[arg(short, long)]
        overwrite: bool,
    },

    /// Print resolved metadata documents without writing files
    Inspect {
        /// Toolbox descriptor file (.yaml/.yml/.json)
        source: PathBuf,
    },
}
