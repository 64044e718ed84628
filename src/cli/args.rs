//! CLI argument definitions using clap.
//!
//! Commands:
//! - formbase init --config <path>
//! - formbase start --config <path> [--port <port>]
//! - formbase validate --config <path> [--file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// formbase - schema-driven onboarding form service
#[derive(Parser, Debug)]
#[command(name = "formbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the data file and write a default configuration
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,

        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a candidate record against the form schema and exit
    Validate {
        /// Path to configuration file
        #[arg(long, default_value = "./formbase.json")]
        config: PathBuf,

        /// Read the record from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
