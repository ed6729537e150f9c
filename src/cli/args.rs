//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ipsec-status - report IPsec tunnel link state and traffic counters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, env = "IPSEC_STATUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run the status command through sudo
    #[arg(long, global = true)]
    pub sudo: bool,

    /// Tunnel definitions file
    #[arg(long, global = true)]
    pub ipsec_conf: Option<PathBuf>,

    /// Tunnel management binary
    #[arg(long, global = true)]
    pub ipsec_binary: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll every configured tunnel once and print its status
    Status {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List configured tunnels
    Tunnels,
}
