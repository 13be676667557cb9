//! Command line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "cncsend")]
#[command(about = "📡 Send G-code to a CNC machine through the serial bridge service")]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to <config dir>/cncsend/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Send the configured literal test payload and port instead of form values
    #[arg(long, global = true)]
    pub literal: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the serial ports the bridge service can see
    Ports,
    /// Send a payload to a port
    Send {
        /// Payload text
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,
        /// Read the payload from a file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Serial port to send to (e.g., /dev/ttyUSB0, COM3)
        #[arg(short, long)]
        port: Option<String>,
    },
    /// Release the port held by the bridge service
    Release,
    /// Send a single value to the legacy lookup endpoint
    #[cfg(feature = "lookup")]
    Lookup {
        /// Value to look up
        #[arg(short, long)]
        input: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// No subcommand means the interactive TUI
    pub fn is_tui_mode(&self) -> bool {
        self.command.is_none()
    }
}
