//! CLI interface for axebridge

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BCR2000 to Axe-FX II control bridge
#[derive(Parser)]
#[command(name = "axebridge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "bridge.yaml")]
        config: PathBuf,
    },

    /// Print the effective mapping table
    Table {
        /// Configuration file path (built-in layout if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the SysEx sent for one control move
    Resolve {
        /// Configuration file path (built-in layout if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Control number or name, e.g. 72 or button1_row1
        control: String,

        /// Controller value (0-127)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=127))]
        value: u8,
    },

    /// Decode an Axe-FX parameter message given as hex
    Decode {
        /// Message bytes, e.g. "F0 00 01 74 03 02 6A 00 01 00 00 00 00 01 6E F7"
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Generate an example configuration file
    Init,
}
