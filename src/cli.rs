//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for seatmap using the `clap` crate.
//!
//! # Commands
//!
//! - **show**: Parse a chart definition and print it (default)
//! - **select**: Toggle seats by label and report the resulting selection
//! - **navigate**: Move keyboard focus from a seat with arrow directions
//! - **config**: Inspect and change application settings
//!
//! Every chart argument is optional and falls back to the configured
//! default chart.

use crate::navigation::Direction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "seatmap")]
#[command(about = "Seat chart viewer and selector", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print a parsed chart (default)
    #[command(visible_alias = "s")]
    Show {
        /// Chart definition file
        #[arg(value_name = "CHART")]
        chart: Option<PathBuf>,

        /// Print the parsed layers as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Toggle seats in order and print the final selection
    #[command(visible_alias = "sel")]
    Select {
        /// Chart definition file
        #[arg(short = 'c', long = "chart", value_name = "CHART")]
        chart: Option<PathBuf>,

        /// Seat labels to toggle, in order
        #[arg(value_name = "LABEL", required = true, num_args = 1..)]
        labels: Vec<String>,

        /// Override the selection limit (0 for unlimited)
        #[arg(short = 'm', long = "max", value_name = "N")]
        max: Option<usize>,
    },

    /// Move focus from a seat and print where it lands after each move
    #[command(visible_alias = "nav")]
    Navigate {
        /// Chart definition file
        #[arg(short = 'c', long = "chart", value_name = "CHART")]
        chart: Option<PathBuf>,

        /// Label of the focused seat
        #[arg(short = 'f', long = "from", value_name = "LABEL")]
        from: String,

        /// Moves to apply
        #[arg(value_name = "DIRECTION", value_enum, num_args = 1..)]
        directions: Vec<Direction>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Set the chart used when none is given
    #[command(name = "set-default")]
    SetDefault {
        #[arg(value_name = "CHART")]
        chart: PathBuf,
    },

    /// Set the default selection limit (0 for unlimited)
    #[command(name = "set-max")]
    SetMax {
        #[arg(value_name = "N")]
        max: usize,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command to run, `show` with the default chart when none is given
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Show {
            chart: None,
            json: false,
        })
    }
}
