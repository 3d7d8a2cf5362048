//! Seatmap CLI application entry point
//!
//! Loads seat chart definitions, prints them, replays seat selection and
//! keyboard navigation against them, and manages application settings.
//!
//! # Usage
//!
//! ```bash
//! # Print the default chart (default command)
//! seatmap
//! seatmap show demos/bus.toml
//! seatmap show demos/sleeper.toml --json
//!
//! # Toggle seats in order, with an optional limit
//! seatmap select -c demos/bus.toml 1 2 5 --max 2
//!
//! # Move focus with arrow directions
//! seatmap navigate -c demos/sleeper.toml --from 1 down right
//!
//! # Configure a default chart and selection limit
//! seatmap config set-default demos/bus.toml
//! seatmap config set-max 4
//!
//! # Quiet mode (only output results)
//! seatmap -q select 1 2
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/seatmap/config.toml` on Linux) and created on first run.

use seatmap::{
    SeatmapError,
    cli::{Cli, Commands},
    commands::{self, select::LimitSources},
    config::SeatmapConfig,
    output::StdoutWriter,
};

type Result<T> = std::result::Result<T, SeatmapError>;

/// Main entry point for the seatmap application
///
/// # Errors
///
/// Returns `SeatmapError` if configuration loading fails or the command fails.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = SeatmapConfig::config_path()?;
    let config = SeatmapConfig::load_from(&config_path)?;

    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::quiet(quiet);
    let color = !cli.no_color;

    match cli.get_command() {
        Commands::Show { chart, json } => {
            let chart = commands::require_chart(chart, &config)?;
            commands::show(&chart, json, color, &output)
        }
        Commands::Select { chart, labels, max } => {
            let chart = commands::require_chart(chart, &config)?;
            let limits = LimitSources {
                explicit: max,
                configured: config.max_selectable_seats,
            };
            commands::select(&chart, &labels, limits, quiet, &output).map(|_| ())
        }
        Commands::Navigate { chart, from, directions } => {
            let chart = commands::require_chart(chart, &config)?;
            commands::navigate(&chart, &from, &directions, &output).map(|_| ())
        }
        Commands::Config { command } => {
            commands::config(config, &config_path, &command, &output).map(|_| ())
        }
    }
}
