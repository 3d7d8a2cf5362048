//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and reports through an [`OutputWriter`](crate::output::OutputWriter).

pub mod config;
pub mod navigate;
pub mod select;
pub mod show;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use navigate::execute as navigate;
pub use select::execute as select;
pub use show::execute as show;

use crate::{SeatmapError, chart::ChartDefinition};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, SeatmapError>;

/// Resolve the chart path given on the command line or from the config
///
/// # Errors
///
/// Returns `SeatmapError::InvalidInput` when neither is set.
pub fn require_chart(chart: Option<PathBuf>, config: &crate::config::SeatmapConfig) -> Result<PathBuf> {
    config.resolve_chart(chart).ok_or_else(|| {
        SeatmapError::InvalidInput(
            "No chart given and no default chart configured (see `seatmap config set-default`)"
                .to_string(),
        )
    })
}

fn load_definition(path: &Path) -> Result<ChartDefinition> {
    Ok(ChartDefinition::load(path)?)
}
