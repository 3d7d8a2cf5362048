//! Seatmap - interactive seating charts from a compact text notation
//!
//! This library parses seat-map notation into typed cells, tracks seat
//! selection with an optional limit, and moves keyboard focus between
//! seats by their on-screen position.

use thiserror::Error;

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod navigation;
pub mod output;
pub mod selection;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SeatmapError {
    /// Chart loading or session error
    #[error("Chart error: {0}")]
    ChartError(#[from] chart::ChartError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_chart_error_conversion() {
        let error: SeatmapError = chart::ChartError::EmptyChart.into();
        assert_eq!(error.to_string(), "Chart error: Chart definition has no rows or layers");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_input_display() {
        let error = SeatmapError::InvalidInput("no chart given".to_string());
        assert_eq!(error.to_string(), "Invalid input: no chart given");
        assert!(error.source().is_none());
    }
}
