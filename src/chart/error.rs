//! Chart loading and session errors
//!
//! Parsing notation never fails. These errors come from the edges around
//! it: reading chart definition files and activating seats in a session.

use thiserror::Error;

/// Chart-specific errors
#[derive(Debug, Error)]
pub enum ChartError {
    /// Chart definition file could not be read
    #[error("Failed to read chart definition: {0}")]
    Io(#[from] std::io::Error),

    /// Chart definition is not valid TOML or has the wrong shape
    #[error("Invalid chart definition: {0}")]
    Toml(#[from] toml::de::Error),

    /// Seat type keys must be exactly one character
    #[error("Invalid seat type key '{0}': expected a single character")]
    InvalidSeatType(String),

    /// Seat prices must be finite and not negative
    #[error("Invalid price {price} for seat type '{key}'")]
    InvalidPrice { key: String, price: f64 },

    /// Definition has neither rows nor layers
    #[error("Chart definition has no rows or layers")]
    EmptyChart,

    /// Label does not belong to any seat in the chart
    #[error("Unknown seat label: {0}")]
    UnknownLabel(String),
}
