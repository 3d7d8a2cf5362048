//! Chart definition files
//!
//! A chart is described in TOML: the notation rows (or named layers), the
//! seat-type mapping, booked and blocked labels, and selection settings.
//!
//! ```toml
//! max_selectable_seats = 4
//! booked = ["1", "2"]
//!
//! [[layers]]
//! name = "Lower Deck"
//! rows = ["b_b", "__b"]
//!
//! [seat_types]
//! a = { type = "seat", price = 100 }
//! b = { type = "berth", price = 250 }
//! ```

use super::error::ChartError;
use super::layers::SeatMaps;
use super::legend::LegendItem;
use super::types::{SeatTypeConfig, SeatTypes};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, ChartError>;

/// A named layer as written in a definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDefinition {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<String>,
}

/// Everything needed to build a chart session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartDefinition {
    /// Rows of a single-layer chart
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<String>,

    /// Named layers of a multi-layer chart, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<LayerDefinition>,

    /// Notation letter to seat type, keys must be one character
    #[serde(default)]
    pub seat_types: BTreeMap<String, SeatTypeConfig>,

    #[serde(default)]
    pub booked: Vec<String>,

    #[serde(default)]
    pub blocked: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selectable_seats: Option<usize>,

    /// Disable all seat selection
    #[serde(default)]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legends: Vec<LegendItem>,
}

impl ChartDefinition {
    /// Parse a definition from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Toml` if the text is not a valid definition.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a definition file
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Io` if the file cannot be read, or
    /// `ChartError::Toml` if its contents are not a valid definition.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Notation for the chart; layers take precedence over plain rows
    ///
    /// # Errors
    ///
    /// Returns `ChartError::EmptyChart` if neither rows nor layers are given.
    pub fn seat_maps(&self) -> Result<SeatMaps> {
        if !self.layers.is_empty() {
            return Ok(SeatMaps::Layered(
                self.layers
                    .iter()
                    .map(|layer| (layer.name.clone(), layer.rows.clone()))
                    .collect(),
            ));
        }
        if self.rows.is_empty() {
            return Err(ChartError::EmptyChart);
        }
        Ok(SeatMaps::Single(self.rows.clone()))
    }

    /// Seat types keyed by notation letter
    ///
    /// # Errors
    ///
    /// Returns `ChartError::InvalidSeatType` for keys that are not a single character,
    /// or `ChartError::InvalidPrice` for a negative or non-finite price.
    pub fn seat_types(&self) -> Result<SeatTypes> {
        self.seat_types
            .iter()
            .map(|(key, config)| {
                if let Some(price) = config.price
                    && (!price.is_finite() || price < 0.0)
                {
                    return Err(ChartError::InvalidPrice {
                        key: key.clone(),
                        price,
                    });
                }
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => Ok((letter, *config)),
                    _ => Err(ChartError::InvalidSeatType(key.clone())),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn booked_labels(&self) -> HashSet<String> {
        self.booked.iter().cloned().collect()
    }

    #[must_use]
    pub fn blocked_labels(&self) -> HashSet<String> {
        self.blocked.iter().cloned().collect()
    }
}
