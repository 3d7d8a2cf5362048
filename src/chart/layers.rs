//! Single and multi-layer seat maps
//!
//! A chart is either one seat map or an ordered list of named layers such as
//! "Lower Deck" and "Upper Deck". Layers share one seat numbering sequence.

use super::parser::NotationParser;
use super::types::{Cell, ParsedSeatMap, SeatTypes};
use serde::Serialize;
use std::collections::HashSet;

/// Raw notation for a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatMaps {
    /// One unnamed layer
    Single(Vec<String>),
    /// Named layers in display order
    Layered(Vec<(String, Vec<String>)>),
}

impl SeatMaps {
    #[must_use]
    pub fn single<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Single(rows.into_iter().map(Into::into).collect())
    }

    /// Append a named layer, converting a single map into a layered one
    #[must_use]
    pub fn with_layer<I, S>(self, name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows.into_iter().map(Into::into).collect();
        let mut layers = match self {
            Self::Single(existing) if existing.is_empty() => Vec::new(),
            Self::Single(existing) => vec![(String::new(), existing)],
            Self::Layered(layers) => layers,
        };
        layers.push((name.into(), rows));
        Self::Layered(layers)
    }
}

impl Default for SeatMaps {
    fn default() -> Self {
        Self::Single(Vec::new())
    }
}

/// One parsed layer of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedLayer {
    /// Empty for single-layer charts
    pub name: String,
    pub seat_map: ParsedSeatMap,
}

impl ParsedLayer {
    /// Number of grid columns, the length of the longest row
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.seat_map.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn has_berths(&self) -> bool {
        self.seat_map.iter().flatten().any(Cell::is_berth)
    }

    /// Iterate cells with their row and column
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.seat_map
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, cell)| (row, col, cell)))
    }
}

/// Parse every layer in order, continuing the seat counter across layers
///
/// Returns the parsed layers and the final counter value.
#[must_use]
pub fn parse_layers(
    seat_maps: &SeatMaps,
    seat_types: &SeatTypes,
    booked: &HashSet<String>,
    blocked: &HashSet<String>,
) -> (Vec<ParsedLayer>, usize) {
    let parser = NotationParser::new(seat_types, booked, blocked);

    match seat_maps {
        SeatMaps::Single(rows) => {
            let outcome = parser.parse(rows, 0);
            let layer = ParsedLayer {
                name: String::new(),
                seat_map: outcome.seat_map,
            };
            (vec![layer], outcome.next_index)
        }
        SeatMaps::Layered(layers) => {
            let mut current_index = 0;
            let parsed = layers
                .iter()
                .map(|(name, rows)| {
                    let outcome = parser.parse(rows, current_index);
                    current_index = outcome.next_index;
                    ParsedLayer {
                        name: name.clone(),
                        seat_map: outcome.seat_map,
                    }
                })
                .collect();
            (parsed, current_index)
        }
    }
}
