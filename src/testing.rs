//! Testing utilities for seatmap
//!
//! Shared fixtures for unit tests: a seat-type mapping covering every cell
//! kind and a helper for building label sets.
//!
//! Only available when compiled with `cfg(test)`.

use crate::chart::{CellKind, SeatTypeConfig, SeatTypes};
use std::collections::HashSet;

/// Seat types used across the test suite
///
/// `a` seat at 100, `b` berth at 200, `d` driver, `o` door, `_` space.
#[must_use]
pub fn bus_seat_types() -> SeatTypes {
    SeatTypes::from([
        ('a', SeatTypeConfig::with_price(CellKind::Seat, 100.0)),
        ('b', SeatTypeConfig::with_price(CellKind::Berth, 200.0)),
        ('d', SeatTypeConfig::new(CellKind::Driver)),
        ('o', SeatTypeConfig::new(CellKind::Door)),
        ('_', SeatTypeConfig::new(CellKind::Space)),
    ])
}

/// Collect string slices into an owned label set
#[must_use]
pub fn labels(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_seat_types_cover_every_kind() {
        let types = bus_seat_types();
        assert_eq!(types.len(), 5);
        assert_eq!(types[&'b'].kind, CellKind::Berth);
    }

    #[test]
    fn test_labels() {
        let set = labels(&["1", "2", "1"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("2"));
    }
}
