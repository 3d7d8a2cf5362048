//! Seat-map notation parser
//!
//! Each row of a seat map is a string of single-letter tokens. A letter may
//! carry a bracketed suffix holding an index and an optional explicit label:
//!
//! ```text
//! token := letter ( "[" index ( "," label )? "]" )?
//! ```
//!
//! Letters are looked up in a [`SeatTypes`] mapping. Seats and berths without
//! an explicit label are numbered from a running counter that the caller can
//! thread across several parses (one per deck of a multi-layer chart).
//! Characters that do not form a token are skipped.

use super::types::{Cell, LayoutCell, LayoutKind, ParsedSeatMap, Seat, SeatStatus, SeatTypes};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z_])(?:\[([0-9a-zA-Z_]+)(?:,([0-9a-zA-Z_ ]+))?\])?")
        .expect("notation token pattern is valid")
});

/// One token matched in a notation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotationToken<'a> {
    pub letter: char,
    /// Index group of the bracket suffix; captured but never used for numbering
    pub index: Option<&'a str>,
    /// Explicit label, trimmed
    pub label: Option<&'a str>,
}

/// Split a notation row into tokens, left to right
#[must_use]
pub fn tokenize(row: &str) -> Vec<NotationToken<'_>> {
    TOKEN_PATTERN
        .captures_iter(row)
        .filter_map(|caps| {
            let letter = caps.get(1)?.as_str().chars().next()?;
            let index = caps.get(2).map(|m| m.as_str());
            let label = caps
                .get(3)
                .map(|m| m.as_str().trim())
                .filter(|label| !label.is_empty());
            Some(NotationToken {
                letter,
                index,
                label,
            })
        })
        .collect()
}

/// Result of parsing one seat map
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub seat_map: ParsedSeatMap,
    /// Counter value to pass as `start_index` for the next layer
    pub next_index: usize,
}

/// Parser bound to a seat-type mapping and the booked/blocked label sets
#[derive(Debug, Clone, Copy)]
pub struct NotationParser<'a> {
    seat_types: &'a SeatTypes,
    booked: &'a HashSet<String>,
    blocked: &'a HashSet<String>,
}

impl<'a> NotationParser<'a> {
    #[must_use]
    pub const fn new(
        seat_types: &'a SeatTypes,
        booked: &'a HashSet<String>,
        blocked: &'a HashSet<String>,
    ) -> Self {
        Self {
            seat_types,
            booked,
            blocked,
        }
    }

    /// Parse rows, numbering unlabeled seats from `start_index + 1`
    #[must_use]
    pub fn parse<S: AsRef<str>>(&self, rows: &[S], start_index: usize) -> ParseOutcome {
        let mut counter = start_index;
        let seat_map = rows
            .iter()
            .map(|row| {
                tokenize(row.as_ref())
                    .into_iter()
                    .map(|token| self.resolve(token, &mut counter))
                    .collect()
            })
            .collect();

        ParseOutcome {
            seat_map,
            next_index: counter,
        }
    }

    fn resolve(&self, token: NotationToken<'_>, counter: &mut usize) -> Cell {
        let Some(config) = self.seat_types.get(&token.letter) else {
            return Cell::Layout(LayoutCell::space());
        };

        match config.kind.seat_kind() {
            Some(kind) => {
                let label = token.label.map_or_else(
                    || {
                        *counter += 1;
                        counter.to_string()
                    },
                    str::to_string,
                );
                let status = self.status_of(&label);
                Cell::Seat(Seat::new(kind, label, config.price.unwrap_or(0.0), status))
            }
            None => Cell::Layout(LayoutCell::new(
                config.kind.layout_kind().unwrap_or(LayoutKind::Space),
            )),
        }
    }

    fn status_of(&self, label: &str) -> SeatStatus {
        if self.booked.contains(label) {
            SeatStatus::Booked
        } else if self.blocked.contains(label) {
            SeatStatus::Blocked
        } else {
            SeatStatus::Available
        }
    }
}

/// Parse a single seat map
///
/// Unrecognized letters become space cells; the call never fails.
///
/// # Examples
/// ```
/// use seatmap::chart::{parse_seat_map, CellKind, SeatTypeConfig, SeatTypes};
/// use std::collections::HashSet;
///
/// let mut types = SeatTypes::new();
/// types.insert('a', SeatTypeConfig::with_price(CellKind::Seat, 100.0));
///
/// let outcome = parse_seat_map(&["aa", "aa"], &types, &HashSet::new(), &HashSet::new(), 0);
/// assert_eq!(outcome.next_index, 4);
/// assert_eq!(outcome.seat_map[1][1].as_seat().unwrap().label, "4");
/// ```
#[must_use]
pub fn parse_seat_map<S: AsRef<str>>(
    rows: &[S],
    seat_types: &SeatTypes,
    booked: &HashSet<String>,
    blocked: &HashSet<String>,
    start_index: usize,
) -> ParseOutcome {
    NotationParser::new(seat_types, booked, blocked).parse(rows, start_index)
}
