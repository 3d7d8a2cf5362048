//! Cell types produced by the notation parser
//!
//! A parsed chart is a grid of [`Cell`] values. Every cell is either a
//! selectable [`Seat`] (a regular seat or a sleeper berth) or a
//! non-interactive [`LayoutCell`] (driver position, door, or empty space).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Booking status of a seat at parse time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to be selected
    #[default]
    Available,
    /// Already sold
    Booked,
    /// Withheld from sale
    Blocked,
}

impl SeatStatus {
    /// Lowercase name used in descriptions and legends
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a selectable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    Seat,
    /// Sleeper berth, spans two grid rows when laid out
    Berth,
}

impl SeatKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seat => "seat",
            Self::Berth => "berth",
        }
    }
}

impl fmt::Display for SeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a non-interactive cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Driver,
    Door,
    Space,
}

impl LayoutKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Door => "door",
            Self::Space => "space",
        }
    }
}

/// Any cell kind, as named in a seat-type mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Seat,
    Berth,
    Driver,
    Door,
    Space,
}

impl CellKind {
    /// Narrow to a seat kind, `None` for layout kinds
    #[must_use]
    pub const fn seat_kind(self) -> Option<SeatKind> {
        match self {
            Self::Seat => Some(SeatKind::Seat),
            Self::Berth => Some(SeatKind::Berth),
            Self::Driver | Self::Door | Self::Space => None,
        }
    }

    /// Narrow to a layout kind, `None` for seat kinds
    #[must_use]
    pub const fn layout_kind(self) -> Option<LayoutKind> {
        match self {
            Self::Driver => Some(LayoutKind::Driver),
            Self::Door => Some(LayoutKind::Door),
            Self::Space => Some(LayoutKind::Space),
            Self::Seat | Self::Berth => None,
        }
    }
}

impl From<SeatKind> for CellKind {
    fn from(kind: SeatKind) -> Self {
        match kind {
            SeatKind::Seat => Self::Seat,
            SeatKind::Berth => Self::Berth,
        }
    }
}

impl From<LayoutKind> for CellKind {
    fn from(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Driver => Self::Driver,
            LayoutKind::Door => Self::Door,
            LayoutKind::Space => Self::Space,
        }
    }
}

/// Configuration for one notation letter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatTypeConfig {
    #[serde(rename = "type")]
    pub kind: CellKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl SeatTypeConfig {
    #[must_use]
    pub const fn new(kind: CellKind) -> Self {
        Self { kind, price: None }
    }

    #[must_use]
    pub const fn with_price(kind: CellKind, price: f64) -> Self {
        Self {
            kind,
            price: Some(price),
        }
    }
}

/// Mapping of notation letters to their configuration
pub type SeatTypes = HashMap<char, SeatTypeConfig>;

/// A selectable seat or berth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    #[serde(rename = "type")]
    pub kind: SeatKind,
    pub label: String,
    pub price: f64,
    pub status: SeatStatus,
}

impl Seat {
    #[must_use]
    pub fn new(kind: SeatKind, label: impl Into<String>, price: f64, status: SeatStatus) -> Self {
        Self {
            kind,
            label: label.into(),
            price,
            status,
        }
    }

    /// Whether the seat may be toggled, given the chart-wide disabled flag
    #[must_use]
    pub fn is_interactive(&self, disabled: bool) -> bool {
        self.status == SeatStatus::Available && !disabled
    }
}

/// A driver position, door, or empty space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCell {
    #[serde(rename = "type")]
    pub kind: LayoutKind,
}

impl LayoutCell {
    #[must_use]
    pub const fn new(kind: LayoutKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn space() -> Self {
        Self::new(LayoutKind::Space)
    }
}

/// One parsed grid position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Seat(Seat),
    Layout(LayoutCell),
}

impl Cell {
    #[must_use]
    pub const fn is_seat(&self) -> bool {
        matches!(self, Self::Seat(_))
    }

    #[must_use]
    pub const fn is_layout(&self) -> bool {
        matches!(self, Self::Layout(_))
    }

    #[must_use]
    pub const fn is_berth(&self) -> bool {
        matches!(self, Self::Seat(seat) if matches!(seat.kind, SeatKind::Berth))
    }

    #[must_use]
    pub const fn as_seat(&self) -> Option<&Seat> {
        match self {
            Self::Seat(seat) => Some(seat),
            Self::Layout(_) => None,
        }
    }

    #[must_use]
    pub const fn as_layout(&self) -> Option<&LayoutCell> {
        match self {
            Self::Layout(cell) => Some(cell),
            Self::Seat(_) => None,
        }
    }

    /// Discriminant shared by both variants
    #[must_use]
    pub fn kind(&self) -> CellKind {
        match self {
            Self::Seat(seat) => seat.kind.into(),
            Self::Layout(cell) => cell.kind.into(),
        }
    }
}

impl From<Seat> for Cell {
    fn from(seat: Seat) -> Self {
        Self::Seat(seat)
    }
}

impl From<LayoutCell> for Cell {
    fn from(cell: LayoutCell) -> Self {
        Self::Layout(cell)
    }
}

/// Rows of parsed cells
pub type ParsedSeatMap = Vec<Vec<Cell>>;
