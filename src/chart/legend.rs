//! Display status, accessible descriptions, and legend entries
//!
//! Renderers consume these to label seats consistently: a selected seat
//! shows as `selected` regardless of its parsed status, and every seat gets
//! a one-line description suitable for screen readers.

use super::types::{LayoutKind, Seat, SeatKind, SeatStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status a seat is displayed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Available,
    Booked,
    Blocked,
    Selected,
}

impl DisplayStatus {
    /// Selection overrides the parsed status
    #[must_use]
    pub const fn effective(status: SeatStatus, is_selected: bool) -> Self {
        if is_selected {
            return Self::Selected;
        }
        match status {
            SeatStatus::Available => Self::Available,
            SeatStatus::Booked => Self::Booked,
            SeatStatus::Blocked => Self::Blocked,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Blocked => "blocked",
            Self::Selected => "selected",
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legend statuses are the display statuses
pub type LegendStatus = DisplayStatus;

/// Screen-reader description of a seat, e.g. `"Berth 4, selected, $250"`
#[must_use]
pub fn describe_seat(seat: &Seat, is_selected: bool) -> String {
    let noun = match seat.kind {
        SeatKind::Seat => "Seat",
        SeatKind::Berth => "Berth",
    };
    let status = DisplayStatus::effective(seat.status, is_selected);
    if seat.price > 0.0 {
        format!("{noun} {}, {status}, ${}", seat.label, seat.price)
    } else {
        format!("{noun} {}, {status}", seat.label)
    }
}

/// Description of a layout cell; empty space is hidden from assistive tech
#[must_use]
pub const fn describe_layout(kind: LayoutKind) -> Option<&'static str> {
    match kind {
        LayoutKind::Driver => Some("Driver position"),
        LayoutKind::Door => Some("Door"),
        LayoutKind::Space => None,
    }
}

/// One legend entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendItem {
    pub status: LegendStatus,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeatKind>,
}

/// What a legend entry shows: a sample seat and a caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendSample {
    pub kind: SeatKind,
    pub status: SeatStatus,
    pub is_selected: bool,
    pub caption: &'static str,
}

impl LegendItem {
    #[must_use]
    pub const fn new(status: LegendStatus) -> Self {
        Self { status, kind: None }
    }

    /// Resolve to a sample; `selected` is an available seat shown selected
    #[must_use]
    pub const fn sample(&self) -> LegendSample {
        let kind = match self.kind {
            Some(kind) => kind,
            None => SeatKind::Seat,
        };
        let (status, is_selected) = match self.status {
            DisplayStatus::Available => (SeatStatus::Available, false),
            DisplayStatus::Booked => (SeatStatus::Booked, false),
            DisplayStatus::Blocked => (SeatStatus::Blocked, false),
            DisplayStatus::Selected => (SeatStatus::Available, true),
        };
        LegendSample {
            kind,
            status,
            is_selected,
            caption: self.status.as_str(),
        }
    }
}
