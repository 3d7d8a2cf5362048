//! Arrow-key focus movement between interactive cells
//!
//! Horizontal moves step through the cells in reading order. Vertical moves
//! are spatial: berths span two rows and rows may be centered, so the cell
//! "below" is the nearest one by center distance rather than the same column
//! index of the next row.

use super::geometry::{GeometryProvider, Rect};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Requested focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a key name to a direction; non-arrow keys map to `None`
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "left" => Some(Self::Left),
            "ArrowRight" | "right" => Some(Self::Right),
            "ArrowUp" | "up" => Some(Self::Up),
            "ArrowDown" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// +1 for down, -1 for up, `None` for horizontal moves
    #[must_use]
    const fn vertical_sign(self) -> Option<f64> {
        match self {
            Self::Down => Some(1.0),
            Self::Up => Some(-1.0),
            Self::Left | Self::Right => None,
        }
    }
}

/// Index of the cell to focus next, or `None` to leave focus where it is
///
/// `cells` are the interactive cells in reading order. `None` is also
/// returned when `current` is not a valid index.
///
/// # Examples
/// ```
/// use seatmap::navigation::{compute_next_focus, Direction, Rect};
///
/// let cells = [
///     Rect::new(0.0, 0.0, 32.0, 32.0),
///     Rect::new(40.0, 0.0, 32.0, 32.0),
///     Rect::new(0.0, 40.0, 32.0, 32.0),
///     Rect::new(40.0, 40.0, 32.0, 32.0),
/// ];
/// assert_eq!(compute_next_focus(&cells, 0, Direction::Down), Some(2));
/// assert_eq!(compute_next_focus(&cells, 0, Direction::Left), None);
/// ```
#[must_use]
pub fn compute_next_focus(cells: &[Rect], current: usize, direction: Direction) -> Option<usize> {
    let current_rect = cells.get(current)?;

    match direction.vertical_sign() {
        None => {
            let next = match direction {
                Direction::Left => current.checked_sub(1)?,
                _ => current + 1,
            };
            (next < cells.len()).then_some(next)
        }
        Some(sign) => nearest_vertical(cells, current, current_rect, sign),
    }
}

fn nearest_vertical(cells: &[Rect], current: usize, from: &Rect, sign: f64) -> Option<usize> {
    let center_x = from.center_x();
    let center_y = from.center_y();

    let mut best: Option<(usize, f64)> = None;
    for (i, rect) in cells.iter().enumerate() {
        if i == current {
            continue;
        }
        let vertical = (rect.center_y() - center_y) * sign;
        // same row or behind the requested direction
        if !vertical.is_finite() || vertical <= 0.0 {
            continue;
        }
        let distance = vertical + (rect.center_x() - center_x).abs();
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

/// Navigator over a geometry provider
///
/// Geometry is read fresh on every move so layout changes between key
/// presses are picked up.
#[derive(Debug, Clone)]
pub struct GridNavigator<P> {
    provider: P,
}

impl<P: GeometryProvider> GridNavigator<P> {
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    #[must_use]
    pub fn next_focus(&self, current: usize, direction: Direction) -> Option<usize> {
        compute_next_focus(&self.provider.interactive_rects(), current, direction)
    }

    /// Handle a key press; non-arrow keys never move focus
    #[must_use]
    pub fn handle_key(&self, current: usize, key: &str) -> Option<usize> {
        Direction::from_key(key).and_then(|direction| self.next_focus(current, direction))
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}
