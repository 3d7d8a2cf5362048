//! Spatial keyboard navigation
//!
//! Moves focus between interactive cells given only their rectangles.

pub mod geometry;
pub mod navigator;

pub use geometry::{GeometryProvider, Rect};
pub use navigator::{Direction, GridNavigator, compute_next_focus};
