//! Synthetic grid geometry for parsed charts
//!
//! Places every cell the way the chart is drawn on screen so that spatial
//! navigation can run without a real layout engine. Metrics are in pixels:
//! cells are 32 square with an 8 gap, berths span two rows, and layers sit
//! side by side.
//!
//! Layers without berths are laid out as centered rows. Layers with berths
//! use a fixed column grid so a berth can occupy its own row and the next.

use super::layers::ParsedLayer;
use crate::navigation::Rect;

pub const CELL_SIZE: f64 = 32.0;
pub const CELL_GAP: f64 = 8.0;
/// Two cells plus the gap between them
pub const BERTH_HEIGHT: f64 = CELL_SIZE * 2.0 + CELL_GAP;
pub const LAYER_PADDING: f64 = 8.0;
pub const LAYER_GAP: f64 = 16.0;
/// Height of a layer's name heading, including its bottom margin
pub const LAYER_TITLE_HEIGHT: f64 = 28.0;

/// Position of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    pub layer: usize,
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

/// Rectangles for every cell of a chart, in reading order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridGeometry {
    placements: Vec<CellPlacement>,
}

impl GridGeometry {
    #[must_use]
    pub fn compute(layers: &[ParsedLayer]) -> Self {
        let mut placements = Vec::new();
        let mut layer_left = 0.0;

        for (index, layer) in layers.iter().enumerate() {
            let top = if layer.name.is_empty() {
                LAYER_PADDING
            } else {
                LAYER_TITLE_HEIGHT + LAYER_PADDING
            };
            let left = layer_left + LAYER_PADDING;

            if layer.has_berths() {
                place_grid(layer, index, left, top, &mut placements);
            } else {
                place_rows(layer, index, left, top, &mut placements);
            }

            layer_left += content_width(layer.num_cols()) + LAYER_PADDING * 2.0 + LAYER_GAP;
        }

        Self { placements }
    }

    #[must_use]
    pub fn placements(&self) -> &[CellPlacement] {
        &self.placements
    }

    #[must_use]
    pub fn rect_of(&self, layer: usize, row: usize, col: usize) -> Option<Rect> {
        self.placements
            .iter()
            .find(|p| p.layer == layer && p.row == row && p.col == col)
            .map(|p| p.rect)
    }
}

fn content_width(cells: usize) -> f64 {
    if cells == 0 {
        return 0.0;
    }
    cells as f64 * CELL_SIZE + (cells - 1) as f64 * CELL_GAP
}

/// Centered flex rows, every cell one unit tall
fn place_rows(layer: &ParsedLayer, index: usize, left: f64, top: f64, out: &mut Vec<CellPlacement>) {
    let width = content_width(layer.num_cols());
    let mut y = top;

    for (row, cells) in layer.seat_map.iter().enumerate() {
        let x0 = left + (width - content_width(cells.len())) / 2.0;
        for col in 0..cells.len() {
            out.push(CellPlacement {
                layer: index,
                row,
                col,
                rect: Rect::new(x0 + col as f64 * (CELL_SIZE + CELL_GAP), y, CELL_SIZE, CELL_SIZE),
            });
        }
        let height = if cells.is_empty() { 0.0 } else { CELL_SIZE };
        y += height + CELL_GAP;
    }
}

/// Fixed grid, berths span two rows
fn place_grid(layer: &ParsedLayer, index: usize, left: f64, top: f64, out: &mut Vec<CellPlacement>) {
    for (row, col, cell) in layer.cells() {
        let height = if cell.is_berth() { BERTH_HEIGHT } else { CELL_SIZE };
        out.push(CellPlacement {
            layer: index,
            row,
            col,
            rect: Rect::new(
                left + col as f64 * (CELL_SIZE + CELL_GAP),
                top + row as f64 * (CELL_SIZE + CELL_GAP),
                CELL_SIZE,
                height,
            ),
        });
    }
}
