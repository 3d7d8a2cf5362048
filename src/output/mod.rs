//! Output formatting for CLI display
//!
//! Text rendering of parsed charts and selections, plus the
//! [`OutputWriter`] abstraction commands report through.

pub mod writer;

pub use writer::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};

use crate::chart::{Cell, DisplayStatus, LayoutKind, ParsedLayer, SeatKind};
use crate::selection::SelectedSeat;
use colored::Colorize;

/// Format a price the way seat descriptions show it: `$100`, `$12.5`
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

/// Plain text for one cell, padded to `width`
///
/// Seats show their label in brackets, berths in braces. Driver and door
/// positions show `D` and `=`; empty space stays blank.
#[must_use]
pub fn format_cell(cell: &Cell, width: usize) -> String {
    let text = match cell {
        Cell::Seat(seat) => match seat.kind {
            SeatKind::Seat => format!("[{}]", seat.label),
            SeatKind::Berth => format!("{{{}}}", seat.label),
        },
        Cell::Layout(layout) => match layout.kind {
            LayoutKind::Driver => "D".to_string(),
            LayoutKind::Door => "=".to_string(),
            LayoutKind::Space => String::new(),
        },
    };
    format!("{text:^width$}")
}

fn colorize(text: &str, status: DisplayStatus) -> String {
    match status {
        DisplayStatus::Available => text.green().to_string(),
        DisplayStatus::Booked => text.bright_black().to_string(),
        DisplayStatus::Blocked => text.yellow().to_string(),
        DisplayStatus::Selected => text.blue().bold().to_string(),
    }
}

/// Render a layer as lines of text
///
/// `is_selected` decides which seats show as selected; with `color` off the
/// output is plain and suitable for piping.
#[must_use]
pub fn render_layer(layer: &ParsedLayer, is_selected: impl Fn(&str) -> bool, color: bool) -> Vec<String> {
    let width = layer
        .cells()
        .map(|(_, _, cell)| format_cell(cell, 0).chars().count())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut lines = Vec::with_capacity(layer.seat_map.len() + 1);
    if !layer.name.is_empty() {
        lines.push(layer.name.clone());
    }

    for row in &layer.seat_map {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                let text = format_cell(cell, width);
                match cell.as_seat() {
                    Some(seat) if color => {
                        colorize(&text, DisplayStatus::effective(seat.status, is_selected(&seat.label)))
                    }
                    _ => text,
                }
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines
}

/// One line per selected seat, followed by a total
#[must_use]
pub fn selection_summary(selection: &[SelectedSeat], quiet: bool) -> Vec<String> {
    if quiet {
        return selection.iter().map(|seat| seat.label.clone()).collect();
    }
    if selection.is_empty() {
        return vec!["No seats selected.".to_string()];
    }

    let mut lines: Vec<String> = selection
        .iter()
        .map(|seat| format!("  {} {} ({})", seat.kind, seat.label, format_price(seat.price)))
        .collect();
    let total: f64 = selection.iter().map(|seat| seat.price).sum();
    lines.push(format!("Total: {} for {} seat(s)", format_price(total), selection.len()));
    lines
}
