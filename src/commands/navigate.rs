//! Navigate command - replay arrow-key focus moves over a chart

use super::load_definition;
use crate::{
    SeatmapError,
    chart::{ChartError, ChartSession},
    navigation::Direction,
    output::OutputWriter,
    selection::SelectionOptions,
};
use std::path::Path;

type Result<T> = std::result::Result<T, SeatmapError>;

/// Execute the navigate command
///
/// Prints the focused label after each move and returns the final one.
///
/// # Errors
/// Returns an error if the chart cannot be loaded, `from` is not a seat
/// label, or that seat cannot receive focus
pub fn execute(
    chart: &Path,
    from: &str,
    directions: &[Direction],
    output: &impl OutputWriter,
) -> Result<String> {
    let definition = load_definition(chart)?;
    let session = ChartSession::from_definition(&definition, SelectionOptions::new())?;

    if session.find_seat(from).is_none() {
        return Err(ChartError::UnknownLabel(from.to_string()).into());
    }
    if !session.interactive_labels().contains(&from) {
        return Err(SeatmapError::InvalidInput(format!(
            "Seat {from} is not available and cannot receive focus"
        )));
    }

    let mut focused = from.to_string();
    for direction in directions {
        match session.move_focus(&focused, *direction) {
            Some(next) => focused = next.to_string(),
            None => output.info(&format!("No seat {} of {focused}", direction.as_str())),
        }
        output.write(&format!("{}: {focused}", direction.as_str()));
    }

    if let Some(description) = session.describe(&focused) {
        output.info(&description);
    }
    Ok(focused)
}
