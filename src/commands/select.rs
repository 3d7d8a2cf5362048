//! Select command - toggle seats and report the selection

use super::load_definition;
use crate::{
    SeatmapError,
    chart::ChartSession,
    output::{OutputWriter, selection_summary},
    selection::{SelectedSeat, SelectionOptions, ToggleOutcome},
};
use std::path::Path;

type Result<T> = std::result::Result<T, SeatmapError>;

/// Where the selection limit comes from, highest priority first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimitSources {
    /// `--max` on the command line, zero meaning unlimited
    pub explicit: Option<usize>,
    /// `max_selectable_seats` from the app config
    pub configured: Option<usize>,
}

/// Execute the select command
///
/// Labels are toggled in order. Selection changes and limit rejections are
/// reported as they happen; the final selection is printed at the end.
/// Unknown labels are reported and skipped.
///
/// # Errors
/// Returns an error if the chart file cannot be loaded
pub fn execute<W>(
    chart: &Path,
    labels: &[String],
    limits: LimitSources,
    quiet: bool,
    output: &W,
) -> Result<Vec<SelectedSeat>>
where
    W: OutputWriter + Clone + 'static,
{
    let definition = load_definition(chart)?;

    let change_writer = output.clone();
    let limit_writer = output.clone();
    let options = SelectionOptions::new()
        .max_selectable_seats(limits.configured)
        .on_selection_change(move |selection| {
            let labels: Vec<&str> = selection.iter().map(|seat| seat.label.as_str()).collect();
            change_writer.info(&format!("Selection: [{}]", labels.join(", ")));
        })
        .on_max_seats_reached(move |max| {
            limit_writer.warning(&format!("Maximum of {max} seat(s) already selected"));
        });

    let mut session = ChartSession::from_definition(&definition, options)?;
    if let Some(max) = limits.explicit {
        session.store_mut().set_max_selectable_seats((max > 0).then_some(max));
    }

    for label in labels {
        match session.activate(label) {
            Ok(Some(ToggleOutcome::Selected)) => output.success(&format!("Selected seat {label}")),
            Ok(Some(ToggleOutcome::Deselected)) => output.success(&format!("Deselected seat {label}")),
            Ok(Some(ToggleOutcome::LimitReached)) => {}
            Ok(None) => {
                let reason = match session.find_seat(label) {
                    Some(seat) if !session.is_disabled() => seat.status.as_str(),
                    _ => "disabled",
                };
                output.warning(&format!("Seat {label} is {reason} and cannot be selected"));
            }
            Err(e) => output.error(&e.to_string()),
        }
    }

    for line in selection_summary(session.selection(), quiet) {
        output.write(&line);
    }
    Ok(session.selection().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{BufferedWriter, MessageLevel};
    use std::fs;
    use tempfile::TempDir;

    fn chart(dir: &TempDir, extra: &str) -> std::path::PathBuf {
        let path = dir.path().join("chart.toml");
        let text = format!(
            "rows = [\"aaaa\"]\nbooked = [\"4\"]\n{extra}\n[seat_types]\na = {{ type = \"seat\", price = 50 }}\n"
        );
        fs::write(&path, text).unwrap();
        path
    }

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_select_and_deselect() {
        let dir = TempDir::new().unwrap();
        let path = chart(&dir, "");
        let writer = BufferedWriter::new();

        let selection = execute(&path, &labels(&["1", "2", "1"]), LimitSources::default(), false, &writer)
            .unwrap();

        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].label, "2");
        assert_eq!(
            writer.messages_at(MessageLevel::Info),
            vec!["Selection: [1]", "Selection: [1, 2]", "Selection: [2]"]
        );
        assert_eq!(
            writer.messages_at(MessageLevel::Success),
            vec!["Selected seat 1", "Selected seat 2", "Deselected seat 1"]
        );
        assert_eq!(
            writer.messages_at(MessageLevel::Normal),
            vec!["  seat 2 ($50)", "Total: $50 for 1 seat(s)"]
        );
    }

    #[test]
    fn test_limit_from_config() {
        let dir = TempDir::new().unwrap();
        let path = chart(&dir, "");
        let writer = BufferedWriter::new();
        let limits = LimitSources {
            explicit: None,
            configured: Some(1),
        };

        let selection = execute(&path, &labels(&["1", "2"]), limits, true, &writer).unwrap();

        assert_eq!(selection.len(), 1);
        assert_eq!(
            writer.messages_at(MessageLevel::Warning),
            vec!["Maximum of 1 seat(s) already selected"]
        );
        assert_eq!(writer.messages_at(MessageLevel::Normal), vec!["1"]);
    }

    #[test]
    fn test_chart_limit_overrides_config_and_flag_overrides_chart() {
        let dir = TempDir::new().unwrap();
        let path = chart(&dir, "max_selectable_seats = 2");
        let writer = BufferedWriter::new();

        let limits = LimitSources {
            explicit: None,
            configured: Some(1),
        };
        let selection = execute(&path, &labels(&["1", "2", "3"]), limits, true, &writer).unwrap();
        assert_eq!(selection.len(), 2);

        let limits = LimitSources {
            explicit: Some(3),
            configured: Some(1),
        };
        let selection = execute(&path, &labels(&["1", "2", "3"]), limits, true, &writer).unwrap();
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_zero_max_means_unlimited() {
        let dir = TempDir::new().unwrap();
        let path = chart(&dir, "max_selectable_seats = 1");
        let writer = BufferedWriter::new();
        let limits = LimitSources {
            explicit: Some(0),
            configured: None,
        };

        let selection = execute(&path, &labels(&["1", "2", "3"]), limits, true, &writer).unwrap();

        assert_eq!(selection.len(), 3);
        assert!(writer.messages_at(MessageLevel::Warning).is_empty());
    }

    #[test]
    fn test_booked_and_unknown_labels() {
        let dir = TempDir::new().unwrap();
        let path = chart(&dir, "");
        let writer = BufferedWriter::new();

        let selection = execute(&path, &labels(&["4", "9"]), LimitSources::default(), false, &writer)
            .unwrap();

        assert!(selection.is_empty());
        assert_eq!(
            writer.messages_at(MessageLevel::Warning),
            vec!["Seat 4 is booked and cannot be selected"]
        );
        assert_eq!(writer.messages_at(MessageLevel::Error), vec!["Unknown seat label: 9"]);
        assert_eq!(writer.messages_at(MessageLevel::Normal), vec!["No seats selected."]);
    }

    #[test]
    fn test_disabled_chart() {
        let dir = TempDir::new().unwrap();
        let path = chart(&dir, "disabled = true");
        let writer = BufferedWriter::new();

        let selection = execute(&path, &labels(&["1"]), LimitSources::default(), false, &writer).unwrap();

        assert!(selection.is_empty());
        assert_eq!(
            writer.messages_at(MessageLevel::Warning),
            vec!["Seat 1 is disabled and cannot be selected"]
        );
    }
}
