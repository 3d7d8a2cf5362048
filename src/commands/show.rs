//! Show command - print a parsed chart

use super::load_definition;
use crate::{
    SeatmapError,
    chart::{ChartSession, SeatStatus},
    output::{OutputWriter, render_layer},
    selection::SelectionOptions,
};
use std::path::Path;

type Result<T> = std::result::Result<T, SeatmapError>;

/// Execute the show command
///
/// # Errors
/// Returns an error if the chart file cannot be loaded or serialized
pub fn execute(chart: &Path, json: bool, color: bool, output: &impl OutputWriter) -> Result<()> {
    let definition = load_definition(chart)?;
    let session = ChartSession::from_definition(&definition, SelectionOptions::new())?;

    if json {
        output.write(&serde_json::to_string_pretty(session.layers())?);
        return Ok(());
    }

    for (index, layer) in session.layers().iter().enumerate() {
        if index > 0 {
            output.write("");
        }
        for line in render_layer(layer, |_| false, color) {
            output.write(&line);
        }
    }

    let total = session.seats().count();
    let available = session
        .seats()
        .filter(|seat| seat.status == SeatStatus::Available)
        .count();
    output.info(&format!("{total} seats, {available} available"));

    if !session.legends().is_empty() {
        let captions: Vec<&str> = session
            .legends()
            .iter()
            .map(|item| item.sample().caption)
            .collect();
        output.info(&format!("Legend: {}", captions.join(", ")));
    }

    if session.is_disabled() {
        output.warning("Seat selection is disabled for this chart");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{BufferedWriter, MessageLevel};
    use std::fs;
    use tempfile::TempDir;

    fn write_chart(dir: &TempDir, text: &str) -> std::path::PathBuf {
        let path = dir.path().join("chart.toml");
        fs::write(&path, text).unwrap();
        path
    }

    const BUS: &str = r#"
        rows = ["d_o", "a_a"]
        booked = ["2"]
        legends = [{ status = "available" }, { status = "booked" }]
        [seat_types]
        a = { type = "seat", price = 100 }
        d = { type = "driver" }
        o = { type = "door" }
        _ = { type = "space" }
    "#;

    #[test]
    fn test_show_text() {
        let dir = TempDir::new().unwrap();
        let path = write_chart(&dir, BUS);
        let writer = BufferedWriter::new();

        execute(&path, false, false, &writer).unwrap();

        assert_eq!(writer.messages_at(MessageLevel::Normal), vec![" D       =", "[1]     [2]"]);
        assert_eq!(
            writer.messages_at(MessageLevel::Info),
            vec!["2 seats, 1 available", "Legend: available, booked"]
        );
    }

    #[test]
    fn test_show_json() {
        let dir = TempDir::new().unwrap();
        let path = write_chart(&dir, BUS);
        let writer = BufferedWriter::new();

        execute(&path, true, false, &writer).unwrap();

        let (level, text) = writer.latest_message().unwrap();
        assert_eq!(level, MessageLevel::Normal);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["seat_map"][1][0]["label"], "1");
        assert_eq!(value[0]["seat_map"][1][2]["status"], "booked");
        assert_eq!(value[0]["seat_map"][0][0]["type"], "driver");
    }

    #[test]
    fn test_show_disabled_chart_warns() {
        let dir = TempDir::new().unwrap();
        let path = write_chart(&dir, "rows = [\"a\"]\ndisabled = true\n[seat_types]\na = { type = \"seat\" }\n");
        let writer = BufferedWriter::new();

        execute(&path, false, false, &writer).unwrap();
        assert_eq!(writer.messages_at(MessageLevel::Warning).len(), 1);
    }

    #[test]
    fn test_show_missing_file() {
        let writer = BufferedWriter::new();
        let result = execute(Path::new("/nonexistent/chart.toml"), false, false, &writer);
        assert!(matches!(result, Err(SeatmapError::ChartError(_))));
    }
}
