//! Config command - manage application settings

use crate::{SeatmapError, cli::ConfigCommands, config::SeatmapConfig, output::OutputWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, SeatmapError>;

/// Execute a config subcommand against the config file at `path`
///
/// Returns the configuration as it stands afterwards.
///
/// # Errors
/// Returns an error if the default chart does not exist or the file cannot be saved
pub fn execute(
    mut config: SeatmapConfig,
    path: &Path,
    command: &ConfigCommands,
    output: &impl OutputWriter,
) -> Result<SeatmapConfig> {
    match command {
        ConfigCommands::Show => {
            let chart = config
                .default_chart
                .as_ref()
                .map_or_else(|| "(none)".to_string(), |chart| chart.display().to_string());
            let max = config
                .max_selectable_seats
                .map_or_else(|| "unlimited".to_string(), |max| max.to_string());
            output.info(&format!("Config file: {}", path.display()));
            output.write(&format!("default_chart = {chart}"));
            output.write(&format!("max_selectable_seats = {max}"));
            output.write(&format!("quiet = {}", config.quiet));
        }
        ConfigCommands::SetDefault { chart } => {
            config.set_default_chart(chart.clone())?;
            config.save_to(path)?;
            output.success(&format!("Default chart set to {}", chart.display()));
        }
        ConfigCommands::SetMax { max } => {
            config.set_max_selectable_seats(*max);
            config.save_to(path)?;
            match config.max_selectable_seats {
                Some(max) => output.success(&format!("Selection limit set to {max}")),
                None => output.success("Selection limit cleared"),
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{BufferedWriter, MessageLevel};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_show_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let writer = BufferedWriter::new();

        execute(SeatmapConfig::default(), &path, &ConfigCommands::Show, &writer).unwrap();

        assert_eq!(
            writer.messages_at(MessageLevel::Normal),
            vec!["default_chart = (none)", "max_selectable_seats = unlimited", "quiet = false"]
        );
    }

    #[test]
    fn test_set_max_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let writer = BufferedWriter::new();

        let config = execute(
            SeatmapConfig::default(),
            &path,
            &ConfigCommands::SetMax { max: 3 },
            &writer,
        )
        .unwrap();
        assert_eq!(config.max_selectable_seats, Some(3));
        assert_eq!(SeatmapConfig::load_from(&path).unwrap().max_selectable_seats, Some(3));

        execute(config, &path, &ConfigCommands::SetMax { max: 0 }, &writer).unwrap();
        assert_eq!(SeatmapConfig::load_from(&path).unwrap().max_selectable_seats, None);
        assert_eq!(writer.latest_message().unwrap().1, "Selection limit cleared");
    }

    #[test]
    fn test_set_default_chart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let chart = dir.path().join("bus.toml");
        let writer = BufferedWriter::new();

        let missing = execute(
            SeatmapConfig::default(),
            &path,
            &ConfigCommands::SetDefault { chart: chart.clone() },
            &writer,
        );
        assert!(matches!(missing, Err(SeatmapError::ConfigError(_))));
        assert!(!path.exists());

        fs::write(&chart, "rows = [\"a\"]").unwrap();
        let config = execute(
            SeatmapConfig::default(),
            &path,
            &ConfigCommands::SetDefault { chart: chart.clone() },
            &writer,
        )
        .unwrap();
        assert_eq!(config.default_chart, Some(chart.clone()));
        assert_eq!(SeatmapConfig::load_from(&path).unwrap().default_chart, Some(chart));
    }
}
