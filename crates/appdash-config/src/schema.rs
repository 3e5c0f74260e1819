//! Configuration schema definitions using serde.

use appdash_common::AppDashError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the report generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dataset configuration.
    pub data: DataConfig,
    /// Report output configuration.
    pub report: ReportConfig,
    /// Reveal-schedule configuration.
    pub reveal: RevealConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the listings CSV file.
    pub input_path: PathBuf,
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path the HTML document is written to, overwritten each run.
    pub output_path: PathBuf,
    /// Heading shown at the top of the page.
    pub page_title: String,
    /// Whether to open the written report in the system viewer.
    pub open_viewer: bool,
}

/// Reveal-schedule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// IANA name of the reference timezone the windows are evaluated in.
    pub timezone: String,
    /// When set, every chart slot is treated as unlocked.
    pub ignore_windows: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Whether to use colored console output.
    pub colored: bool,
    /// Optional log file path.
    pub file: Option<String>,
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AppDashError> {
        if self.data.input_path.as_os_str().is_empty() {
            return Err(AppDashError::validation_field(
                "input path cannot be empty",
                "data.input_path",
            ));
        }

        if self.report.output_path.as_os_str().is_empty() {
            return Err(AppDashError::validation_field(
                "output path cannot be empty",
                "report.output_path",
            ));
        }

        self.reveal.parsed_timezone()?;

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(AppDashError::validation_field(
                format!("unknown log level '{}'", self.logging.level),
                "logging.level",
            ));
        }

        Ok(())
    }
}

impl RevealConfig {
    /// Resolves the configured timezone name.
    pub fn parsed_timezone(&self) -> Result<Tz, AppDashError> {
        self.timezone.parse::<Tz>().map_err(|_| {
            AppDashError::validation_field(
                format!("unknown timezone '{}'", self.timezone),
                "reveal.timezone",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        let mut config = Config::default();
        config.reveal.timezone = "Atlantis/Central".to_string();
        assert!(config.validate().is_err());
        assert!(config.reveal.parsed_timezone().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_paths() {
        let mut config = Config::default();
        config.data.input_path = PathBuf::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.report.output_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parsed_timezone_default() {
        let config = Config::default();
        let tz = config.reveal.parsed_timezone().unwrap();
        assert_eq!(tz, chrono_tz::Asia::Kolkata);
    }
}
