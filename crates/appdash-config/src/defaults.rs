//! Default configuration values.

use crate::schema::*;
use std::path::PathBuf;

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            report: ReportConfig::default(),
            reveal: RevealConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("play store data.csv"),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("dashboard.html"),
            page_title: "Play Store Analytics".to_string(),
            open_viewer: true,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            timezone: "Asia/Kolkata".to_string(),
            ignore_windows: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            colored: true,
            file: None,
        }
    }
}
